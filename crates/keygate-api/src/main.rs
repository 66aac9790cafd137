use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use keygate_api::config::Config;
use keygate_api::state::AppState;
use keygate_auth::cognito::CognitoProvider;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = Config::from_env()?;

    let provider = CognitoProvider::connect(
        &config.client_id,
        &config.user_pool_id,
        config.region.as_deref(),
    )
    .await;
    let state = AppState::new(Arc::new(provider));

    let app = keygate_api::router(state);

    if config.lambda_runtime {
        tracing::info!("serving through the Lambda runtime");
        return lambda_http::run(app).await.map_err(|e| eyre::eyre!(e));
    }

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
