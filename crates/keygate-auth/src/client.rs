use aws_sdk_cognitoidentityprovider::Client;

/// Build a Cognito Identity Provider client from the default AWS config chain.
///
/// `region` pins the client to that region; `None` leaves region discovery
/// to the chain (`AWS_REGION`, profile, IMDS).
pub async fn build_client(region: Option<&str>) -> Client {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
    if let Some(region) = region {
        loader = loader.region(aws_config::Region::new(region.to_string()));
    }
    Client::new(&loader.load().await)
}
