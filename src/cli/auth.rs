use crate::{
    config, error,
    spotify::auth::{AuthorizationRequest, authorize},
    success,
};

/// Authorizes with Spotify and caches the token, replacing any cached one.
pub async fn auth() {
    let token_file = config::spotify_token_file();
    let client = match authorize(&AuthorizationRequest::from_config(), &token_file).await {
        Ok(client) => client,
        Err(e) => error!("Spotify authorization failed: {}", e),
    };

    match client.me().await {
        Ok(me) => success!(
            "Logged in as {} ({})",
            me.display_name.as_deref().unwrap_or(&me.id),
            me.id
        ),
        Err(e) => error!("{}", e),
    }
}
