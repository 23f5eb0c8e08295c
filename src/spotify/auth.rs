use base64::{Engine, engine::general_purpose::STANDARD};

use crate::types::TokenResponse;

use super::SpotifyApi;

impl SpotifyApi {
    /// Fetches a short-lived bearer token via the client-credentials grant.
    ///
    /// Sends `client_id:client_secret` as Base64 Basic auth to the token
    /// endpoint. Any failure (network, 4xx/5xx, malformed body) is logged
    /// and surfaces as `None`; an absent token is a distinct state the
    /// caller must handle, not an error thrown past it. The resolver treats
    /// it as fatal; the enricher treats it as "search unavailable".
    pub async fn fetch_access_token(&self) -> Option<String> {
        let credentials = STANDARD.encode(format!(
            "{}:{}",
            self.cfg.client_id, self.cfg.client_secret
        ));

        let response = self
            .client
            .post(&self.cfg.token_url)
            .header("Authorization", format!("Basic {credentials}"))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body("grant_type=client_credentials")
            .send()
            .await;

        let response = match response {
            Ok(resp) => match resp.error_for_status() {
                Ok(valid_response) => valid_response,
                Err(err) => {
                    log::warn!("Error fetching Spotify access token: {err}");
                    return None;
                }
            },
            Err(err) => {
                log::warn!("Error fetching Spotify access token: {err}");
                return None;
            }
        };

        match response.json::<TokenResponse>().await {
            Ok(token) => {
                log::debug!("Spotify access token fetched successfully");
                Some(token.access_token)
            }
            Err(err) => {
                log::warn!("Malformed Spotify token response: {err}");
                None
            }
        }
    }
}
