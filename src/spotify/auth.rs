use reqwest::Client;

use crate::{config::Config, types::TokenResponse, warning};

use super::ApiError;

/// Exchanges the configured client id and secret for a bearer token.
///
/// Uses the OAuth 2.0 client credentials grant: the credentials travel as
/// HTTP basic auth and the form body only declares the grant type. The token
/// is requested once per run and never refreshed.
///
/// # Arguments
///
/// * `client` - HTTP client shared by the whole run
/// * `config` - Supplies the client credentials and the token endpoint
///
/// # Returns
///
/// - `Ok(String)` - The `access_token` of the response. When the response has
///   no such field (rejected credentials, for instance) the token is empty
///   and a warning is printed; every later request then fails authorization
///   and is reported where it happens.
/// - `Err(ApiError)` - Network error or a body that is not JSON
///
/// # Example
///
/// ```
/// let client = Client::new();
/// let token = get_access_token(&client, &config).await?;
/// ```
pub async fn get_access_token(client: &Client, config: &Config) -> Result<String, ApiError> {
    let response = client
        .post(&config.token_url)
        .basic_auth(&config.client_id, Some(&config.client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    let body = response.text().await?;
    let json: TokenResponse =
        serde_json::from_str(&body).map_err(|e| ApiError::Malformed(e.to_string()))?;

    match json.access_token {
        Some(token) => Ok(token),
        None => {
            warning!("Token response carried no access token: {}", body);
            Ok(String::new())
        }
    }
}
