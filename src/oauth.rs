use crate::config::Config;
use crate::errors::FlowError;
use crate::models::{ProviderError, TokenResponse};
use reqwest::{Client, Url};
use serde_json::json;
use tracing::info;

/// Builds the provider authorization URL for one attempt. The challenge is
/// the S256 derivation of the verifier stored in the session; the provider
/// validates that same pairing at exchange time.
pub fn authorize_url(config: &Config, challenge: &str) -> Result<Url, FlowError> {
    Url::parse_with_params(
        &format!("{}/oauth/authorize", config.auth_base),
        &[
            ("client_id", config.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("approval_prompt", "auto"),
            ("scope", "activity:read_all"),
            ("code_challenge", challenge),
            ("code_challenge_method", "S256"),
        ],
    )
    .map_err(|err| FlowError::TokenExchangeFailed(err.to_string()))
}

/// Exchanges an authorization code plus its verifier for an access token
/// and the athlete identity.
pub async fn exchange_token(
    http: &Client,
    config: &Config,
    code: &str,
    verifier: &str,
) -> Result<TokenResponse, FlowError> {
    let response = http
        .post(format!("{}/oauth/token", config.auth_base))
        .json(&json!({
            "client_id": config.client_id,
            "code": code,
            "code_verifier": verifier,
            "grant_type": "authorization_code",
        }))
        .send()
        .await?;

    if !response.status().is_success() {
        let message = response
            .json::<ProviderError>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| "provider rejected the request".to_string());
        return Err(FlowError::TokenExchangeFailed(message));
    }

    let token: TokenResponse = response.json().await?;
    info!(
        athlete = %format!("{} {}", token.athlete.firstname, token.athlete.lastname),
        "token exchange completed"
    );
    Ok(token)
}
