use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failures across the authorization and aggregation stages. Messages are
/// user-facing: they end up on the start page (auth stage) or in the review
/// page's error panel (aggregation stage).
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("Authorization failed: {0}")]
    AuthorizationDenied(String),

    #[error("No authorization code received")]
    MissingCode,

    #[error("Missing code verifier - please try again")]
    MissingVerifier,

    #[error("Token exchange failed: {0}")]
    TokenExchangeFailed(String),

    #[error("Failed to connect to Strava: {0}")]
    Connection(#[from] reqwest::Error),

    #[error("Not connected to Strava")]
    Unauthenticated,

    #[error("Failed to fetch activities: {0}")]
    ActivityFetchFailed(String),

    #[error(
        "You have more than 199 activities in {0}. Unfortunately, this would \
         exceed Strava's rate limits. Try again later in the year!"
    )]
    VolumeExceeded(i32),

    #[error("Error loading data: {0}")]
    Aggregation(String),
}

impl FlowError {
    fn status(&self) -> StatusCode {
        match self {
            FlowError::AuthorizationDenied(_)
            | FlowError::MissingCode
            | FlowError::MissingVerifier => StatusCode::BAD_REQUEST,
            FlowError::Unauthenticated => StatusCode::UNAUTHORIZED,
            FlowError::VolumeExceeded(_) => StatusCode::UNPROCESSABLE_ENTITY,
            FlowError::TokenExchangeFailed(_)
            | FlowError::Connection(_)
            | FlowError::ActivityFetchFailed(_)
            | FlowError::Aggregation(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for FlowError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
