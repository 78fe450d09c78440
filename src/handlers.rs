use crate::aggregate;
use crate::errors::FlowError;
use crate::models::{CallbackParams, KudosReport};
use crate::oauth;
use crate::pkce;
use crate::state::AppState;
use crate::strava::StravaClient;
use crate::ui;
use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use tracing::error;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let flash = state.session.lock().await.flash_error.take();
    Html(ui::render_index(flash.as_deref()))
}

/// Starts a fresh authorization attempt: new verifier into the session,
/// then hand the browser to the provider.
pub async fn login(State(state): State<AppState>) -> Redirect {
    let verifier = pkce::generate_verifier(pkce::VERIFIER_LENGTH);
    let challenge = pkce::derive_challenge(&verifier);

    match oauth::authorize_url(&state.config, &challenge) {
        Ok(url) => {
            let mut session = state.session.lock().await;
            session.reset();
            session.code_verifier = Some(verifier);
            Redirect::to(url.as_str())
        }
        Err(err) => back_to_start(&state, err).await,
    }
}

/// Provider redirect target. Success moves on to the review page; every
/// failure branch clears the attempt and returns to the start page with
/// the message.
pub async fn callback(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> Redirect {
    match run_exchange(&state, params).await {
        Ok(()) => Redirect::to("/review"),
        Err(err) => back_to_start(&state, err).await,
    }
}

async fn run_exchange(state: &AppState, params: CallbackParams) -> Result<(), FlowError> {
    if let Some(message) = params.error {
        return Err(FlowError::AuthorizationDenied(message));
    }
    let code = params.code.ok_or(FlowError::MissingCode)?;

    // take() makes the verifier single-use even if the exchange fails.
    let verifier = state
        .session
        .lock()
        .await
        .code_verifier
        .take()
        .ok_or(FlowError::MissingVerifier)?;

    let token = oauth::exchange_token(&state.http, &state.config, &code, &verifier).await?;

    let mut session = state.session.lock().await;
    session.access_token = Some(token.access_token);
    session.athlete_name = Some(format!(
        "{} {}",
        token.athlete.firstname, token.athlete.lastname
    ));
    Ok(())
}

async fn back_to_start(state: &AppState, err: FlowError) -> Redirect {
    error!("authorization flow failed: {err}");
    let mut session = state.session.lock().await;
    session.reset();
    session.flash_error = Some(err.to_string());
    Redirect::to("/")
}

/// Review page shell. Not being connected is the normal logged-out state,
/// so it redirects home rather than erroring.
pub async fn review(State(state): State<AppState>) -> Response {
    let session = state.session.lock().await;
    match session.athlete_name.as_deref() {
        Some(name) if session.access_token.is_some() => {
            Html(ui::render_review(name, state.config.year)).into_response()
        }
        _ => Redirect::to("/").into_response(),
    }
}

/// Runs the aggregation and returns the ranked report. Aggregation-stage
/// failures come back as a status + message the page renders in place.
pub async fn api_kudos(State(state): State<AppState>) -> Result<Json<KudosReport>, FlowError> {
    let (access_token, athlete_name) = {
        let session = state.session.lock().await;
        let token = session
            .access_token
            .clone()
            .ok_or(FlowError::Unauthenticated)?;
        (token, session.athlete_name.clone().unwrap_or_default())
    };

    let client = StravaClient::new(&state.http, &state.config.api_base, &access_token);
    let outcome = aggregate::collect_kudos(&client, state.config.year)
        .await
        .map_err(|err| {
            error!("aggregation failed: {err}");
            match err {
                FlowError::VolumeExceeded(_) => err,
                other => FlowError::Aggregation(other.to_string()),
            }
        })?;

    Ok(Json(KudosReport {
        athlete_name,
        ranked: outcome.ranked,
        total_activities: outcome.total_activities,
        total_kudos: outcome.total_kudos,
    }))
}
