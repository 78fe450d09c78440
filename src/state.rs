use crate::config::Config;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Single-tab flow context. Each field maps to one session key of the
/// original page (`code_verifier`, `access_token`, `athlete_name`); the
/// flash slot carries a failure message back to the start page, where it is
/// rendered once and cleared. Mutations only happen at stage boundaries.
#[derive(Debug, Default)]
pub struct Session {
    pub code_verifier: Option<String>,
    pub access_token: Option<String>,
    pub athlete_name: Option<String>,
    pub flash_error: Option<String>,
}

impl Session {
    /// Drops everything, including any pending flash. Used when a new
    /// authorization attempt starts.
    pub fn reset(&mut self) {
        *self = Session::default();
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: reqwest::Client,
    pub session: Arc<Mutex<Session>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            http: reqwest::Client::new(),
            session: Arc::new(Mutex::new(Session::default())),
        }
    }
}
