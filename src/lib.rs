pub mod aggregate;
pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod oauth;
pub mod pkce;
pub mod state;
pub mod strava;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
