use std::env;

/// Runtime configuration, loaded once at startup from the environment.
/// The auth/api bases are split so tests can point the binary at a stub
/// provider.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub client_id: String,
    pub redirect_uri: String,
    pub auth_base: String,
    pub api_base: String,
    pub year: i32,
}

impl Config {
    pub fn load() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8080);
        let client_id =
            env::var("STRAVA_CLIENT_ID").unwrap_or_else(|_| "186241".to_string());
        let redirect_uri = env::var("STRAVA_REDIRECT_URI")
            .unwrap_or_else(|_| format!("http://localhost:{port}/auth/callback"));
        let auth_base = env::var("STRAVA_AUTH_BASE")
            .unwrap_or_else(|_| "https://www.strava.com".to_string());
        let api_base = env::var("STRAVA_API_BASE")
            .unwrap_or_else(|_| "https://www.strava.com".to_string());
        let year = env::var("KUDOS_YEAR")
            .ok()
            .and_then(|value| value.parse::<i32>().ok())
            .unwrap_or(2025);

        Self {
            port,
            client_id,
            redirect_uri,
            auth_base,
            api_base,
            year,
        }
    }
}
