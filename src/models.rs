use serde::{Deserialize, Serialize};

/// Activity as returned by `GET /api/v3/athlete/activities`. Only the id is
/// needed to fetch kudos; every other provider field is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Activity {
    pub id: u64,
}

/// One entry of an activity's kudos list.
#[derive(Debug, Clone, Deserialize)]
pub struct KudosGiver {
    pub firstname: String,
    pub lastname: String,
}

impl KudosGiver {
    /// Display-name key for the tally. First + last name is not a stable
    /// identifier: two people sharing a name merge into one entry.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

/// Successful `POST /oauth/token` response.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub athlete: Athlete,
}

#[derive(Debug, Deserialize)]
pub struct Athlete {
    pub firstname: String,
    pub lastname: String,
}

/// Error body some provider responses carry alongside a non-success status.
#[derive(Debug, Deserialize)]
pub struct ProviderError {
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedGiver {
    pub name: String,
    pub count: u64,
}

/// Aggregation result handed to the review page: top givers by kudos count
/// plus totals over the full tally.
#[derive(Debug, Serialize, Deserialize)]
pub struct KudosReport {
    pub athlete_name: String,
    pub ranked: Vec<RankedGiver>,
    pub total_activities: usize,
    pub total_kudos: u64,
}

/// Query parameters the provider sends back to the callback route.
#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub error: Option<String>,
}
