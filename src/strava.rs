use crate::errors::FlowError;
use crate::models::{Activity, KudosGiver};
use reqwest::Client;

/// Bearer-authenticated client for the provider's activity API.
pub struct StravaClient<'a> {
    http: &'a Client,
    api_base: &'a str,
    access_token: &'a str,
}

impl<'a> StravaClient<'a> {
    pub fn new(http: &'a Client, api_base: &'a str, access_token: &'a str) -> Self {
        Self {
            http,
            api_base,
            access_token,
        }
    }

    /// One page of the athlete's activities inside `[after, before]`
    /// (inclusive epoch seconds).
    pub async fn list_activities(
        &self,
        after: i64,
        before: i64,
        per_page: usize,
        page: usize,
    ) -> Result<Vec<Activity>, FlowError> {
        let response = self
            .http
            .get(format!("{}/api/v3/athlete/activities", self.api_base))
            .query(&[
                ("after", after.to_string()),
                ("before", before.to_string()),
                ("per_page", per_page.to_string()),
                ("page", page.to_string()),
            ])
            .bearer_auth(self.access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FlowError::ActivityFetchFailed(format!(
                "activities request returned {}",
                response.status()
            )));
        }

        Ok(response.json().await?)
    }

    /// The kudos-giver list of one activity. Callers treat failures here as
    /// non-fatal; the activity then contributes no counted kudos.
    pub async fn list_kudos(&self, activity_id: u64) -> Result<Vec<KudosGiver>, FlowError> {
        let response = self
            .http
            .get(format!(
                "{}/api/v3/activities/{activity_id}/kudos",
                self.api_base
            ))
            .bearer_auth(self.access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FlowError::ActivityFetchFailed(format!(
                "kudos request for activity {activity_id} returned {}",
                response.status()
            )));
        }

        Ok(response.json().await?)
    }
}
