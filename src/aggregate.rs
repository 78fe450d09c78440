use crate::errors::FlowError;
use crate::models::{KudosGiver, RankedGiver};
use crate::strava::StravaClient;
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::{info, warn};

/// Provider page limit; also the cap on how many activities one run will
/// process before the volume guard aborts.
const PAGE_LIMIT: usize = 200;
const TOP_N: usize = 30;

#[derive(Debug)]
pub struct Aggregate {
    pub ranked: Vec<RankedGiver>,
    pub total_activities: usize,
    pub total_kudos: u64,
}

/// Inclusive epoch-second bounds of a calendar year, UTC: Jan 1 00:00:00
/// through Dec 31 23:59:59.
pub fn year_bounds(year: i32) -> (i64, i64) {
    let start = NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp())
        .unwrap_or_default();
    let end = NaiveDate::from_ymd_opt(year, 12, 31)
        .and_then(|date| date.and_hms_opt(23, 59, 59))
        .map(|dt| dt.and_utc().timestamp())
        .unwrap_or_default();
    (start, end)
}

/// Fetches the year's activities, walks their kudos lists one request at a
/// time, and ranks the givers. A kudos fetch that fails only costs that
/// activity's kudos; everything before the kudos stage aborts the run.
pub async fn collect_kudos(
    client: &StravaClient<'_>,
    year: i32,
) -> Result<Aggregate, FlowError> {
    let (after, before) = year_bounds(year);
    let activities = client.list_activities(after, before, PAGE_LIMIT, 1).await?;

    if activities.len() == PAGE_LIMIT {
        // One-item probe of the next page. Anything there means the year
        // has more activities than one run can safely walk, so stop before
        // issuing a single kudos request.
        let overflow = client.list_activities(after, before, 1, 2).await?;
        if !overflow.is_empty() {
            return Err(FlowError::VolumeExceeded(year));
        }
    }

    info!(count = activities.len(), year, "fetched activities");

    let mut counts: HashMap<String, u64> = HashMap::new();
    for activity in &activities {
        match client.list_kudos(activity.id).await {
            Ok(givers) => count_givers(&mut counts, &givers),
            Err(err) => {
                warn!(activity = activity.id, "skipping kudos for activity: {err}");
            }
        }
    }

    let (ranked, total_kudos) = rank(counts, TOP_N);
    Ok(Aggregate {
        ranked,
        total_activities: activities.len(),
        total_kudos,
    })
}

fn count_givers(counts: &mut HashMap<String, u64>, givers: &[KudosGiver]) {
    for giver in givers {
        *counts.entry(giver.display_name()).or_default() += 1;
    }
}

/// Sorts the tally descending by count and keeps the top `limit` entries.
/// The returned total covers the whole tally, not just the kept slice.
fn rank(counts: HashMap<String, u64>, limit: usize) -> (Vec<RankedGiver>, u64) {
    let total_kudos = counts.values().sum();
    let mut ranked: Vec<RankedGiver> = counts
        .into_iter()
        .map(|(name, count)| RankedGiver { name, count })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);
    (ranked, total_kudos)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn giver(first: &str, last: &str) -> KudosGiver {
        KudosGiver {
            firstname: first.to_string(),
            lastname: last.to_string(),
        }
    }

    #[test]
    fn year_bounds_cover_the_full_year() {
        let (start, end) = year_bounds(2025);
        assert_eq!(start, 1735689600); // 2025-01-01T00:00:00Z
        assert_eq!(end, 1767225599); // 2025-12-31T23:59:59Z
    }

    #[test]
    fn tally_counts_each_appearance_once() {
        let mut counts = HashMap::new();
        count_givers(&mut counts, &[giver("Jo", "Lin"), giver("Sam", "Park")]);
        count_givers(&mut counts, &[giver("Jo", "Lin")]);

        assert_eq!(counts.get("Jo Lin"), Some(&2));
        assert_eq!(counts.get("Sam Park"), Some(&1));

        let (ranked, total_kudos) = rank(counts, TOP_N);
        assert_eq!(total_kudos, 3);
        assert_eq!(ranked[0].name, "Jo Lin");
        assert_eq!(ranked[0].count, 2);
    }

    #[test]
    fn identical_names_collapse_into_one_entry() {
        let mut counts = HashMap::new();
        count_givers(&mut counts, &[giver("Jo", "Lin"), giver("Jo", "Lin")]);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get("Jo Lin"), Some(&2));
    }

    #[test]
    fn rank_truncates_but_total_covers_everyone() {
        let mut counts = HashMap::new();
        for i in 0..40 {
            counts.insert(format!("Giver {i}"), (i + 1) as u64);
        }

        let (ranked, total_kudos) = rank(counts, TOP_N);
        assert_eq!(ranked.len(), TOP_N);
        // Descending: the top entry is the largest, and nothing out of order.
        assert_eq!(ranked[0].count, 40);
        assert!(ranked.windows(2).all(|w| w[0].count >= w[1].count));
        // Sum over all 40 givers, not the kept 30.
        assert_eq!(total_kudos, (1..=40).sum::<u64>());
    }

    #[test]
    fn rank_of_empty_tally_is_empty() {
        let (ranked, total_kudos) = rank(HashMap::new(), TOP_N);
        assert!(ranked.is_empty());
        assert_eq!(total_kudos, 0);
    }
}
