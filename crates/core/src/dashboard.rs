use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::lead::Lead;

/// Upper bound on the recent-activity list.
pub const RECENT_LEADS_LIMIT: usize = 5;

/// Follow-ups within this many days of today count as upcoming.
pub const FOLLOWUP_WINDOW_DAYS: i64 = 7;

/// Aggregated view over the full lead set.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub total_leads: u64,
    pub status_counts: HashMap<String, u64>,
    pub upcoming_followups: Vec<Lead>,
    pub recent_leads: Vec<Lead>,
}

impl DashboardSummary {
    /// Build the summary from the full lead set.
    ///
    /// `today` is injected rather than read from the wall clock so the
    /// aggregation is deterministic under test; callers pass the
    /// server-local current date.
    pub fn build(leads: &[Lead], today: NaiveDate) -> Self {
        let horizon = today + Duration::days(FOLLOWUP_WINDOW_DAYS);
        let mut upcoming: Vec<Lead> = leads
            .iter()
            .filter(|lead| lead.next_followup >= today && lead.next_followup <= horizon)
            .cloned()
            .collect();
        upcoming.sort_by_key(|lead| lead.next_followup);

        let mut recent: Vec<Lead> = leads.to_vec();
        recent.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        recent.truncate(RECENT_LEADS_LIMIT);

        Self {
            total_leads: leads.len() as u64,
            status_counts: status_histogram(leads),
            upcoming_followups: upcoming,
            recent_leads: recent,
        }
    }
}

/// Count of leads per status value.
pub fn status_histogram(leads: &[Lead]) -> HashMap<String, u64> {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for lead in leads {
        *counts.entry(lead.status.clone()).or_insert(0) += 1;
    }
    counts
}
