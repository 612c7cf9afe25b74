use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A sales prospect record.
///
/// `id` is assigned by the store on creation and never changes.
/// `updated_at` is refreshed on every mutation; `created_at <= updated_at`
/// always holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub status: String,
    pub score: i64,
    pub next_followup: NaiveDate,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw form payload as submitted by the browser or CLI.
///
/// Every field is optional at this layer; presence requirements are
/// enforced by [`LeadFields::into_draft`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeadFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub status: Option<String>,
    pub score: Option<String>,
    pub next_followup: Option<String>,
    pub notes: Option<String>,
}

/// Validated, normalized lead payload ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadDraft {
    pub name: String,
    pub email: String,
    pub status: String,
    pub score: i64,
    pub next_followup: NaiveDate,
    pub notes: String,
}

impl LeadFields {
    /// Validate and normalize into a [`LeadDraft`].
    ///
    /// `status` may be absent (an unset status is legal and stays empty);
    /// every other field is required. `score` must parse as an integer and
    /// `next_followup` as an ISO `YYYY-MM-DD` date.
    pub fn into_draft(self) -> Result<LeadDraft, ValidationError> {
        let name = self.name.ok_or(ValidationError::MissingField("name"))?;
        let email = self.email.ok_or(ValidationError::MissingField("email"))?;
        let status = normalize_status(self.status.as_deref().unwrap_or(""));
        let score_raw = self.score.ok_or(ValidationError::MissingField("score"))?;
        let score = score_raw
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidScore(score_raw.clone()))?;
        let date_raw = self.next_followup.ok_or(ValidationError::MissingField("next_followup"))?;
        let next_followup = NaiveDate::parse_from_str(date_raw.trim(), "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate(date_raw.clone()))?;
        let notes = self.notes.ok_or(ValidationError::MissingField("notes"))?;
        Ok(LeadDraft { name, email, status, score, next_followup, notes })
    }
}

/// Normalize a status label: trim whitespace, uppercase the first
/// character, lowercase the rest. Empty input stays empty.
pub fn normalize_status(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => {
            first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect()
        },
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_fields() -> LeadFields {
        LeadFields {
            name: Some("Ann".to_owned()),
            email: Some("ann@example.com".to_owned()),
            status: Some("  contacted ".to_owned()),
            score: Some("42".to_owned()),
            next_followup: Some("2026-09-01".to_owned()),
            notes: Some("met at expo".to_owned()),
        }
    }

    #[test]
    fn test_normalize_status_trims_and_capitalizes() {
        assert_eq!(normalize_status("  contacted "), "Contacted");
        assert_eq!(normalize_status("new"), "New");
    }

    #[test]
    fn test_normalize_status_lowercases_rest() {
        assert_eq!(normalize_status("VIP"), "Vip");
        assert_eq!(normalize_status("CLOSED WON"), "Closed won");
    }

    #[test]
    fn test_normalize_status_empty() {
        assert_eq!(normalize_status(""), "");
        assert_eq!(normalize_status("   "), "");
    }

    #[test]
    fn test_into_draft_parses_and_normalizes() {
        let draft = full_fields().into_draft().expect("valid fields");
        assert_eq!(draft.status, "Contacted");
        assert_eq!(draft.score, 42);
        assert_eq!(draft.next_followup, NaiveDate::from_ymd_opt(2026, 9, 1).unwrap());
    }

    #[test]
    fn test_into_draft_status_absent_is_empty() {
        let mut fields = full_fields();
        fields.status = None;
        let draft = fields.into_draft().expect("status is optional");
        assert_eq!(draft.status, "");
    }

    #[test]
    fn test_into_draft_missing_name() {
        let mut fields = full_fields();
        fields.name = None;
        let err = fields.into_draft().unwrap_err();
        assert_eq!(err, ValidationError::MissingField("name"));
    }

    #[test]
    fn test_into_draft_non_numeric_score() {
        let mut fields = full_fields();
        fields.score = Some("high".to_owned());
        let err = fields.into_draft().unwrap_err();
        assert_eq!(err, ValidationError::InvalidScore("high".to_owned()));
    }

    #[test]
    fn test_into_draft_malformed_date() {
        let mut fields = full_fields();
        fields.next_followup = Some("01/09/2026".to_owned());
        let err = fields.into_draft().unwrap_err();
        assert_eq!(err, ValidationError::InvalidDate("01/09/2026".to_owned()));
    }
}
