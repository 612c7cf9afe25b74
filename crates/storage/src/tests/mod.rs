//! Test utilities and module declarations for storage tests.

use leadtrack_core::{LeadDraft, LeadFields};
use tempfile::TempDir;

use crate::LeadStore;

pub fn create_test_store() -> (LeadStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let store = LeadStore::open(&db_path).unwrap();
    (store, temp_dir)
}

/// Build a draft through the normal parsing path so tests exercise the
/// same normalization production input goes through.
pub fn draft(name: &str, status: &str, score: &str, next_followup: &str) -> LeadDraft {
    LeadFields {
        name: Some(name.to_owned()),
        email: Some(format!("{}@example.com", name.to_lowercase())),
        status: Some(status.to_owned()),
        score: Some(score.to_owned()),
        next_followup: Some(next_followup.to_owned()),
        notes: Some(String::new()),
    }
    .into_draft()
    .unwrap()
}

mod lead_tests;
