use anyhow::Result;
use leadtrack_core::normalize_status;
use leadtrack_storage::LeadStore;

pub(crate) fn run(store: &LeadStore, status: Option<&str>) -> Result<()> {
    // Filter through the same normalization stored statuses went through,
    // so `--status new` matches "New".
    let filter = status.map(normalize_status);
    let leads = store.list(filter.as_deref())?;
    println!("{}", serde_json::to_string_pretty(&leads)?);
    Ok(())
}
