use anyhow::Result;
use chrono::Local;
use leadtrack_core::DashboardSummary;
use leadtrack_storage::LeadStore;

pub(crate) fn run(store: &LeadStore) -> Result<()> {
    let leads = store.all_by_created()?;
    let summary = DashboardSummary::build(&leads, Local::now().date_naive());
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
