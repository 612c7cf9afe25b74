use std::path::Path;

use anyhow::Result;
use leadtrack_core::render_csv;
use leadtrack_storage::LeadStore;

pub(crate) fn run(store: &LeadStore, output: &Path) -> Result<()> {
    let leads = store.all_by_id()?;
    let bytes = render_csv(&leads)?;
    std::fs::write(output, bytes)?;
    println!("Exported {} leads to {}", leads.len(), output.display());
    Ok(())
}
