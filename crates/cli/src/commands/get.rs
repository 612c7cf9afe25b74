use anyhow::Result;
use leadtrack_storage::LeadStore;

pub(crate) fn run(store: &LeadStore, id: i64) -> Result<()> {
    match store.get(id) {
        Ok(lead) => println!("{}", serde_json::to_string_pretty(&lead)?),
        Err(e) if e.is_not_found() => println!("Lead not found: {id}"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
