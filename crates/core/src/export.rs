use crate::lead::Lead;

/// Download name for the exported document.
pub const EXPORT_FILE_NAME: &str = "leads_export.csv";

/// Column order of the export, header row included verbatim.
pub const EXPORT_HEADER: [&str; 9] = [
    "ID",
    "Name",
    "Email",
    "Status",
    "Score",
    "Next Follow-Up",
    "Notes",
    "Created At",
    "Updated At",
];

/// Render leads as a CSV document, one row per lead in the given order.
///
/// Callers wanting deterministic output pass an id-ordered slice. Dates
/// render as `YYYY-MM-DD`, timestamps as RFC 3339.
pub fn render_csv(leads: &[Lead]) -> Result<Vec<u8>, csv::Error> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(EXPORT_HEADER)?;
    for lead in leads {
        wtr.write_record(&[
            lead.id.to_string(),
            lead.name.clone(),
            lead.email.clone(),
            lead.status.clone(),
            lead.score.to_string(),
            lead.next_followup.to_string(),
            lead.notes.clone(),
            lead.created_at.to_rfc3339(),
            lead.updated_at.to_rfc3339(),
        ])?;
    }
    Ok(wtr.into_inner().map_err(|e| e.into_error())?)
}
