//! Server-rendered HTML pages.
//!
//! Deliberately thin: a shared layout, escaping helpers, and one render
//! function per page. No template engine; pages are small enough that
//! `format!` stays readable.

use std::collections::HashMap;

use leadtrack_core::{DashboardSummary, Lead};

/// Escape text for interpolation into HTML bodies and attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Percent-encode a query-string value (RFC 3986 unreserved set kept).
pub fn encode_query(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            },
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - Leadtrack</title>
<style>
body {{ font-family: sans-serif; margin: 2rem auto; max-width: 60rem; color: #222; }}
table {{ border-collapse: collapse; width: 100%; margin: 1rem 0; }}
th, td {{ border: 1px solid #ccc; padding: 0.4rem 0.6rem; text-align: left; }}
th {{ background: #f0f0f0; }}
nav a {{ margin-right: 1rem; }}
.notice {{ background: #fff3cd; border: 1px solid #ffe08a; padding: 0.5rem 1rem; margin: 1rem 0; }}
form label {{ display: block; margin: 0.6rem 0 0.2rem; }}
form input, form textarea {{ width: 24rem; padding: 0.3rem; }}
</style>
</head>
<body>
<nav><a href="/">Home</a><a href="/dashboard">Dashboard</a><a href="/view">Leads</a><a href="/add">Add lead</a><a href="/export">Export CSV</a></nav>
<h1>{title}</h1>
{body}
</body>
</html>
"#
    )
}

fn notice_banner(notice: Option<&str>) -> String {
    match notice {
        Some(text) => format!(r#"<p class="notice">{}</p>"#, escape_html(text)),
        None => String::new(),
    }
}

fn lead_table(leads: &[Lead]) -> String {
    let mut rows = String::new();
    for lead in leads {
        rows.push_str(&format!(
            "<tr><td>{id}</td><td>{name}</td><td>{email}</td><td>{status}</td>\
             <td>{score}</td><td>{followup}</td><td>{notes}</td>\
             <td><a href=\"/edit/{id}\">edit</a> <a href=\"/delete/{id}\">delete</a></td></tr>\n",
            id = lead.id,
            name = escape_html(&lead.name),
            email = escape_html(&lead.email),
            status = escape_html(&lead.status),
            score = lead.score,
            followup = lead.next_followup,
            notes = escape_html(&lead.notes),
        ));
    }
    format!(
        "<table><tr><th>ID</th><th>Name</th><th>Email</th><th>Status</th>\
         <th>Score</th><th>Next Follow-Up</th><th>Notes</th><th></th></tr>\n{rows}</table>"
    )
}

fn histogram_list(counts: &HashMap<String, u64>) -> String {
    let mut entries: Vec<(&String, &u64)> = counts.iter().collect();
    entries.sort_by_key(|(status, _)| status.as_str());
    let items: String = entries
        .iter()
        .map(|(status, count)| {
            let label = if status.is_empty() { "(none)".to_owned() } else { escape_html(status) };
            format!(
                "<li><a href=\"/view?status={}\">{label}</a>: {count}</li>\n",
                encode_query(status)
            )
        })
        .collect();
    format!("<ul>\n{items}</ul>")
}

pub fn render_view(
    leads: &[Lead],
    histogram: &HashMap<String, u64>,
    selected_status: Option<&str>,
    notice: Option<&str>,
) -> String {
    let heading = match selected_status {
        Some(status) => format!("Leads with status {}", escape_html(status)),
        None => "All leads".to_owned(),
    };
    let body = format!(
        "{notice}<h2>{heading}</h2>\n{table}\n<h2>By status</h2>\n{histogram}\n<p><a href=\"/view\">Show all</a></p>",
        notice = notice_banner(notice),
        table = lead_table(leads),
        histogram = histogram_list(histogram),
    );
    layout("Leads", &body)
}

pub fn render_dashboard(summary: &DashboardSummary, all_leads: &[Lead]) -> String {
    let body = format!(
        "<p>Total leads: <strong>{total}</strong></p>\n\
         <h2>By status</h2>\n{histogram}\n\
         <h2>Upcoming follow-ups (next 7 days)</h2>\n{upcoming}\n\
         <h2>Recently updated</h2>\n{recent}\n\
         <h2>All leads</h2>\n{all}",
        total = summary.total_leads,
        histogram = histogram_list(&summary.status_counts),
        upcoming = lead_table(&summary.upcoming_followups),
        recent = lead_table(&summary.recent_leads),
        all = lead_table(all_leads),
    );
    layout("Dashboard", &body)
}

pub fn render_lead_form(action: &str, lead: Option<&Lead>, notice: Option<&str>) -> String {
    let (title, name, email, status, score, followup, notes) = match lead {
        Some(lead) => (
            "Edit lead",
            escape_html(&lead.name),
            escape_html(&lead.email),
            escape_html(&lead.status),
            lead.score.to_string(),
            lead.next_followup.to_string(),
            escape_html(&lead.notes),
        ),
        None => (
            "Add lead",
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
        ),
    };
    let body = format!(
        r#"{notice}<form method="post" action="{action}">
<label for="name">Name</label>
<input id="name" name="name" value="{name}">
<label for="email">Email</label>
<input id="email" name="email" value="{email}">
<label for="status">Status</label>
<input id="status" name="status" value="{status}">
<label for="score">Score</label>
<input id="score" name="score" value="{score}">
<label for="next_followup">Next follow-up</label>
<input id="next_followup" name="next_followup" type="date" value="{followup}">
<label for="notes">Notes</label>
<textarea id="notes" name="notes">{notes}</textarea>
<p><button type="submit">Save</button></p>
</form>"#,
        notice = notice_banner(notice),
        action = escape_html(action),
    );
    layout(title, &body)
}

pub fn render_not_found(what: &str) -> String {
    layout("Not found", &format!("<p>No such record: {}.</p>", escape_html(what)))
}

pub fn render_server_error() -> String {
    layout("Error", "<p>Something went wrong. The error has been logged.</p>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<b "x" & 'y'>"#), "&lt;b &quot;x&quot; &amp; &#39;y&#39;&gt;");
    }

    #[test]
    fn test_encode_query_keeps_unreserved() {
        assert_eq!(encode_query("Closed-won_1.0~x"), "Closed-won_1.0~x");
    }

    #[test]
    fn test_encode_query_escapes_separators() {
        assert_eq!(encode_query("a b&c=d"), "a%20b%26c%3Dd");
    }
}
