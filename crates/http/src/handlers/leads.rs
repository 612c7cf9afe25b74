use axum::extract::{Form, Path, Query, State};
use axum::response::{Html, Redirect};
use std::sync::Arc;

use leadtrack_core::{LeadFields, status_histogram};

use crate::AppState;
use crate::blocking::run_blocking;
use crate::page_error::PageError;
use crate::pages::{self, encode_query};
use crate::query_types::{NoticeQuery, ViewQuery};

pub async fn view_leads(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ViewQuery>,
) -> Result<Html<String>, PageError> {
    // An empty ?status= means "no filter", same as no parameter.
    let filter = query.status.filter(|s| !s.is_empty());

    let store = state.store.clone();
    let status = filter.clone();
    let leads = run_blocking(move || store.list(status.as_deref())).await?;

    let store = state.store.clone();
    let all = run_blocking(move || store.list(None)).await?;

    Ok(Html(pages::render_view(
        &leads,
        &status_histogram(&all),
        filter.as_deref(),
        query.notice.as_deref(),
    )))
}

pub async fn add_form(Query(query): Query<NoticeQuery>) -> Html<String> {
    Html(pages::render_lead_form("/add", None, query.notice.as_deref()))
}

pub async fn add_lead(
    State(state): State<Arc<AppState>>,
    Form(fields): Form<LeadFields>,
) -> Result<Redirect, PageError> {
    match fields.into_draft() {
        Ok(draft) => {
            let store = state.store.clone();
            let lead = run_blocking(move || store.create(&draft)).await?;
            tracing::info!(id = lead.id, "lead created");
            Ok(Redirect::to(&format!("/view?notice={}", encode_query("Lead added successfully!"))))
        },
        Err(err) => {
            tracing::warn!(%err, "rejected add-lead form");
            Ok(Redirect::to(&format!("/add?notice={}", encode_query(&err.to_string()))))
        },
    }
}

pub async fn edit_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Query(query): Query<NoticeQuery>,
) -> Result<Html<String>, PageError> {
    let store = state.store.clone();
    let lead = run_blocking(move || store.get(id)).await?;
    Ok(Html(pages::render_lead_form(&format!("/edit/{id}"), Some(&lead), query.notice.as_deref())))
}

pub async fn edit_lead(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Form(fields): Form<LeadFields>,
) -> Result<Redirect, PageError> {
    match fields.into_draft() {
        Ok(draft) => {
            let store = state.store.clone();
            run_blocking(move || store.update(id, &draft)).await?;
            tracing::info!(id, "lead updated");
            Ok(Redirect::to(&format!(
                "/view?notice={}",
                encode_query("Lead updated successfully!")
            )))
        },
        Err(err) => {
            // An unknown id is still a 404, even when the form is bad.
            let store = state.store.clone();
            run_blocking(move || store.get(id)).await?;
            tracing::warn!(id, %err, "rejected edit-lead form");
            Ok(Redirect::to(&format!("/edit/{id}?notice={}", encode_query(&err.to_string()))))
        },
    }
}

pub async fn delete_lead(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Redirect, PageError> {
    let store = state.store.clone();
    run_blocking(move || store.delete(id)).await?;
    tracing::info!(id, "lead deleted");
    Ok(Redirect::to(&format!("/view?notice={}", encode_query("Lead deleted successfully!"))))
}
