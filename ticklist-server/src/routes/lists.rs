//! Named-list routes - fetch-or-create list pages

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use tracing::info;

use ticklist_core::ListName;

use crate::db::ListRepo;
use crate::state::AppState;
use crate::view;
use crate::Result;

use super::list_path;

/// GET /{name} - render a named list, creating it on first visit.
///
/// The raw path segment is canonicalized (first letter uppercase, rest
/// lower), so `/work` and `/Work` address the same list. An absent list is
/// created with the default items and the request redirected, so the
/// subsequent GET renders the freshly created list.
pub async fn named_list(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Response> {
    let name = ListName::new(&raw)?;
    let repo = ListRepo::new(state.pool());

    if let Some(found) = repo.find_with_items(name.as_str()).await? {
        return Ok(view::list_page(&found.list.name, &found.items).into_response());
    }

    let created = repo.create_with_defaults(name.as_str()).await?;
    if created {
        info!(list = %name, "created list with default items");
    }

    Ok(Redirect::to(&list_path(name.as_str())).into_response())
}
