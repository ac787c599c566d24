//! Delete route - item removal for both collections

use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use tracing::{debug, warn};
use uuid::Uuid;

use ticklist_core::{today_label, ListTarget};

use crate::db::{ItemRepo, ListRepo};
use crate::state::AppState;

use super::{list_path, redirect_back};

/// Form body for POST /delete - the per-item checkbox form.
#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    /// Item id carried by the checkbox value
    checkbox: String,
    #[serde(rename = "listTitle")]
    list_title: String,
}

/// POST /delete - remove an item from the home collection or from a named
/// list's embedded sequence, then redirect back to the page.
///
/// Unknown ids, unparseable ids, and missing lists are no-ops that still
/// redirect.
pub async fn delete_item(State(state): State<AppState>, Form(form): Form<DeleteForm>) -> Response {
    let today = today_label();

    let Ok(item_id) = Uuid::parse_str(form.checkbox.trim()) else {
        warn!(raw = %form.checkbox, "unparseable item id on delete");
        return redirect_back(&form.list_title, &today);
    };

    match ListTarget::resolve(&form.list_title, &today) {
        Ok(ListTarget::Home) => {
            let repo = ItemRepo::new(state.pool());
            match repo.delete(item_id).await {
                Ok(true) => {}
                Ok(false) => debug!(%item_id, "delete of unknown home item"),
                Err(err) => warn!(%err, "failed to delete home item"),
            }
            Redirect::to("/").into_response()
        }
        Ok(ListTarget::Named(name)) => {
            let repo = ListRepo::new(state.pool());
            match repo.remove_item(name.as_str(), item_id).await {
                Ok(true) => {}
                Ok(false) => debug!(list = %name, %item_id, "delete of unknown list item"),
                Err(err) => warn!(%err, list = %name, "failed to delete list item"),
            }
            Redirect::to(&list_path(name.as_str())).into_response()
        }
        Err(err) => {
            warn!(%err, "invalid list title on delete");
            Redirect::to("/").into_response()
        }
    }
}
