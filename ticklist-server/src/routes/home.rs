//! Home page routes - the root page over the home item collection

use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use tracing::{debug, info, warn};

use ticklist_core::{today_label, ItemContent, ListTarget};

use crate::db::{ItemRepo, ListRepo};
use crate::state::AppState;
use crate::view;
use crate::Result;

use super::{list_path, redirect_back};

/// GET / - render the home list.
///
/// An empty collection is seeded with the defaults and the request
/// redirected to itself, so a page is never rendered from partially-seeded
/// state.
pub async fn home(State(state): State<AppState>) -> Result<Response> {
    let repo = ItemRepo::new(state.pool());
    let items = repo.list().await?;

    if items.is_empty() {
        let inserted = repo.seed_defaults().await?;
        info!(inserted, "seeded empty home collection");
        return Ok(Redirect::to("/").into_response());
    }

    Ok(view::list_page(&today_label(), &items).into_response())
}

/// Form body for POST / - both the new-list form and the add-item form
/// submit here.
#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    #[serde(rename = "newList")]
    new_list: Option<String>,
    #[serde(rename = "newItem")]
    new_item: Option<String>,
    list: Option<String>,
}

/// POST / - dual purpose: navigate to a (possibly new) named list, or
/// append an item to the collection the form was rendered on.
///
/// Write failures are logged and the request still redirects; state is
/// left unchanged (best effort, per the delete/append failure semantics).
pub async fn submit(State(state): State<AppState>, Form(form): Form<SubmitForm>) -> Response {
    // A submitted list name wins; creation is deferred to the GET handler.
    if let Some(raw) = form.new_list.as_deref() {
        if raw.trim().is_empty() {
            debug!("blank list name submitted");
        } else {
            return Redirect::to(&list_path(raw.trim())).into_response();
        }
    }

    let Some(raw_item) = form.new_item.as_deref() else {
        return Redirect::to("/").into_response();
    };
    let label = form.list.as_deref().unwrap_or_default();
    let today = today_label();

    let content = match ItemContent::new(raw_item) {
        Ok(content) => content,
        Err(err) => {
            warn!(%err, "rejected item submission");
            return redirect_back(label, &today);
        }
    };

    match ListTarget::resolve(label, &today) {
        Ok(ListTarget::Home) => {
            let repo = ItemRepo::new(state.pool());
            if let Err(err) = repo.insert(&content).await {
                warn!(%err, "failed to store home item");
            }
            Redirect::to("/").into_response()
        }
        Ok(ListTarget::Named(name)) => {
            let repo = ListRepo::new(state.pool());
            match repo.append_item(name.as_str(), &content).await {
                Ok(true) => {}
                Ok(false) => warn!(list = %name, "append target list not found"),
                Err(err) => warn!(%err, list = %name, "failed to append item"),
            }
            Redirect::to(&list_path(name.as_str())).into_response()
        }
        Err(err) => {
            warn!(%err, "invalid list label on item submission");
            Redirect::to("/").into_response()
        }
    }
}
