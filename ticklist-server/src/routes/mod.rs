//! Route handlers
//!
//! Organized by page:
//! - home: the root page over the home item collection
//! - lists: named list pages (fetch-or-create)
//! - delete: item removal for both collections
//! - health: health check endpoint

pub mod delete;
pub mod health;
pub mod home;
pub mod lists;

pub use delete::*;
pub use health::*;
pub use home::*;
pub use lists::*;

use axum::response::{IntoResponse, Redirect, Response};
use ticklist_core::ListTarget;

/// Path for a named list page, safe for a Location header.
pub(crate) fn list_path(name: &str) -> String {
    format!("/{}", urlencoding::encode(name))
}

/// Redirect back to the page a form was rendered on: the home page for
/// today's label (or anything unresolvable), the list page otherwise.
pub(crate) fn redirect_back(label: &str, today: &str) -> Response {
    match ListTarget::resolve(label, today) {
        Ok(ListTarget::Named(name)) => Redirect::to(&list_path(name.as_str())).into_response(),
        _ => Redirect::to("/").into_response(),
    }
}
