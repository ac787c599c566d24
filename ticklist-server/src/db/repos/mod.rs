//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Handles conflicts via ON CONFLICT or guarded inserts (no check-then-insert)
//! - Uses transactions for multi-step operations

pub mod items;
pub mod lists;

pub use items::{Item, ItemRepo};
pub use lists::{List, ListRepo, ListWithItems};
