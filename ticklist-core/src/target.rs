//! Target resolution: home collection vs. named list
//!
//! Form submissions carry the title of the page they were rendered on. A
//! title equal to today's date label addresses the home collection; anything
//! else addresses a named list. The discrimination happens once, here, and
//! handlers match on the resulting variant.

use super::{ListName, ValidationError};

/// Where a submitted item or deletion applies
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListTarget {
    /// The unnamed home collection, labeled by the current date
    Home,
    /// A named, persistent list
    Named(ListName),
}

impl ListTarget {
    /// Resolve a page label against today's date label.
    pub fn resolve(label: &str, today: &str) -> Result<Self, ValidationError> {
        if label == today {
            Ok(Self::Home)
        } else {
            Ok(Self::Named(ListName::new(label)?))
        }
    }
}
