//! Item content validation

use std::fmt;

use super::ValidationError;

/// Maximum length for item content
const MAX_ITEM_CONTENT_LEN: usize = 512;

/// Default items seeded into an empty home collection and into every
/// freshly created list.
pub const DEFAULT_ITEMS: [&str; 3] = [
    "Welcome to your new list!",
    "ADD items using the + sign!",
    "<-- CLICK here to REMOVE an item!",
];

/// Validated to-do item text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemContent(String);

impl ItemContent {
    /// Create item content, trimming the input.
    ///
    /// Empty content is rejected; the resulting message is the single
    /// user-facing validation message for item submission.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "item" });
        }

        if trimmed.chars().count() > MAX_ITEM_CONTENT_LEN {
            return Err(ValidationError::TooLong {
                field: "item",
                max: MAX_ITEM_CONTENT_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Get the content as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ItemContent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
