//! List name validation and canonicalization
//!
//! Canonical form: first character uppercased, remainder lowercased, so
//! `/shopping`, `/Shopping`, and `/SHOPPING` all address the same list.

use std::fmt;

use super::ValidationError;

/// Maximum length for list names
const MAX_LIST_NAME_LEN: usize = 64;

/// Validated, canonicalized list name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListName(String);

impl ListName {
    /// Create a list name, trimming and canonicalizing the input.
    ///
    /// # Rules
    /// - Non-empty after trimming
    /// - Max 64 characters
    /// - Canonicalized to first-upper, rest-lower
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "list name" });
        }

        if trimmed.chars().count() > MAX_LIST_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "list name",
                max: MAX_LIST_NAME_LEN,
            });
        }

        Ok(Self(canonicalize(trimmed)))
    }

    /// Get the canonical name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ListName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// First character uppercased, remainder lowercased.
fn canonicalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.extend(chars.flat_map(|c| c.to_lowercase()));
            out
        }
        None => String::new(),
    }
}
