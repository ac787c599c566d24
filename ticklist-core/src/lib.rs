//! ticklist-core: domain logic for the ticklist to-do manager
//!
//! Pure, I/O-free building blocks shared by the server:
//! - Validated list names with canonical capitalization
//! - Validated item content
//! - Date labels for the home page
//! - Target resolution (home collection vs. named list)

pub mod date;
pub mod item;
pub mod name;
pub mod target;
pub mod validation;

pub use date::{label_for, today_label};
pub use item::{ItemContent, DEFAULT_ITEMS};
pub use name::ListName;
pub use target::ListTarget;
pub use validation::ValidationError;
