//! Date labels for the home page
//!
//! The home collection has no list record; its identity is the current
//! calendar date label. The label is computed per request from the local
//! clock, never cached at startup, so a long-running process rolls over
//! at midnight.

use chrono::{Local, NaiveDate};

/// Label for a specific date, e.g. `Thursday, August 7`.
pub fn label_for(date: NaiveDate) -> String {
    date.format("%A, %B %-d").to_string()
}

/// Label for the current local date.
pub fn today_label() -> String {
    label_for(Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_weekday_month_day() {
        let date = NaiveDate::from_ymd_opt(2019, 3, 7).unwrap();
        assert_eq!(label_for(date), "Thursday, March 7");
    }

    #[test]
    fn single_digit_day_unpadded() {
        let date = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        assert_eq!(label_for(date), "Friday, January 1");
    }

    #[test]
    fn today_is_stable_within_a_call() {
        // Two consecutive calls on the same day must agree; this is what
        // lets handlers compare a submitted label against "today".
        assert_eq!(today_label(), today_label());
    }
}
