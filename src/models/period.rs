//! Filter period representation
//!
//! A filter period is a date predicate restricting the visible rows of the
//! active sheet. "Today" is always passed in explicitly so the predicate is
//! deterministic and testable; nothing in here reads the system clock.

use chrono::{Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A date predicate for the visible-row filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", content = "value")]
pub enum FilterPeriod {
    /// No filtering
    #[default]
    All,

    /// Rows dated exactly today
    Today,

    /// Rows within the last 7 days, inclusive of both ends
    Week,

    /// Rows within the last calendar month, inclusive of both ends
    Month,

    /// Rows within an explicit date range, inclusive of both ends
    ///
    /// A missing bound disables filtering entirely: the period behaves as
    /// `All` until both `from` and `to` are set. This is deliberate,
    /// documented behavior.
    Custom {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
}

impl FilterPeriod {
    /// Create a custom period
    pub fn custom(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self::Custom { from, to }
    }

    /// Check if a date passes this predicate, relative to the given `today`
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Self::All => true,
            Self::Today => date == today,
            Self::Week => {
                let start = today - Duration::days(7);
                date >= start && date <= today
            }
            Self::Month => {
                // Calendar-month subtraction; chrono clamps to the month end
                // (Mar 31 - 1 month = Feb 28/29), not a fixed 30 days.
                let start = today
                    .checked_sub_months(Months::new(1))
                    .unwrap_or(NaiveDate::MIN);
                date >= start && date <= today
            }
            Self::Custom {
                from: Some(from),
                to: Some(to),
            } => date >= *from && date <= *to,
            Self::Custom { .. } => true,
        }
    }

    /// The next period in the cycling order used by the filter hotkey
    pub fn next(&self) -> Self {
        match self {
            Self::All => Self::Today,
            Self::Today => Self::Week,
            Self::Week => Self::Month,
            Self::Month => Self::Custom {
                from: None,
                to: None,
            },
            Self::Custom { .. } => Self::All,
        }
    }
}

impl fmt::Display for FilterPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Today => write!(f, "Today"),
            Self::Week => write!(f, "Last 7 days"),
            Self::Month => write!(f, "Last month"),
            Self::Custom { from, to } => {
                let fmt_bound = |b: &Option<NaiveDate>| match b {
                    Some(d) => d.format("%Y-%m-%d").to_string(),
                    None => "...".to_string(),
                };
                write!(f, "{} to {}", fmt_bound(from), fmt_bound(to))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_all_contains_everything() {
        let today = date(2024, 6, 15);
        assert!(FilterPeriod::All.contains(date(1990, 1, 1), today));
        assert!(FilterPeriod::All.contains(date(2099, 12, 31), today));
    }

    #[test]
    fn test_today_is_exact() {
        let today = date(2024, 6, 15);
        assert!(FilterPeriod::Today.contains(today, today));
        assert!(!FilterPeriod::Today.contains(date(2024, 6, 14), today));
        assert!(!FilterPeriod::Today.contains(date(2024, 6, 16), today));
    }

    #[test]
    fn test_week_bounds_inclusive() {
        let today = date(2024, 6, 15);
        assert!(FilterPeriod::Week.contains(date(2024, 6, 8), today));
        assert!(FilterPeriod::Week.contains(today, today));
        assert!(!FilterPeriod::Week.contains(date(2024, 6, 7), today));
        assert!(!FilterPeriod::Week.contains(date(2024, 6, 16), today));
    }

    #[test]
    fn test_month_is_calendar_month() {
        let today = date(2024, 6, 15);
        assert!(FilterPeriod::Month.contains(date(2024, 5, 15), today));
        assert!(!FilterPeriod::Month.contains(date(2024, 5, 14), today));
    }

    #[test]
    fn test_month_clamps_at_month_end() {
        // Mar 31 - 1 calendar month clamps to Feb 29 (2024 is a leap year),
        // not to a fixed 30 days earlier.
        let today = date(2024, 3, 31);
        assert!(FilterPeriod::Month.contains(date(2024, 2, 29), today));
        assert!(!FilterPeriod::Month.contains(date(2024, 2, 28), today));
    }

    #[test]
    fn test_custom_range_inclusive() {
        let today = date(2024, 6, 15);
        let period = FilterPeriod::custom(Some(date(2024, 1, 1)), Some(date(2024, 2, 1)));
        assert!(period.contains(date(2024, 1, 1), today));
        assert!(period.contains(date(2024, 2, 1), today));
        assert!(!period.contains(date(2024, 2, 2), today));
        assert!(!period.contains(date(2023, 12, 31), today));
    }

    #[test]
    fn test_custom_missing_bound_disables_filtering() {
        let today = date(2024, 6, 15);
        let no_from = FilterPeriod::custom(None, Some(date(2024, 1, 1)));
        let no_to = FilterPeriod::custom(Some(date(2024, 1, 1)), None);
        // Either missing bound means "no filtering", even for dates far
        // outside the one bound that is set.
        assert!(no_from.contains(date(2024, 6, 1), today));
        assert!(no_to.contains(date(2023, 1, 1), today));
    }

    #[test]
    fn test_cycle_order() {
        let mut period = FilterPeriod::All;
        let mut seen = Vec::new();
        for _ in 0..5 {
            period = period.next();
            seen.push(period.clone());
        }
        assert_eq!(seen.last(), Some(&FilterPeriod::All));
        assert!(seen.contains(&FilterPeriod::custom(None, None)));
    }
}
