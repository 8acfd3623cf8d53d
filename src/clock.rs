use chrono::{Local, NaiveDate};

/// Source of the current local calendar day.
///
/// Injected into the selector so past-date disabling can be tested with a
/// frozen time. Comparisons use local calendar fields, never UTC.
pub trait Clock {
    /// The current date in the user's local calendar.
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system's local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_returns_pinned_date() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }

    #[test]
    fn test_system_clock_is_stable_within_a_call() {
        // Two immediate reads land on the same calendar day except when
        // they straddle midnight.
        let a = SystemClock.today();
        let b = SystemClock.today();
        assert!((a - b).num_days().abs() <= 1);
    }
}
