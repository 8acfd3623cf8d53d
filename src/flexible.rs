use crate::types::{DurationClass, MonthName};

/// A flexible travel window: an optional duration class plus the candidate
/// months, in the order the user toggled them on. No month appears twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlexibleSelection {
    duration: Option<DurationClass>,
    months: Vec<MonthName>,
}

impl FlexibleSelection {
    /// A window with nothing chosen.
    pub const fn empty() -> Self {
        Self {
            duration: None,
            months: Vec::new(),
        }
    }

    /// Builds a window from already-deduplicated parts. Order of `months`
    /// is preserved as given.
    pub fn from_parts(duration: Option<DurationClass>, months: Vec<MonthName>) -> Self {
        let mut deduped = Vec::with_capacity(months.len());
        for month in months {
            if !deduped.contains(&month) {
                deduped.push(month);
            }
        }
        Self {
            duration,
            months: deduped,
        }
    }

    pub const fn duration(&self) -> Option<DurationClass> {
        self.duration
    }

    /// Selected months in toggle order.
    pub fn months(&self) -> &[MonthName] {
        &self.months
    }

    /// Single-select: replaces any previously chosen class.
    pub fn set_duration(&mut self, class: DurationClass) {
        self.duration = Some(class);
    }

    /// Flips a month's membership: present is removed, absent is appended.
    pub fn toggle_month(&mut self, month: MonthName) {
        if let Some(position) = self.months.iter().position(|m| *m == month) {
            self.months.remove(position);
        } else {
            self.months.push(month);
        }
    }

    pub fn contains_month(&self, month: MonthName) -> bool {
        self.months.contains(&month)
    }

    /// True when neither a duration nor any month is chosen.
    pub fn is_empty(&self) -> bool {
        self.duration.is_none() && self.months.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_duration_replaces() {
        let mut window = FlexibleSelection::empty();
        assert_eq!(window.duration(), None);

        window.set_duration(DurationClass::Weekend);
        assert_eq!(window.duration(), Some(DurationClass::Weekend));

        window.set_duration(DurationClass::Month);
        assert_eq!(window.duration(), Some(DurationClass::Month));
    }

    #[test]
    fn test_toggle_month_preserves_insertion_order() {
        let mut window = FlexibleSelection::empty();
        window.toggle_month(MonthName::September);
        window.toggle_month(MonthName::June);
        window.toggle_month(MonthName::August);
        assert_eq!(
            window.months(),
            [MonthName::September, MonthName::June, MonthName::August]
        );
    }

    #[test]
    fn test_toggle_month_twice_removes() {
        let mut window = FlexibleSelection::empty();
        window.toggle_month(MonthName::June);
        window.toggle_month(MonthName::July);
        window.toggle_month(MonthName::June);
        assert_eq!(window.months(), [MonthName::July]);
        assert!(!window.contains_month(MonthName::June));

        // Re-toggling appends at the end, not the original position
        window.toggle_month(MonthName::June);
        assert_eq!(window.months(), [MonthName::July, MonthName::June]);
    }

    #[test]
    fn test_is_empty() {
        let mut window = FlexibleSelection::empty();
        assert!(window.is_empty());

        window.set_duration(DurationClass::Week);
        assert!(!window.is_empty());

        let mut months_only = FlexibleSelection::empty();
        months_only.toggle_month(MonthName::May);
        assert!(!months_only.is_empty());
    }

    #[test]
    fn test_from_parts_drops_duplicates() {
        let window = FlexibleSelection::from_parts(
            Some(DurationClass::Week),
            vec![MonthName::June, MonthName::July, MonthName::June],
        );
        assert_eq!(window.months(), [MonthName::June, MonthName::July]);
    }
}
