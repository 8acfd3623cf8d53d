use chrono::{Datelike, Months, NaiveDate};

use crate::consts::GRID_CELLS;

/// One real cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// Past dates cannot be selected; today itself can.
    pub disabled: bool,
}

/// Whether a date falls before today on the local calendar.
#[inline]
pub fn is_past(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}

/// The month a calendar pane is showing, normalized to its first day.
/// The day-of-month of the date used to build it is irrelevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthAnchor(NaiveDate);

impl MonthAnchor {
    /// Anchor of the month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self(date.with_day(1).unwrap_or(date))
    }

    /// First day of the anchored month.
    pub const fn first_day(self) -> NaiveDate {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Month number, 1-12.
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Steps the anchor forward or backward by whole months, wrapping
    /// across year boundaries (December + 1 is January of the next year).
    /// Saturates at chrono's representable range.
    pub fn navigate(self, delta: i32) -> Self {
        let months = Months::new(delta.unsigned_abs());
        let stepped = if delta >= 0 {
            self.0.checked_add_months(months)
        } else {
            self.0.checked_sub_months(months)
        };
        Self(stepped.unwrap_or(self.0))
    }

    /// Number of days in the anchored month.
    pub fn day_count(self) -> usize {
        let next = self.navigate(1).first_day();
        usize::try_from((next - self.0).num_days()).unwrap_or(0)
    }

    /// The 42-cell (6 weeks x 7 days, Sunday-first) grid for this month.
    ///
    /// Leading cells before the 1st and trailing cells after the last day
    /// are `None`; the count of leading `None`s equals the weekday index
    /// of the month's first day (0 = Sunday).
    pub fn grid(self, today: NaiveDate) -> Vec<Option<CalendarDay>> {
        let leading = self.0.weekday().num_days_from_sunday() as usize;
        let mut cells = vec![None; GRID_CELLS];
        for (slot, date) in cells
            .iter_mut()
            .skip(leading)
            .zip(self.0.iter_days().take(self.day_count()))
        {
            *slot = Some(CalendarDay {
                date,
                disabled: is_past(date, today),
            });
        }
        cells
    }
}
