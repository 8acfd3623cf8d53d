use chrono::NaiveDate;

use crate::calendar::is_past;

/// An exact-dates selection in progress or committed.
///
/// Holds up to two dates; when both are set, `start <= end`. The invariant
/// is upheld by every constructor and by [`DateRange::select`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

/// Error type for range construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}

/// The three phases of the exact-dates click protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangePhase {
    /// Nothing chosen yet.
    Empty,
    /// One day chosen; start and end coincide.
    Single,
    /// Two distinct days chosen, in order.
    Range,
}

impl DateRange {
    /// A range with nothing selected.
    pub const fn empty() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// A degenerate one-day range.
    pub const fn single(date: NaiveDate) -> Self {
        Self {
            start: Some(date),
            end: Some(date),
        }
    }

    /// Creates a concrete range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self {
            start: Some(start),
            end: Some(end),
        })
    }

    pub const fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub const fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Current phase of the click protocol.
    pub fn phase(&self) -> RangePhase {
        match (self.start, self.end) {
            (Some(start), Some(end)) if start == end => RangePhase::Single,
            (Some(_), Some(_)) => RangePhase::Range,
            _ => RangePhase::Empty,
        }
    }

    /// Advances the click protocol with a day selection.
    ///
    /// Disabled (past) dates are ignored. From empty, the click picks a
    /// single day; a second distinct click completes the range in either
    /// click order; any click on a completed range discards it and starts
    /// a fresh cycle at the clicked day.
    pub fn select(&mut self, date: NaiveDate, today: NaiveDate) {
        if is_past(date, today) {
            return;
        }
        *self = match self.phase() {
            RangePhase::Empty | RangePhase::Range => Self::single(date),
            RangePhase::Single => match self.start {
                Some(anchor) if date != anchor => Self {
                    start: Some(anchor.min(date)),
                    end: Some(anchor.max(date)),
                },
                _ => Self::single(date),
            },
        };
    }

    /// Whether `date` is the start or the end of the selection.
    pub fn is_endpoint(&self, date: NaiveDate) -> bool {
        self.start == Some(date) || self.end == Some(date)
    }

    /// Whether `date` lies strictly between the endpoints. Endpoints are
    /// reported by [`DateRange::is_endpoint`], not here.
    pub fn is_in_range(&self, date: NaiveDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start < date && date < end,
            _ => false,
        }
    }
}
