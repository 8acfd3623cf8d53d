mod calendar;
mod clock;
mod consts;
mod dropdown;
mod flexible;
mod prelude;
mod range;
mod types;

pub use calendar::{CalendarDay, MonthAnchor, is_past};
pub use clock::{Clock, FixedClock, SystemClock};
pub use consts::*;
pub use dropdown::{DropdownController, PendingState};
pub use flexible::FlexibleSelection;
pub use range::{DateRange, RangeError, RangePhase};
pub use types::{DurationClass, MonthName, ParseError, Tab};

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::prelude::*;

/// A committed travel-date selection, as exchanged with the owning page.
///
/// The wire form is a compact string token: an exact range encodes as
/// `2025-06-10_to_2025-06-15`, a flexible window as
/// `flexible-week-August,September`, and an empty selection as `""`.
/// Dates are formatted from local calendar fields, never UTC-shifted, and
/// the grammar keywords are fixed English regardless of display locale.
#[derive(Debug, Clone, PartialEq, Eq, Default, From)]
pub enum Selection {
    /// An exact date range (possibly a single day).
    Exact(DateRange),
    /// A duration class plus candidate months.
    Flexible(FlexibleSelection),
    /// No date constraint.
    #[default]
    Empty,
}

impl Selection {
    /// Serializes the selection to its token.
    ///
    /// A range without a start and a flexible window with neither a
    /// duration nor months encode to the empty token.
    pub fn encode(&self) -> String {
        match self {
            Self::Exact(range) => match (range.start(), range.end()) {
                (Some(start), Some(end)) => format!(
                    "{}{}{}",
                    start.format(DATE_FORMAT),
                    RANGE_SEPARATOR,
                    end.format(DATE_FORMAT)
                ),
                _ => String::new(),
            },
            Self::Flexible(window) => {
                if window.is_empty() {
                    return String::new();
                }
                let months = window
                    .months()
                    .iter()
                    .map(|m| m.as_str())
                    .collect::<Vec<_>>()
                    .join(&MONTH_SEPARATOR.to_string());
                format!(
                    "{}{}{}{}",
                    FLEXIBLE_PREFIX,
                    window.duration().map_or("", DurationClass::as_str),
                    SEGMENT_SEPARATOR,
                    months
                )
            }
            Self::Empty => String::new(),
        }
    }

    /// Parses a token, leniently and totally.
    ///
    /// Anything that does not match one of the known shapes comes back as
    /// [`Selection::Empty`]; this function never fails. Within a flexible
    /// token, unknown duration keywords, unknown month names, duplicate
    /// months, and extra segments are dropped.
    pub fn decode(token: &str) -> Self {
        let token = token.trim();
        if let Some(rest) = token.strip_prefix(FLEXIBLE_PREFIX) {
            return Self::decode_flexible(rest);
        }
        if let Some((start, end)) = token.split_once(RANGE_SEPARATOR) {
            return Self::decode_exact(start, end);
        }
        // Legacy single-day form: a bare ISO date with no range separator.
        // Never produced by encode, but accepted as a one-day range.
        if token.len() == ISO_DATE_LEN {
            if let Ok(date) = NaiveDate::parse_from_str(token, DATE_FORMAT) {
                return Self::Exact(DateRange::single(date));
            }
        }
        Self::Empty
    }

    fn decode_exact(start: &str, end: &str) -> Self {
        let parsed = NaiveDate::parse_from_str(start.trim(), DATE_FORMAT)
            .and_then(|s| NaiveDate::parse_from_str(end.trim(), DATE_FORMAT).map(|e| (s, e)));
        match parsed {
            Ok((start, end)) => DateRange::new(start, end).map_or(Self::Empty, Self::Exact),
            Err(_) => Self::Empty,
        }
    }

    fn decode_flexible(rest: &str) -> Self {
        let (duration_part, tail) = rest.split_once(SEGMENT_SEPARATOR).unwrap_or((rest, ""));
        // Segments beyond the month list are ignored.
        let months_part = tail.split(SEGMENT_SEPARATOR).next().unwrap_or_default();

        let duration = duration_part.parse::<DurationClass>().ok();
        let months = months_part
            .split(MONTH_SEPARATOR)
            .filter_map(|name| name.trim().parse::<MonthName>().ok())
            .collect::<Vec<_>>();

        let window = FlexibleSelection::from_parts(duration, months);
        if window.is_empty() {
            Self::Empty
        } else {
            Self::Flexible(window)
        }
    }

    /// Whether this selection encodes to the empty token.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Exact(range) => range.start().is_none(),
            Self::Flexible(window) => window.is_empty(),
            Self::Empty => true,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for Selection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::decode(s))
    }
}

impl serde::Serialize for Selection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> serde::Deserialize<'de> for Selection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::decode(&s))
    }
}
