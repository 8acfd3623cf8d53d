use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::MONTHS_PER_YEAR;

/// Error type for token vocabulary parsing.
///
/// These errors never escape the crate's public decode path: an
/// unrecognized keyword simply drops out of the lenient parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Unknown duration keyword.
    #[error("Unknown duration class: {0}")]
    UnknownDuration(String),

    /// Unknown month name.
    #[error("Unknown month name: {0}")]
    UnknownMonth(String),
}

/// Length class of a flexible travel window.
/// Single-select: choosing a new class replaces the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DurationClass {
    Weekend,
    Week,
    Month,
}

impl DurationClass {
    /// Wire keyword for this class.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weekend => "weekend",
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

impl fmt::Display for DurationClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DurationClass {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weekend" => Ok(Self::Weekend),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            _ => Err(ParseError::UnknownDuration(s.to_owned())),
        }
    }
}

impl TryFrom<String> for DurationClass {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DurationClass> for String {
    fn from(class: DurationClass) -> Self {
        class.as_str().to_owned()
    }
}

/// One of the twelve canonical English month names used on the wire.
///
/// Display labels shown to the user are the host's concern (and may be
/// localized); this type is the locale-invariant wire vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MonthName {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl MonthName {
    /// All twelve months in calendar order.
    pub const ALL: [Self; MONTHS_PER_YEAR] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Canonical wire spelling.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }
}

impl fmt::Display for MonthName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MonthName {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|month| month.as_str() == s)
            .copied()
            .ok_or_else(|| ParseError::UnknownMonth(s.to_owned()))
    }
}

impl TryFrom<String> for MonthName {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthName> for String {
    fn from(month: MonthName) -> Self {
        month.as_str().to_owned()
    }
}

/// Which pane of the dropdown is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    /// Exact date-range pane (the default on open).
    #[default]
    Dates,
    /// Duration-plus-months pane.
    Flexible,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_round_trip() {
        for class in [
            DurationClass::Weekend,
            DurationClass::Week,
            DurationClass::Month,
        ] {
            let parsed = class.as_str().parse::<DurationClass>().unwrap();
            assert_eq!(parsed, class);
        }
    }

    #[test]
    fn test_duration_unknown_keyword() {
        let result = "fortnight".parse::<DurationClass>();
        assert!(matches!(result, Err(ParseError::UnknownDuration(_))));

        // Keywords are case-sensitive on the wire
        let result = "Week".parse::<DurationClass>();
        assert!(result.is_err());
    }

    #[test]
    fn test_month_round_trip() {
        for month in MonthName::ALL {
            let parsed = month.as_str().parse::<MonthName>().unwrap();
            assert_eq!(parsed, month);
        }
    }

    #[test]
    fn test_month_unknown_name() {
        let result = "Juneuary".parse::<MonthName>();
        assert!(matches!(result, Err(ParseError::UnknownMonth(_))));

        // Lowercase is not the canonical spelling
        let result = "june".parse::<MonthName>();
        assert!(result.is_err());
    }

    #[test]
    fn test_month_display() {
        assert_eq!(MonthName::June.to_string(), "June");
        assert_eq!(MonthName::September.to_string(), "September");
    }

    #[test]
    fn test_month_all_is_calendar_order() {
        assert_eq!(MonthName::ALL.len(), 12);
        assert_eq!(MonthName::ALL[0], MonthName::January);
        assert_eq!(MonthName::ALL[11], MonthName::December);
    }

    #[test]
    fn test_duration_serde() {
        let json = serde_json::to_string(&DurationClass::Weekend).unwrap();
        assert_eq!(json, r#""weekend""#);
        let parsed: DurationClass = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, DurationClass::Weekend);
    }

    #[test]
    fn test_month_serde() {
        let json = serde_json::to_string(&MonthName::August).unwrap();
        assert_eq!(json, r#""August""#);
        let parsed: MonthName = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, MonthName::August);

        let result: Result<MonthName, _> = serde_json::from_str(r#""Smarch""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_tab_is_dates() {
        assert_eq!(Tab::default(), Tab::Dates);
    }
}
