use crate::DateError;
use crate::consts::{MAX_DAY, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_MONTH, MIN_YEAR, MONTH_NAMES};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the closed set of textual date layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DateFormat {
    /// `YYYY-MM-DD`
    #[display(fmt = "ISO")]
    Iso,
    /// `MM/DD/YYYY`
    #[display(fmt = "US")]
    Us,
    /// `DD/MM/YYYY`
    #[display(fmt = "EU")]
    Eu,
    /// `<MonthName> D, YYYY`
    #[display(fmt = "VERBOSE")]
    Verbose,
}

impl DateFormat {
    /// Every format, in detection order
    pub const ALL: [Self; 4] = [Self::Iso, Self::Us, Self::Eu, Self::Verbose];

    /// Canonical name of the format (`"ISO"`, `"US"`, `"EU"`, `"VERBOSE"`)
    pub const fn name(self) -> &'static str {
        match self {
            Self::Iso => "ISO",
            Self::Us => "US",
            Self::Eu => "EU",
            Self::Verbose => "VERBOSE",
        }
    }
}

impl FromStr for DateFormat {
    type Err = DateError;

    /// Names are matched exactly; `"iso"` is not `"ISO"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| DateError::UnsupportedFormat(s.to_owned()))
    }
}

impl TryFrom<&str> for DateFormat {
    type Error = DateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for DateFormat {
    type Error = DateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DateFormat> for String {
    fn from(format: DateFormat) -> Self {
        format.name().to_owned()
    }
}

/// Anything a caller may hand over as a target or source layout:
/// a [`DateFormat`] or its name.
pub trait IntoDateFormat {
    /// Resolves to a known format.
    ///
    /// # Errors
    /// Returns `DateError::UnsupportedFormat` if a name is not a known format.
    fn into_date_format(self) -> Result<DateFormat, DateError>;
}

impl IntoDateFormat for DateFormat {
    fn into_date_format(self) -> Result<DateFormat, DateError> {
        Ok(self)
    }
}

impl IntoDateFormat for &str {
    fn into_date_format(self) -> Result<DateFormat, DateError> {
        self.parse()
    }
}

impl IntoDateFormat for String {
    fn into_date_format(self) -> Result<DateFormat, DateError> {
        self.parse()
    }
}

impl IntoDateFormat for &String {
    fn into_date_format(self) -> Result<DateFormat, DateError> {
        self.parse()
    }
}

/// A component of a [`ParsedDate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DateField {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
}

impl DateField {
    /// Smallest accepted value (inclusive)
    pub const fn min(self) -> u32 {
        match self {
            Self::Year => MIN_YEAR as u32,
            Self::Month => MIN_MONTH as u32,
            Self::Day => MIN_DAY as u32,
        }
    }

    /// Largest accepted value (inclusive)
    pub const fn max(self) -> u32 {
        match self {
            Self::Year => MAX_YEAR as u32,
            Self::Month => MAX_MONTH as u32,
            Self::Day => MAX_DAY as u32,
        }
    }

    fn check(self, value: u32) -> Result<u32, DateError> {
        if (self.min()..=self.max()).contains(&value) {
            Ok(value)
        } else {
            Err(DateError::ComponentOutOfRange { field: self, value })
        }
    }
}

/// A calendar date decomposed into its numeric components.
///
/// Values returned by the parser always satisfy `1000..=9999`, `1..=12`
/// and `1..=31`. The day is never checked against the length of its month.
/// A value built by hand with components outside those ranges formats to
/// unspecified output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{year}-{month:02}-{day:02}")]
pub struct ParsedDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl ParsedDate {
    /// Creates a date, validating each component's range.
    ///
    /// # Errors
    /// Returns `DateError::ComponentOutOfRange` for the first component
    /// (year, then month, then day) outside its range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        validate_components(year.into(), month.into(), day.into())
    }
}

impl FromStr for ParsedDate {
    type Err = DateError;

    /// Parses with format auto-detection.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse_date_string(s, None::<DateFormat>)
    }
}

// Helper functions

/// Checks year, month, day in that order and narrows them.
pub(crate) fn validate_components(year: u32, month: u32, day: u32) -> Result<ParsedDate, DateError> {
    let year = DateField::Year.check(year)?;
    let month = DateField::Month.check(month)?;
    let day = DateField::Day.check(day)?;

    Ok(ParsedDate {
        year: narrow(DateField::Year, year)?,
        month: narrow(DateField::Month, month)?,
        day: narrow(DateField::Day, day)?,
    })
}

fn narrow<T: TryFrom<u32>>(field: DateField, value: u32) -> Result<T, DateError> {
    T::try_from(value).map_err(|_| DateError::ComponentOutOfRange { field, value })
}

/// Month number (1-12) for a full English month name, ignoring case.
pub fn month_from_name(name: &str) -> Option<u8> {
    MONTH_NAMES
        .iter()
        .zip(MIN_MONTH..=MAX_MONTH)
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .map(|(_, month)| month)
}

/// Full English month name for a month number (1-12).
pub fn month_name(month: u8) -> Option<&'static str> {
    let index = usize::from(month.checked_sub(MIN_MONTH)?);
    MONTH_NAMES.get(index).copied()
}
