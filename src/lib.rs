mod consts;
mod normalize;
mod prelude;
mod rules;
mod types;

pub use consts::*;
pub use normalize::{NormalizeOptions, is_valid_date_string, normalize_date_string, try_normalize_date_string};
pub use types::{DateField, DateFormat, IntoDateFormat, ParsedDate, month_from_name, month_name};

use log::{debug, trace};
use rules::Layout;
use types::validate_components;

/// Everything that can go wrong while parsing or formatting a date string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// No format was supplied and none could be detected.
    #[error("Unable to detect date format: {0:?}")]
    FormatUnrecognized(String),

    /// A format name outside the known set.
    #[error("Unsupported date format: {0}")]
    UnsupportedFormat(String),

    /// A verbose month token that is not a full English month name.
    #[error("Invalid month name: {0}")]
    InvalidMonthName(String),

    /// A year, month or day outside its accepted range.
    #[error("Invalid {field}: {value} (must be {}-{})", .field.min(), .field.max())]
    ComponentOutOfRange { field: DateField, value: u32 },

    /// The input does not have the shape of the format it was parsed as.
    #[error("Malformed {format} date: {input:?}")]
    Malformed { format: DateFormat, input: String },
}

/// Detects the format of a date string.
///
/// Rules are tried in [`DateFormat::ALL`] order and each must match the
/// whole input; the first hit wins. A string such as `"05/03/2024"` fits
/// both US and EU and is reported as US.
///
/// Returns `None` for anything unrecognized, including the empty string.
pub fn detect_date_format(input: &str) -> Option<DateFormat> {
    let detected = DateFormat::ALL
        .into_iter()
        .find(|format| rules::regex(*format).is_match(input));

    match detected {
        Some(format) => trace!("Detected {format} date format for {input:?}"),
        None => debug!("No known date format matches {input:?}"),
    }
    detected
}

/// Parses a date string into its components.
///
/// With `format` set to `None` the format is detected first. The numeric
/// fields are read in the field order of the resolved format and then
/// range-checked in year, month, day order.
///
/// # Errors
/// - `DateError::FormatUnrecognized` if no format is given and none is detected
/// - `DateError::UnsupportedFormat` if `format` names an unknown format
/// - `DateError::Malformed` if the input does not have the shape of an explicitly given format
/// - `DateError::InvalidMonthName` if a verbose month name is unknown
/// - `DateError::ComponentOutOfRange` if a component is out of range
pub fn parse_date_string<F: IntoDateFormat>(
    input: &str,
    format: Option<F>,
) -> Result<ParsedDate, DateError> {
    let format = match format {
        Some(format) => format.into_date_format()?,
        None => detect_date_format(input)
            .ok_or_else(|| DateError::FormatUnrecognized(input.to_owned()))?,
    };

    parse_as(input, format).inspect_err(|err| debug!("Failed to parse {input:?} as {format}: {err}"))
}

fn parse_as(input: &str, format: DateFormat) -> Result<ParsedDate, DateError> {
    let malformed = || DateError::Malformed {
        format,
        input: input.to_owned(),
    };

    match rules::rule(format).layout {
        Layout::Numeric { separator, order } => {
            let parts: Vec<&str> = input.split(separator).collect();
            if parts.len() != order.len() {
                return Err(malformed());
            }

            let (mut year, mut month, mut day) = (0, 0, 0);
            for (field, part) in order.into_iter().zip(parts) {
                let value = parse_number(part).ok_or_else(malformed)?;
                match field {
                    DateField::Year => year = value,
                    DateField::Month => month = value,
                    DateField::Day => day = value,
                }
            }
            validate_components(year, month, day)
        }
        Layout::Verbose => {
            let captures = rules::regex(format).captures(input).ok_or_else(malformed)?;
            let (name, day, year) = match (captures.get(1), captures.get(2), captures.get(3)) {
                (Some(name), Some(day), Some(year)) => (name.as_str(), day.as_str(), year.as_str()),
                _ => return Err(malformed()),
            };

            let day = parse_number(day).ok_or_else(malformed)?;
            let year = parse_number(year).ok_or_else(malformed)?;
            let month = month_from_name(name)
                .ok_or_else(|| DateError::InvalidMonthName(name.to_owned()))?;

            validate_components(year, month.into(), day)
        }
    }
}

/// Base-10, ASCII digits only: no sign, no whitespace.
fn parse_number(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Renders a date in the target format.
///
/// Month and day are zero-padded to two digits, except in the verbose
/// layout where the day is written as is. The year is written in full.
/// The date is not re-validated.
///
/// # Errors
/// Returns `DateError::UnsupportedFormat` if `target` names an unknown format.
pub fn format_date<F: IntoDateFormat>(date: &ParsedDate, target: F) -> Result<String, DateError> {
    let format = target.into_date_format()?;

    let rendered = match rules::rule(format).layout {
        Layout::Numeric { separator, order } => {
            let fields: Vec<String> = order
                .into_iter()
                .map(|field| match field {
                    DateField::Year => date.year.to_string(),
                    DateField::Month => format!("{:02}", date.month),
                    DateField::Day => format!("{:02}", date.day),
                })
                .collect();
            fields.join(&separator.to_string())
        }
        Layout::Verbose => {
            debug_assert!(
                month_name(date.month).is_some(),
                "month {} has no name",
                date.month
            );
            let name = month_name(date.month).unwrap_or_default();
            format!("{name} {}, {}", date.day, date.year)
        }
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const MARCH_15: ParsedDate = ParsedDate {
        year: 2024,
        month: 3,
        day: 15,
    };

    #[rstest]
    #[case("2024-03-15", DateFormat::Iso)]
    #[case("03/15/2024", DateFormat::Us)]
    #[case("15/03/2024", DateFormat::Eu)]
    #[case("March 15, 2024", DateFormat::Verbose)]
    #[case("march 5, 2024", DateFormat::Verbose)]
    #[case("Smarch 15, 2024", DateFormat::Verbose)]
    #[case("0000-00-00", DateFormat::Iso)]
    fn test_detect(#[case] input: &str, #[case] expected: DateFormat) {
        assert_eq!(detect_date_format(input), Some(expected));
    }

    #[rstest]
    #[case("invalid-date")]
    #[case("")]
    #[case("2024-3-15")]
    #[case(" 2024-03-15")]
    #[case("2024-03-15 ")]
    #[case("x2024-03-15")]
    #[case("13/13/2024")]
    #[case("00/15/2024")]
    #[case("03/15/24")]
    #[case("2024/03/15")]
    #[case("March 15 2024")]
    #[case("March  15, 2024")]
    #[case("March 115, 2024")]
    #[case("2024-\u{0663}3-15")]
    fn test_detect_no_match(#[case] input: &str) {
        assert_eq!(detect_date_format(input), None);
    }

    #[test]
    fn test_detect_ambiguous_prefers_us() {
        // Both slash layouts fit; declared order decides
        assert_eq!(detect_date_format("05/03/2024"), Some(DateFormat::Us));
        // Day above 12 only fits the EU rule
        assert_eq!(detect_date_format("13/03/2024"), Some(DateFormat::Eu));
    }

    #[rstest]
    #[case("2024-03-15")]
    #[case("03/15/2024")]
    #[case("15/03/2024")]
    #[case("March 15, 2024")]
    #[case("march 15, 2024")]
    #[case("MARCH 15, 2024")]
    fn test_parse_detected(#[case] input: &str) {
        let date = parse_date_string(input, None::<DateFormat>).unwrap();
        assert_eq!(date, MARCH_15);
    }

    #[test]
    fn test_parse_via_from_str() {
        let date = "2024-03-15".parse::<ParsedDate>().unwrap();
        assert_eq!(date, MARCH_15);
    }

    #[test]
    fn test_parse_ambiguous_with_explicit_format() {
        let us = parse_date_string("05/03/2024", None::<DateFormat>).unwrap();
        assert_eq!(us, ParsedDate { year: 2024, month: 5, day: 3 });

        let eu = parse_date_string("05/03/2024", Some(DateFormat::Eu)).unwrap();
        assert_eq!(eu, ParsedDate { year: 2024, month: 3, day: 5 });

        let eu = parse_date_string("05/03/2024", Some("EU")).unwrap();
        assert_eq!(eu, ParsedDate { year: 2024, month: 3, day: 5 });
    }

    #[test]
    fn test_parse_verbose_unpadded_and_padded_day() {
        let date = parse_date_string("July 4, 1999", None::<DateFormat>).unwrap();
        assert_eq!(date, ParsedDate { year: 1999, month: 7, day: 4 });

        let date = parse_date_string("July 04, 1999", None::<DateFormat>).unwrap();
        assert_eq!(date, ParsedDate { year: 1999, month: 7, day: 4 });
    }

    #[test]
    fn test_parse_unrecognized() {
        let result = parse_date_string("invalid-date", None::<DateFormat>);
        assert_eq!(
            result,
            Err(DateError::FormatUnrecognized("invalid-date".to_owned()))
        );
    }

    #[test]
    fn test_parse_unsupported_format_name() {
        let result = parse_date_string("2024-03-15", Some("INVALID"));
        assert_eq!(result, Err(DateError::UnsupportedFormat("INVALID".to_owned())));
    }

    #[test]
    fn test_parse_invalid_month_name() {
        let result = parse_date_string("Smarch 15, 2024", None::<DateFormat>);
        assert_eq!(result, Err(DateError::InvalidMonthName("Smarch".to_owned())));

        let result = parse_date_string("Mar 15, 2024", None::<DateFormat>);
        assert_eq!(result, Err(DateError::InvalidMonthName("Mar".to_owned())));
    }

    #[test]
    fn test_parse_no_day_in_month_check() {
        let date = parse_date_string("2024-02-31", None::<DateFormat>).unwrap();
        assert_eq!(date, ParsedDate { year: 2024, month: 2, day: 31 });
    }

    #[rstest]
    #[case("1000-01-01", ParsedDate { year: 1000, month: 1, day: 1 })]
    #[case("9999-12-31", ParsedDate { year: 9999, month: 12, day: 31 })]
    fn test_parse_boundaries_accepted(#[case] input: &str, #[case] expected: ParsedDate) {
        assert_eq!(parse_date_string(input, None::<DateFormat>), Ok(expected));
    }

    #[rstest]
    #[case("0999-01-01", DateField::Year, 999)]
    #[case("2024-00-01", DateField::Month, 0)]
    #[case("2024-13-01", DateField::Month, 13)]
    #[case("2024-01-00", DateField::Day, 0)]
    #[case("2024-01-32", DateField::Day, 32)]
    #[case("0000-13-32", DateField::Year, 0)]
    #[case("2024-13-32", DateField::Month, 13)]
    #[case("March 0, 2024", DateField::Day, 0)]
    #[case("March 32, 2024", DateField::Day, 32)]
    #[case("March 15, 0999", DateField::Year, 999)]
    fn test_parse_out_of_range(
        #[case] input: &str,
        #[case] field: DateField,
        #[case] value: u32,
    ) {
        let result = parse_date_string(input, None::<DateFormat>);
        assert_eq!(result, Err(DateError::ComponentOutOfRange { field, value }));
    }

    #[test]
    fn test_parse_year_above_range_with_explicit_format() {
        // Five-digit years never pass detection, only an explicit format
        let result = parse_date_string("10000-01-01", Some(DateFormat::Iso));
        assert_eq!(
            result,
            Err(DateError::ComponentOutOfRange { field: DateField::Year, value: 10000 })
        );
    }

    #[test]
    fn test_parse_explicit_format_is_lenient_on_width() {
        let date = parse_date_string("2024-3-5", Some(DateFormat::Iso)).unwrap();
        assert_eq!(date, ParsedDate { year: 2024, month: 3, day: 5 });
    }

    #[rstest]
    #[case("2024-03", DateFormat::Iso)]
    #[case("2024-03-15-01", DateFormat::Iso)]
    #[case("2024-+3-15", DateFormat::Iso)]
    #[case("2024- 3-15", DateFormat::Iso)]
    #[case("2024--15", DateFormat::Iso)]
    #[case("03/15/2024", DateFormat::Iso)]
    #[case("2024-03-15", DateFormat::Us)]
    #[case("03/xx/2024", DateFormat::Eu)]
    #[case("99999999999/01/2024", DateFormat::Us)]
    #[case("2024-03-15", DateFormat::Verbose)]
    #[case("March 15 2024", DateFormat::Verbose)]
    fn test_parse_malformed(#[case] input: &str, #[case] format: DateFormat) {
        let result = parse_date_string(input, Some(format));
        assert_eq!(
            result,
            Err(DateError::Malformed {
                format,
                input: input.to_owned()
            })
        );
    }

    #[rstest]
    #[case(DateFormat::Iso, "2024-03-15")]
    #[case(DateFormat::Us, "03/15/2024")]
    #[case(DateFormat::Eu, "15/03/2024")]
    #[case(DateFormat::Verbose, "March 15, 2024")]
    fn test_format(#[case] target: DateFormat, #[case] expected: &str) {
        assert_eq!(format_date(&MARCH_15, target).unwrap(), expected);
        assert_eq!(format_date(&MARCH_15, target.name()).unwrap(), expected);
    }

    #[test]
    fn test_format_padding() {
        let date = ParsedDate { year: 1999, month: 7, day: 4 };
        assert_eq!(format_date(&date, DateFormat::Iso).unwrap(), "1999-07-04");
        assert_eq!(format_date(&date, DateFormat::Us).unwrap(), "07/04/1999");
        assert_eq!(format_date(&date, DateFormat::Eu).unwrap(), "04/07/1999");
        assert_eq!(format_date(&date, DateFormat::Verbose).unwrap(), "July 4, 1999");
    }

    #[test]
    fn test_format_year_is_not_padded_or_truncated() {
        let date = ParsedDate { year: 12345, month: 1, day: 2 };
        assert_eq!(format_date(&date, DateFormat::Iso).unwrap(), "12345-01-02");

        let date = ParsedDate { year: 42, month: 1, day: 2 };
        assert_eq!(format_date(&date, DateFormat::Us).unwrap(), "01/02/42");
    }

    #[test]
    fn test_format_unsupported() {
        let result = format_date(&MARCH_15, "INVALID");
        assert_eq!(result, Err(DateError::UnsupportedFormat("INVALID".to_owned())));
    }

    #[test]
    fn test_error_messages() {
        let err = DateError::ComponentOutOfRange {
            field: DateField::Month,
            value: 13,
        };
        assert_eq!(err.to_string(), "Invalid month: 13 (must be 1-12)");

        let err = DateError::Malformed {
            format: DateFormat::Verbose,
            input: "nope".to_owned(),
        };
        assert_eq!(err.to_string(), r#"Malformed VERBOSE date: "nope""#);

        let err = DateError::UnsupportedFormat("INVALID".to_owned());
        assert_eq!(err.to_string(), "Unsupported date format: INVALID");
    }
}
