//! Per-format rules: how each [`DateFormat`] is recognized, split into
//! fields, and laid out again.
//!
//! Adding a format means adding a variant to [`DateFormat`] and one row
//! to [`RULES`].

use crate::DateFormat;
use crate::consts::{
    EU_PATTERN, ISO_PATTERN, ISO_SEPARATOR, SLASH_SEPARATOR, US_PATTERN, VERBOSE_PATTERN,
};
use crate::types::DateField;
use once_cell::sync::Lazy;
use regex::Regex;

/// Textual layout of a format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Layout {
    /// Three numeric fields joined by `separator`, in `order`.
    Numeric {
        separator: char,
        order: [DateField; 3],
    },
    /// `<MonthName> <day>, <year>`, captured as groups 1, 2 and 3 of the
    /// recognition pattern.
    Verbose,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct FormatRule {
    pub format: DateFormat,
    pub pattern: &'static str,
    pub layout: Layout,
}

/// One row per format, in detection order.
pub(crate) static RULES: [FormatRule; 4] = [
    FormatRule {
        format: DateFormat::Iso,
        pattern: ISO_PATTERN,
        layout: Layout::Numeric {
            separator: ISO_SEPARATOR,
            order: [DateField::Year, DateField::Month, DateField::Day],
        },
    },
    FormatRule {
        format: DateFormat::Us,
        pattern: US_PATTERN,
        layout: Layout::Numeric {
            separator: SLASH_SEPARATOR,
            order: [DateField::Month, DateField::Day, DateField::Year],
        },
    },
    FormatRule {
        format: DateFormat::Eu,
        pattern: EU_PATTERN,
        layout: Layout::Numeric {
            separator: SLASH_SEPARATOR,
            order: [DateField::Day, DateField::Month, DateField::Year],
        },
    },
    FormatRule {
        format: DateFormat::Verbose,
        pattern: VERBOSE_PATTERN,
        layout: Layout::Verbose,
    },
];

// The patterns are constants covered by the tests below.
#[allow(clippy::expect_used)]
static COMPILED: Lazy<[Regex; 4]> = Lazy::new(|| {
    RULES.map(|rule| Regex::new(rule.pattern).expect("built-in date pattern must compile"))
});

const fn index(format: DateFormat) -> usize {
    match format {
        DateFormat::Iso => 0,
        DateFormat::Us => 1,
        DateFormat::Eu => 2,
        DateFormat::Verbose => 3,
    }
}

/// The rule row for a format.
pub(crate) fn rule(format: DateFormat) -> &'static FormatRule {
    &RULES[index(format)]
}

/// Compiled recognition pattern for a format.
pub(crate) fn regex(format: DateFormat) -> &'static Regex {
    &COMPILED[index(format)]
}
