use log::debug;
use serde::{Deserialize, Serialize};

use crate::{DateError, DateFormat, IntoDateFormat, format_date, parse_date_string};

/// Options for [`normalize_date_string`].
///
/// Deserializes from camelCase keys (`inputFormat`, `outputFormat`); both
/// are optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NormalizeOptions {
    /// Format to parse with; detected when unset
    pub input_format: Option<DateFormat>,
    /// Format to render; ISO when unset
    pub output_format: Option<DateFormat>,
}

impl NormalizeOptions {
    pub const fn with_input_format(mut self, format: DateFormat) -> Self {
        self.input_format = Some(format);
        self
    }

    pub const fn with_output_format(mut self, format: DateFormat) -> Self {
        self.output_format = Some(format);
        self
    }
}

/// Re-renders a date string in the configured output format.
///
/// # Errors
/// Any error from [`parse_date_string`] or [`format_date`].
pub fn try_normalize_date_string(input: &str, options: &NormalizeOptions) -> Result<String, DateError> {
    let date = parse_date_string(input, options.input_format)?;
    format_date(&date, options.output_format.unwrap_or(DateFormat::Iso))
}

/// Like [`try_normalize_date_string`], but returns the input unchanged
/// when it cannot be normalized.
pub fn normalize_date_string(input: &str, options: &NormalizeOptions) -> String {
    try_normalize_date_string(input, options).unwrap_or_else(|err| {
        debug!("Leaving {input:?} as is: {err}");
        input.to_owned()
    })
}

/// Whether `input` parses, either as `format` or as any detected format.
pub fn is_valid_date_string<F: IntoDateFormat>(input: &str, format: Option<F>) -> bool {
    parse_date_string(input, format).is_ok()
}
