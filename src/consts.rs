/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1000;
/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Month number for January
pub const MIN_MONTH: u8 = 1;
/// Month number for December
pub const MAX_MONTH: u8 = 12;

/// First day of any month
pub const MIN_DAY: u8 = 1;
/// Largest day accepted in any month (no per-month check)
pub const MAX_DAY: u8 = 31;

/// Full English month names, indexed by `month - 1`
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Field separator for the ISO layout (`YYYY-MM-DD`)
pub const ISO_SEPARATOR: char = '-';
/// Field separator for the US and EU layouts
pub const SLASH_SEPARATOR: char = '/';

// Recognition rules. Full-string, ASCII-only.
pub(crate) const ISO_PATTERN: &str = r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$";
pub(crate) const US_PATTERN: &str = r"^(0[1-9]|1[0-2])/(0[1-9]|[12][0-9]|3[01])/[0-9]{4}$";
pub(crate) const EU_PATTERN: &str = r"^(0[1-9]|[12][0-9]|3[01])/(0[1-9]|1[0-2])/[0-9]{4}$";
pub(crate) const VERBOSE_PATTERN: &str = r"^([A-Za-z]+) ([0-9]{1,2}), ([0-9]{4})$";
