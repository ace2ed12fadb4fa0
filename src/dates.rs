use chrono::NaiveDate;

use crate::error::EntryError;

/// Parse a date in the exact `YYYY-MM-DD` shape: 4-digit year, 2-digit month
/// and day, real calendar date (leap years included). Anything else fails —
/// short components, extra text, separators other than `-`.
pub fn parse_strict(text: &str) -> Result<NaiveDate, EntryError> {
    let invalid = || EntryError::InvalidDate(text.to_string());

    let bytes = text.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| matches!(i, 4 | 7) || b.is_ascii_digit());
    if !well_formed {
        return Err(invalid());
    }

    // Components are all-digit at this point, so these parses cannot fail.
    let year: i32 = text[0..4].parse().map_err(|_| invalid())?;
    let month: u32 = text[5..7].parse().map_err(|_| invalid())?;
    let day: u32 = text[8..10].parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Short chart label for a date, e.g. "Mar 4".
pub fn display_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}
