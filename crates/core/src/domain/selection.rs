use chrono::NaiveDate;
use std::fmt;

/// A date entry that could not be understood as a calendar date. The engine
/// never coerces bad input; callers surface this to whoever supplied the
/// selection.
#[derive(Debug, Clone)]
pub struct InvalidSelectionError {
    pub entry: String,
    pub detail: String,
}

impl fmt::Display for InvalidSelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid selected date {:?}: {}",
            self.entry, self.detail
        )
    }
}

impl std::error::Error for InvalidSelectionError {}

/// Parses raw `YYYY-MM-DD` strings into calendar dates, failing on the first
/// entry that does not parse.
pub fn parse_dates(raw: &[String]) -> Result<Vec<NaiveDate>, InvalidSelectionError> {
    let mut dates = Vec::with_capacity(raw.len());
    for entry in raw {
        let trimmed = entry.trim();
        if trimmed.is_empty() {
            return Err(InvalidSelectionError {
                entry: entry.clone(),
                detail: "empty entry".to_string(),
            });
        }
        let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|e| {
            InvalidSelectionError {
                entry: entry.clone(),
                detail: e.to_string(),
            }
        })?;
        dates.push(date);
    }
    Ok(dates)
}

/// Sorts ascending and collapses duplicate calendar days. The selection is a
/// set; a day picked twice still needs exactly one ticket.
pub fn normalize(mut dates: Vec<NaiveDate>) -> Vec<NaiveDate> {
    dates.sort();
    dates.dedup();
    dates
}
