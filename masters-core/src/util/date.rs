//! Date handling for API payloads.
//!
//! The backend only ever receives calendar dates (`YYYY-MM-DD`), never a
//! time of day or an offset.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Anything a form may hold in a date field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DateInput<'a> {
    Missing,
    Text(&'a str),
    Date(NaiveDate),
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(value: &'a str) -> Self {
        DateInput::Text(value)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(value: &'a String) -> Self {
        DateInput::Text(value.as_str())
    }
}

impl<'a> From<Option<&'a str>> for DateInput<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(DateInput::Missing, DateInput::Text)
    }
}

impl From<NaiveDate> for DateInput<'_> {
    fn from(value: NaiveDate) -> Self {
        DateInput::Date(value)
    }
}

impl From<Option<NaiveDate>> for DateInput<'_> {
    fn from(value: Option<NaiveDate>) -> Self {
        value.map_or(DateInput::Missing, DateInput::Date)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput<'_> {
    fn from(value: DateTime<Tz>) -> Self {
        // calendar date as seen in the datetime's own zone
        DateInput::Date(value.date_naive())
    }
}

/// Converts a date-like value into the `YYYY-MM-DD` string the API expects.
/// Missing, blank and unparseable input yields `None`.
pub fn to_date_only_string<'a, D: Into<DateInput<'a>>>(value: D) -> Option<String> {
    match value.into() {
        DateInput::Missing => None,
        DateInput::Date(date) => Some(date.format(DATE_FORMAT).to_string()),
        DateInput::Text(text) => {
            parse_date(text).map(|date| date.format(DATE_FORMAT).to_string())
        }
    }
}

/// Parses the date formats the API and the forms exchange. RFC 3339
/// timestamps keep the calendar date of the offset they carry.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, DATE_FORMAT) {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }

    None
}

/// Today's date in the local zone, as a form default.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
