use std::fmt::Display;

use time::{
    format_description::well_known::Iso8601, macros::format_description, Date, OffsetDateTime,
    PrimitiveDateTime,
};

use crate::{error::ParseError, DEGREE_SYMBOL};

/// Appends the degree Celsius suffix to whatever is given, without looking at it.
pub fn format_temperature(value: impl Display) -> String {
    format!("{value}{DEGREE_SYMBOL}")
}

/// Accepts `2021-07-06` as well as full ISO-8601 date-times such as
/// `2021-07-02T07:00:00+08:00` or `2021-07-02 07:00:00`. Only the calendar
/// date is kept, the time and offset are dropped.
pub fn parse_iso_date(value: &str) -> Result<Date, ParseError> {
    let trimmed = value.trim().replacen(' ', "T", 1);
    let date = if trimmed.contains('T') {
        // Without an offset only the primitive parse succeeds.
        OffsetDateTime::parse(&trimmed, &Iso8601::DEFAULT)
            .map(|datetime| datetime.date())
            .or_else(|_| {
                PrimitiveDateTime::parse(&trimmed, &Iso8601::DEFAULT)
                    .map(|datetime| datetime.date())
            })
    } else {
        Date::parse(&trimmed, format_description!("[year]-[month]-[day]"))
    };

    date.map_err(|source| ParseError::Date {
        value: value.to_string(),
        source,
    })
}

/// `2021-07-06` => `Tuesday 06 July 2021`
pub fn convert_date(iso_string: &str) -> Result<String, ParseError> {
    let date = parse_iso_date(iso_string)?;
    Ok(long_date(date))
}

/// `2021-07-06` => `July 06, 2021`
pub fn convert_date_short(iso_string: &str) -> Result<String, ParseError> {
    let date = parse_iso_date(iso_string)?;
    Ok(short_date(date))
}

pub(crate) fn long_date(date: Date) -> String {
    format!(
        "{} {:02} {} {:04}",
        date.weekday(),
        date.day(),
        date.month(),
        date.year()
    )
}

pub(crate) fn short_date(date: Date) -> String {
    format!("{} {:02}, {:04}", date.month(), date.day(), date.year())
}
