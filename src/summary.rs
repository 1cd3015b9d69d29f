use crate::{
    error::ParseError,
    format::{format_temperature, long_date, parse_iso_date, short_date},
    DayRecord,
};

pub const DAILY_TITLE: &str = "5 Day Overview";

/// Renders, for each day, its lowest and highest temperature in celsius.
///
/// The "average" lines repeat the day's own low and high, nothing is
/// averaged across days.
pub fn generate_summary(dataset: &[DayRecord]) -> Result<String, ParseError> {
    let mut summary = String::new();

    for day in dataset.iter().filter(|day| !day.date.trim().is_empty()) {
        let date = short_date(parse_iso_date(&day.date)?);
        let low = format_temperature(format!("{:.1}", day.min_celsius()));
        let high = format_temperature(format!("{:.1}", day.max_celsius()));

        summary += &format!("The lowest temperature will be {low}, and will occur on {date}.\n");
        summary += &format!("The highest temperature will be {high}, and will occur on {date}.\n");
        summary += &format!("The average low this week is {low}.\n");
        summary += &format!("The average high this week is {high}.\n\n");
    }

    Ok(summary.trim_end().to_string())
}

/// Renders the `5 Day Overview` with one block per day.
pub fn generate_daily_summary(dataset: &[DayRecord]) -> Result<String, ParseError> {
    let mut summary = format!("{DAILY_TITLE}\n");

    for day in dataset {
        let date = long_date(parse_iso_date(&day.date)?);
        let low = format_temperature(format!("{:.1}", day.min_celsius()));
        let high = format_temperature(format!("{:.1}", day.max_celsius()));

        summary += &format!("---- {date} ----\n");
        summary += &format!("  Minimum Temperature: {low}\n");
        summary += &format!("  Maximum Temperature: {high}\n\n");
    }

    Ok(summary.trim_end().to_string())
}
