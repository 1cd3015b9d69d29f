use std::ops::{Deref, Range};

mod error;
mod format;
mod loader;
mod stats;
mod summary;
mod temperature;

pub use error::{LoadError, ParseError, StatsError};
pub use format::{convert_date, convert_date_short, format_temperature, parse_iso_date};
pub use loader::{load_data_from_csv, load_data_from_reader};
pub use stats::{calculate_mean, find_max, find_min, Numeric};
pub use summary::{generate_daily_summary, generate_summary, DAILY_TITLE};
pub use temperature::{convert_f_to_c, Celsius, Fahrenheit};

pub const DEGREE_SYMBOL: &str = "°C";

/// One row of the csv file. Temperatures are in fahrenheit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRecord {
    pub date: String,
    pub min_temp: i32,
    pub max_temp: i32,
}

impl DayRecord {
    pub fn new(date: impl Into<String>, min_temp: i32, max_temp: i32) -> Self {
        Self {
            date: date.into(),
            min_temp,
            max_temp,
        }
    }

    pub fn min_celsius(&self) -> f64 {
        Celsius::from(Fahrenheit(f64::from(self.min_temp))).rounded()
    }

    pub fn max_celsius(&self) -> f64 {
        Celsius::from(Fahrenheit(f64::from(self.max_temp))).rounded()
    }
}

/// The days of a csv file, in the order they were written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeatherDataset {
    days: Vec<DayRecord>,
}

impl WeatherDataset {
    pub fn as_slice(&self) -> &[DayRecord] {
        &self.days
    }

    pub fn min_temps(&self) -> Vec<i32> {
        self.days.iter().map(|day| day.min_temp).collect()
    }

    pub fn max_temps(&self) -> Vec<i32> {
        self.days.iter().map(|day| day.max_temp).collect()
    }

    /// From the lowest minimum to the highest maximum, `None` when there is no day.
    pub fn temperature_range(&self) -> Option<Range<i32>> {
        let low = self.days.iter().map(|day| day.min_temp).min()?;
        let high = self.days.iter().map(|day| day.max_temp).max()?;
        Some(low..high)
    }
}

impl Deref for WeatherDataset {
    type Target = [DayRecord];

    fn deref(&self) -> &Self::Target {
        &self.days
    }
}

impl From<Vec<DayRecord>> for WeatherDataset {
    fn from(days: Vec<DayRecord>) -> Self {
        Self { days }
    }
}

impl FromIterator<DayRecord> for WeatherDataset {
    fn from_iter<I: IntoIterator<Item = DayRecord>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for WeatherDataset {
    type Item = DayRecord;
    type IntoIter = std::vec::IntoIter<DayRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.into_iter()
    }
}

impl<'a> IntoIterator for &'a WeatherDataset {
    type Item = &'a DayRecord;
    type IntoIter = std::slice::Iter<'a, DayRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> WeatherDataset {
        vec![
            DayRecord::new("2021-07-02", 49, 67),
            DayRecord::new("2021-07-03", 57, 68),
            DayRecord::new("2021-07-04", 56, 62),
        ]
        .into()
    }

    #[test]
    fn columns() {
        let dataset = dataset();
        assert_eq!(dataset.min_temps(), [49, 57, 56]);
        assert_eq!(dataset.max_temps(), [67, 68, 62]);
        assert_eq!(dataset.temperature_range(), Some(49..68));
        assert_eq!(WeatherDataset::default().temperature_range(), None);
    }

    #[test]
    fn celsius() {
        let day = DayRecord::new("2021-07-06", 32, 104);
        assert_eq!(day.min_celsius(), 0.0);
        assert_eq!(day.max_celsius(), 40.0);
    }

    #[test]
    fn columns_feed_statistics() {
        let dataset = dataset();
        assert_eq!(find_min(&dataset.min_temps()), Some((49.0, 0)));
        assert_eq!(find_max(&dataset.max_temps()), Some((68.0, 1)));
        assert_eq!(calculate_mean(&dataset.min_temps()).unwrap(), 54.0);
    }

    #[test]
    fn keeps_file_order() {
        let dates: Vec<_> = dataset().iter().map(|day| day.date.clone()).collect();
        assert_eq!(dates, ["2021-07-02", "2021-07-03", "2021-07-04"]);
    }
}
