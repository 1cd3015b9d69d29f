use crate::{error::ParseError, stats::Numeric};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Fahrenheit(pub f64);

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Celsius(pub f64);

impl From<Fahrenheit> for Celsius {
    fn from(value: Fahrenheit) -> Self {
        Celsius((value.0 - 32.0) * 5.0 / 9.0)
    }
}

impl Celsius {
    /// Rounded to one decimal place, halves away from zero.
    pub fn rounded(self) -> f64 {
        round_to_tenth(self.0)
    }
}

pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Converts a fahrenheit temperature, given as a number or a numeric string,
/// into celsius rounded to one decimal place.
pub fn convert_f_to_c(value: impl Numeric) -> Result<f64, ParseError> {
    let fahrenheit = Fahrenheit(value.to_f64()?);
    Ok(Celsius::from(fahrenheit).rounded())
}
