use crate::error::{ParseError, StatsError};

/// Anything that can be read as a floating point number. Strings are parsed
/// after trimming surrounding whitespace.
pub trait Numeric {
    fn to_f64(&self) -> Result<f64, ParseError>;
}

macro_rules! impl_numeric {
    ($($ty:ty),*) => {
        $(
            impl Numeric for $ty {
                fn to_f64(&self) -> Result<f64, ParseError> {
                    Ok(*self as f64)
                }
            }
        )*
    };
}

impl_numeric!(f64, f32, i32, i64, u32, usize);

impl Numeric for str {
    fn to_f64(&self) -> Result<f64, ParseError> {
        self.trim().parse().map_err(|source| ParseError::Number {
            value: self.to_string(),
            source,
        })
    }
}

impl Numeric for String {
    fn to_f64(&self) -> Result<f64, ParseError> {
        self.as_str().to_f64()
    }
}

impl<T: Numeric + ?Sized> Numeric for &T {
    fn to_f64(&self) -> Result<f64, ParseError> {
        (**self).to_f64()
    }
}

/// Arithmetic mean. Stops at the first value that isn't a number.
pub fn calculate_mean<T: Numeric>(series: &[T]) -> Result<f64, StatsError> {
    if series.is_empty() {
        return Err(StatsError::EmptySeries);
    }

    let mut sum = 0.0;
    for value in series {
        sum += value.to_f64()?;
    }
    Ok(sum / series.len() as f64)
}

/// Smallest value and the index of its last occurrence.
///
/// All or nothing: a single value that isn't a number makes the whole series
/// unanswerable and `None` is returned.
pub fn find_min<T: Numeric>(series: &[T]) -> Option<(f64, usize)> {
    let values = series
        .iter()
        .map(Numeric::to_f64)
        .collect::<Result<Vec<_>, _>>()
        .ok()?;

    let mut min: Option<(f64, usize)> = None;
    for (index, value) in values.into_iter().enumerate() {
        if min.map_or(true, |(current, _)| value <= current) {
            min = Some((value, index));
        }
    }

    min
}

/// Largest value and the index of its last occurrence.
///
/// Lenient: values that aren't numbers are skipped, and `None` is only
/// returned when nothing usable is left.
pub fn find_max<T: Numeric>(series: &[T]) -> Option<(f64, usize)> {
    let mut max: Option<(f64, usize)> = None;

    for (index, value) in series.iter().enumerate() {
        let value = match value.to_f64() {
            Ok(value) => value,
            Err(e) => {
                log::trace!("skipping element {index}: {e}");
                continue;
            }
        };

        let current = max.map_or(f64::NEG_INFINITY, |(current, _)| current);
        if value >= current {
            max = Some((value, index));
        }
    }

    max
}
