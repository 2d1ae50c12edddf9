// File: crates/tufte-core/src/sample.rs
// Summary: Input validation; converts list-like input into a uniform f64 sample.

use crate::error::DataError;
use num_traits::ToPrimitive;

/// A single element of caller input that may become a number.
///
/// `Ok(f64::NAN)` marks a missing value, `Err` a value that cannot be a number at all.
pub trait SampleValue {
    fn to_value(&self) -> Result<f64, String>;
}

macro_rules! numeric_sample_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl SampleValue for $t {
                fn to_value(&self) -> Result<f64, String> {
                    self.to_f64().ok_or_else(|| format!("{} is not representable as f64", self))
                }
            }
        )*
    };
}

numeric_sample_value!(f64, f32, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T: SampleValue> SampleValue for Option<T> {
    fn to_value(&self) -> Result<f64, String> {
        match self {
            Some(v) => v.to_value(),
            None => Ok(f64::NAN),
        }
    }
}

impl SampleValue for str {
    fn to_value(&self) -> Result<f64, String> {
        let s = self.trim();
        if is_missing_token(s) {
            return Ok(f64::NAN);
        }
        s.parse::<f64>().map_err(|_| format!("{s:?} is not a number"))
    }
}

impl SampleValue for &str {
    fn to_value(&self) -> Result<f64, String> {
        (**self).to_value()
    }
}

impl SampleValue for String {
    fn to_value(&self) -> Result<f64, String> {
        self.as_str().to_value()
    }
}

fn is_missing_token(s: &str) -> bool {
    s.is_empty()
        || s.eq_ignore_ascii_case("nan")
        || s.eq_ignore_ascii_case("na")
        || s.eq_ignore_ascii_case("null")
}

/// Anything that can be converted into a flat numeric sample.
pub trait ToSample {
    fn to_sample(&self) -> Result<Vec<f64>, String>;
}

impl<T: SampleValue> ToSample for [T] {
    fn to_sample(&self) -> Result<Vec<f64>, String> {
        self.iter()
            .enumerate()
            .map(|(i, v)| v.to_value().map_err(|e| format!("element {i}: {e}")))
            .collect()
    }
}

impl<T: SampleValue> ToSample for Vec<T> {
    fn to_sample(&self) -> Result<Vec<f64>, String> {
        self.as_slice().to_sample()
    }
}

impl<T: SampleValue, const N: usize> ToSample for [T; N] {
    fn to_sample(&self) -> Result<Vec<f64>, String> {
        self.as_slice().to_sample()
    }
}

impl<S: ToSample + ?Sized> ToSample for &S {
    fn to_sample(&self) -> Result<Vec<f64>, String> {
        (**self).to_sample()
    }
}

/// A labeled array: named values where entries may be missing (e.g. a CSV column).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self { name: name.into(), values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ToSample for Column {
    fn to_sample(&self) -> Result<Vec<f64>, String> {
        self.values.to_sample()
    }
}

/// Validate and convert input data to a numeric sample.
///
/// Fails when the input cannot be converted, is empty, or holds only NaN.
/// Infinities and a mix of NaN with real values pass through untouched.
pub fn validate_data<S: ToSample + ?Sized>(data: &S, name: &str) -> Result<Vec<f64>, DataError> {
    let values = data.to_sample().map_err(|reason| DataError::Conversion {
        name: name.to_string(),
        reason,
    })?;
    if values.is_empty() {
        return Err(DataError::Empty { name: name.to_string() });
    }
    if values.iter().all(|v| v.is_nan()) {
        return Err(DataError::AllMissing { name: name.to_string() });
    }
    Ok(values)
}

/// Paired arrays (x against y) must line up one to one.
pub fn ensure_same_length(
    left: &[f64],
    right: &[f64],
    left_name: &str,
    right_name: &str,
) -> Result<(), DataError> {
    if left.len() != right.len() {
        return Err(DataError::LengthMismatch {
            left: left_name.to_string(),
            right: right_name.to_string(),
            left_len: left.len(),
            right_len: right.len(),
        });
    }
    Ok(())
}

/// Minimum and maximum over the finite values, or `None` when there are none.
pub fn finite_min_max(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}
