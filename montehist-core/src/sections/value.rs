use crate::sections::options::ParseOptions;
use std::num::ParseFloatError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueFault {
    #[error("not a decimal number ({0})")]
    NotANumber(#[from] ParseFloatError),

    #[error("value is not finite")]
    NotFinite,

    #[error("value {value} is not positive, its logarithm is undefined")]
    NonPositive { value: f64 },
}

/// Parses the trimmed text of a data line.
pub fn parse_value(text: &str, options: &ParseOptions) -> Result<f64, ValueFault> {
    let value: f64 = text.trim().parse()?;

    if !value.is_finite() {
        return Err(ValueFault::NotFinite);
    }

    if value <= 0.0 && !options.allow_non_positive {
        return Err(ValueFault::NonPositive { value });
    }

    Ok(value)
}

#[inline]
pub fn to_log10(value: f64) -> f64 {
    value.log10()
}

/// Inverse of [`to_log10`].
#[inline]
pub fn from_log10(log: f64) -> f64 {
    10f64.powf(log)
}
