use crate::targets::numeric::numeric_values;
use crate::types::{NoiseValue, TargetFault};

/// Arithmetic mean. An empty sequence has no mean and yields NaN.
pub fn average(values: &[NoiseValue]) -> Result<f64, TargetFault> {
    if values.is_empty() {
        return Ok(f64::NAN);
    }
    let numbers = numeric_values(values)?;
    Ok(numbers.iter().sum::<f64>() / numbers.len() as f64)
}
