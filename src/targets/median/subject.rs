use crate::targets::numeric::numeric_values;
use crate::types::{NoiseValue, TargetFault};

/// Middle value of the sorted sequence; the mean of the two middle values for
/// even lengths. An empty sequence yields NaN.
pub fn median(values: &[NoiseValue]) -> Result<f64, TargetFault> {
    if values.is_empty() {
        return Ok(f64::NAN);
    }
    let mut numbers = numeric_values(values)?;
    numbers.sort_by(f64::total_cmp);

    let mid = numbers.len() / 2;
    if numbers.len() % 2 == 1 {
        Ok(numbers[mid])
    } else {
        Ok((numbers[mid - 1] + numbers[mid]) / 2.0)
    }
}
