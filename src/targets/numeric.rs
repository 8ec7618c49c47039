//! Helpers shared by the aggregate targets (average, median).

use serde_json::json;

use crate::core::recorder::record;
use crate::types::{Finding, NoiseValue, TargetFault};

/// Numeric view of a payload; the first non-numeric element is a fault.
pub fn numeric_values(values: &[NoiseValue]) -> Result<Vec<f64>, TargetFault> {
    values
        .iter()
        .map(|value| {
            value.as_number().ok_or_else(|| {
                TargetFault::invalid_input(format!(
                    "unsupported operand type: '{}'",
                    value.type_name()
                ))
            })
        })
        .collect()
}

/// Oracle shared by the aggregates: NaN is only acceptable for empty input.
pub fn check_not_nan(
    target: &str,
    payload: &[NoiseValue],
    result: f64,
    findings: &mut Vec<Finding>,
) {
    if result.is_nan() && !payload.is_empty() {
        record(
            findings,
            target,
            "NaN returned for non-empty payload",
            json!(payload),
            None,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_convert_and_junk_faults() {
        let values = vec![NoiseValue::Int(2), NoiseValue::Float(0.5)];
        assert_eq!(numeric_values(&values).unwrap(), vec![2.0, 0.5]);

        let values = vec![NoiseValue::Int(2), NoiseValue::Absent];
        let fault = numeric_values(&values).unwrap_err();
        assert_eq!(fault.message, "unsupported operand type: 'null'");
    }

    #[test]
    fn nan_only_flagged_for_non_empty_payloads() {
        let mut findings = Vec::new();
        check_not_nan("average", &[], f64::NAN, &mut findings);
        assert!(findings.is_empty());

        check_not_nan("average", &[NoiseValue::Int(1)], 1.0, &mut findings);
        assert!(findings.is_empty());

        check_not_nan("average", &[NoiseValue::EmptyString], f64::NAN, &mut findings);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].detail(), "NaN returned for non-empty payload");
        assert_eq!(findings[0].payload(), &json!([""]));
    }
}
