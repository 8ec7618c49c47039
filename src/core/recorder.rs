use log::debug;
use serde_json::Value;

use crate::types::{Finding, TargetFault};

/// Append one finding to `findings`.
///
/// The payload is stored as-is; `error`, when present, is kept as its
/// `"<kind>: <message>"` rendering.
pub fn record(
    findings: &mut Vec<Finding>,
    target: &str,
    detail: &str,
    payload: Value,
    error: Option<&TargetFault>,
) {
    debug_assert!(!target.is_empty(), "finding target must not be empty");
    debug_assert!(!detail.is_empty(), "finding detail must not be empty");

    debug!("{target}: {detail}");
    findings.push(Finding::new(
        target,
        detail,
        payload,
        error.map(ToString::to_string),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn findings_keep_insertion_order_and_duplicates() {
        let mut findings = Vec::new();
        record(&mut findings, "median", "first", json!([1]), None);
        record(&mut findings, "median", "first", json!([1]), None);
        record(&mut findings, "median", "second", json!(null), None);

        let details: Vec<_> = findings.iter().map(|f| f.detail()).collect();
        assert_eq!(details, vec!["first", "first", "second"]);
        assert!(findings.iter().all(|f| f.error().is_none()));
    }

    #[test]
    fn errors_are_rendered_with_their_kind() {
        let mut findings = Vec::new();
        let fault = TargetFault::invalid_input("unsupported operand: null");
        record(
            &mut findings,
            "average",
            "fault during average",
            json!([null]),
            Some(&fault),
        );

        let finding = &findings[0];
        assert_eq!(finding.target(), "average");
        assert_eq!(finding.payload(), &json!([null]));
        assert_eq!(
            finding.error(),
            Some("InvalidInput: unsupported operand: null")
        );
    }

    #[test]
    fn serialized_findings_omit_missing_errors() {
        let mut findings = Vec::new();
        record(&mut findings, "days_between", "negative delta returned", json!({"result": -5}), None);
        assert_eq!(
            serde_json::to_value(&findings[0]).unwrap(),
            json!({
                "target": "days_between",
                "detail": "negative delta returned",
                "payload": {"result": -5}
            })
        );
    }
}
