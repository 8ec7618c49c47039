use chrono::NaiveDateTime;
use serde_json::{Value, json};

use crate::core::engine::generators::{DatePair, date_pair};
use crate::core::engine::rng::FuzzRng;
use crate::core::engine::traits::FuzzTarget;
use crate::core::recorder::record;
use crate::types::{Finding, TargetFault, TargetKind};

use super::subject;

pub type DaysFn = fn(NaiveDateTime, NaiveDateTime) -> Result<i64, TargetFault>;

const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Fuzzes a day-difference function. Any negative count is flagged, including
/// for pairs where the end precedes the start.
pub struct DaysBetweenTarget {
    subject: DaysFn,
}

impl Default for DaysBetweenTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl DaysBetweenTarget {
    pub fn new() -> Self {
        Self::with_subject(subject::days_between)
    }

    pub fn with_subject(subject: DaysFn) -> Self {
        Self { subject }
    }
}

fn iso(ts: &NaiveDateTime) -> String {
    ts.format(ISO_FORMAT).to_string()
}

impl FuzzTarget for DaysBetweenTarget {
    type Scope = ();
    type Input = DatePair;
    type Output = i64;

    fn kind(&self) -> TargetKind {
        TargetKind::DaysBetween
    }

    fn fault_context(&self) -> &'static str {
        "date difference"
    }

    fn open_scope(&self) -> Result<(), TargetFault> {
        Ok(())
    }

    fn generate(&self, rng: &mut FuzzRng, _scope: &()) -> DatePair {
        date_pair(rng)
    }

    fn invoke(&self, input: &DatePair) -> Result<i64, TargetFault> {
        (self.subject)(input.start, input.end)
    }

    fn check(
        &self,
        input: &DatePair,
        days: i64,
        findings: &mut Vec<Finding>,
    ) -> Result<(), TargetFault> {
        if days < 0 {
            record(
                findings,
                &self.name(),
                "negative delta returned",
                json!({
                    "start": iso(&input.start),
                    "end": iso(&input.end),
                    "result": days,
                }),
                None,
            );
        }
        Ok(())
    }

    fn fault_payload(&self, input: &DatePair) -> Value {
        json!({ "start": iso(&input.start), "end": iso(&input.end) })
    }
}
