use serde_json::{Value, json};

use crate::core::engine::generators::numeric_noise;
use crate::core::engine::rng::FuzzRng;
use crate::core::engine::traits::FuzzTarget;
use crate::targets::numeric::check_not_nan;
use crate::types::{Finding, NoiseValue, TargetFault, TargetKind};

use super::subject;

pub type MedianFn = fn(&[NoiseValue]) -> Result<f64, TargetFault>;

pub struct MedianTarget {
    subject: MedianFn,
}

impl Default for MedianTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl MedianTarget {
    pub fn new() -> Self {
        Self::with_subject(subject::median)
    }

    pub fn with_subject(subject: MedianFn) -> Self {
        Self { subject }
    }
}

impl FuzzTarget for MedianTarget {
    type Scope = ();
    type Input = Vec<NoiseValue>;
    type Output = f64;

    fn kind(&self) -> TargetKind {
        TargetKind::Median
    }

    fn fault_context(&self) -> &'static str {
        "median"
    }

    fn open_scope(&self) -> Result<(), TargetFault> {
        Ok(())
    }

    fn generate(&self, rng: &mut FuzzRng, _scope: &()) -> Vec<NoiseValue> {
        numeric_noise(rng)
    }

    fn invoke(&self, input: &Vec<NoiseValue>) -> Result<f64, TargetFault> {
        (self.subject)(input)
    }

    fn check(
        &self,
        input: &Vec<NoiseValue>,
        median: f64,
        findings: &mut Vec<Finding>,
    ) -> Result<(), TargetFault> {
        check_not_nan(&self.name(), input, median, findings);
        Ok(())
    }

    fn fault_payload(&self, input: &Vec<NoiseValue>) -> Value {
        json!(input)
    }
}
