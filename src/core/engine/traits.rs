use serde_json::Value;

use crate::core::engine::rng::FuzzRng;
use crate::types::{Finding, TargetFault, TargetKind};

/// Core trait that every fuzzed target must provide.
///
/// A target owns its generator, the call into the subject under test and the
/// oracle that judges a successful result. The campaign runner composes them.
pub trait FuzzTarget: Send + Sync {
    /// Resources held for the whole campaign (e.g. a scratch directory).
    /// Dropped when the campaign ends, on every exit path.
    type Scope;
    type Input;
    type Output;

    fn kind(&self) -> TargetKind;

    /// Word used in fault findings: `"fault during <context>"`.
    fn fault_context(&self) -> &'static str;

    fn open_scope(&self) -> Result<Self::Scope, TargetFault>;

    fn generate(&self, rng: &mut FuzzRng, scope: &Self::Scope) -> Self::Input;

    fn invoke(&self, input: &Self::Input) -> Result<Self::Output, TargetFault>;

    /// Evaluate the invariant on a successful result, recording violations.
    /// An `Err` means the harness could not judge the result and is recorded
    /// as a fault for the trial.
    fn check(
        &self,
        input: &Self::Input,
        output: Self::Output,
        findings: &mut Vec<Finding>,
    ) -> Result<(), TargetFault>;

    /// Payload recorded alongside a fault for this input.
    fn fault_payload(&self, input: &Self::Input) -> Value;

    fn name(&self) -> String {
        self.kind().to_string()
    }
}
