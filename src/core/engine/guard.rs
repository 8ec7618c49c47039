//! The failure boundary around a single trial.

use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

use log::debug;

use crate::core::engine::rng::FuzzRng;
use crate::core::engine::traits::FuzzTarget;
use crate::core::recorder::record;
use crate::types::{Finding, TargetFault};

thread_local! {
    static IN_TRIAL: Cell<bool> = const { Cell::new(false) };
}

static TRIAL_HOOK: Once = Once::new();

/// Route panics raised inside a guarded call through `log` instead of the
/// default stderr report. Panics anywhere else still reach the previous hook.
fn install_trial_panic_hook() {
    TRIAL_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if IN_TRIAL.with(Cell::get) {
                debug!("target panicked: {info}");
            } else {
                previous(info);
            }
        }));
    });
}

/// Run `call`, turning a panic into a [`TargetFault`] so that nothing escapes
/// the trial.
pub fn invoke_guarded<O, F>(call: F) -> Result<O, TargetFault>
where
    F: FnOnce() -> Result<O, TargetFault>,
{
    install_trial_panic_hook();
    let outer = IN_TRIAL.replace(true);
    let outcome = panic::catch_unwind(AssertUnwindSafe(call));
    IN_TRIAL.set(outer);

    match outcome {
        Ok(result) => result,
        Err(payload) => Err(TargetFault::from_panic(payload)),
    }
}

/// One generate -> invoke -> check cycle.
///
/// A fault from the target or from the oracle closes the trial with exactly
/// one recorded finding; no further checks run for it.
pub fn run_trial<T: FuzzTarget + ?Sized>(
    target: &T,
    rng: &mut FuzzRng,
    scope: &T::Scope,
    findings: &mut Vec<Finding>,
) {
    let input = target.generate(rng, scope);

    let outcome = invoke_guarded(|| target.invoke(&input))
        .and_then(|output| invoke_guarded(|| target.check(&input, output, findings)));

    if let Err(fault) = outcome {
        debug!("{} faulted: {fault}", target.name());
        record(
            findings,
            &target.name(),
            &format!("fault during {}", target.fault_context()),
            target.fault_payload(&input),
            Some(&fault),
        );
    }
}
