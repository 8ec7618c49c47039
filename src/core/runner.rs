use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use serde_json::json;

use crate::core::engine::guard::run_trial;
use crate::core::engine::rng::{FuzzRng, seeded_rng};
use crate::core::engine::traits::FuzzTarget;
use crate::core::recorder::record;
use crate::core::registry::TargetRegistry;
use crate::types::{AppError, AppResult, Campaign, RunSummary, TargetKind};

/// What to run: the seed plus each selected target with its trial count.
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub seed: u64,
    pub targets: Vec<(TargetKind, usize)>,
    pub progress: bool,
}

/// Object-safe view of a [`FuzzTarget`], so targets with different input and
/// output types can share a registry.
pub trait Campaigner: Send + Sync {
    fn target(&self) -> TargetKind;

    fn run(&self, iterations: usize, rng: &mut FuzzRng, progress: &ProgressBar) -> Campaign;
}

impl<T: FuzzTarget> Campaigner for T {
    fn target(&self) -> TargetKind {
        self.kind()
    }

    fn run(&self, iterations: usize, rng: &mut FuzzRng, progress: &ProgressBar) -> Campaign {
        run_campaign(self, iterations, rng, progress)
    }
}

/// Run `iterations` independent trials against one target and seal the result.
///
/// The target's scope lives exactly as long as the trial loop.
pub fn run_campaign<T: FuzzTarget + ?Sized>(
    target: &T,
    iterations: usize,
    rng: &mut FuzzRng,
    progress: &ProgressBar,
) -> Campaign {
    let mut findings = Vec::new();

    match target.open_scope() {
        Ok(scope) => {
            for _ in 0..iterations {
                run_trial(target, rng, &scope, &mut findings);
                progress.inc(1);
            }
        }
        Err(fault) => {
            record(
                &mut findings,
                &target.name(),
                &format!("fault during {}", target.fault_context()),
                json!({ "stage": "setup" }),
                Some(&fault),
            );
        }
    }

    Campaign::seal(target.kind(), iterations, findings)
}

/// Run every campaign in the plan, in order, against one shared RNG.
pub fn execute_plan(registry: &TargetRegistry, plan: &RunPlan) -> AppResult<RunSummary> {
    let mut rng = seeded_rng(plan.seed);
    let mut campaigns = Vec::with_capacity(plan.targets.len());

    for &(kind, iterations) in &plan.targets {
        let target = registry
            .get(kind)
            .ok_or_else(|| AppError::UnknownTarget(kind.to_string()))?;

        info!("Starting fuzzer for {kind} ({iterations} iterations)");
        let started = Instant::now();
        let progress = progress_bar(kind, iterations, plan.progress);
        let campaign = target.run(iterations, &mut rng, &progress);
        progress.finish_and_clear();

        let found = campaign.findings().len();
        if found > 0 {
            warn!("Found {found} potential issues while fuzzing {kind}");
        } else {
            info!("No issues detected for {kind}");
        }
        info!("Finished fuzzing {kind} in {:.2?}", started.elapsed());

        campaigns.push(campaign);
    }

    Ok(RunSummary::new(plan.seed, campaigns))
}

fn progress_bar(kind: TargetKind, iterations: usize, enabled: bool) -> ProgressBar {
    if !enabled || !console::Term::stderr().is_term() {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(iterations as u64);
    if let Ok(style) = ProgressStyle::with_template("{prefix:>14} [{bar:30}] {pos}/{len}") {
        bar.set_style(style.progress_chars("=> "));
    }
    bar.set_prefix(kind.to_string());
    bar
}
