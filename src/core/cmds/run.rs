use log::info;

use crate::core::registry::TargetRegistry;
use crate::core::runner::{RunPlan, execute_plan};
use crate::types::config::Config;
use crate::types::{AppResult, RunSummary};

/// Resolve the run plan (seed, targets in declared order, iteration counts).
pub fn build_plan(cfg: &Config) -> AppResult<RunPlan> {
    let targets = cfg
        .resolve_targets()?
        .into_iter()
        .map(|kind| (kind, cfg.iterations_for(kind)))
        .collect();
    Ok(RunPlan {
        seed: cfg.seed(),
        targets,
        progress: cfg.run().progress(),
    })
}

/// Run every selected campaign and report the findings. Findings are
/// informational and never turn into an error.
pub fn execute_run(cfg: &Config, registry: &TargetRegistry, format: &str) -> AppResult<RunSummary> {
    let plan = build_plan(cfg)?;
    info!(
        "Fuzzing {} targets with seed {}",
        plan.targets.len(),
        plan.seed
    );

    let summary = execute_plan(registry, &plan)?;
    report(&summary, format)?;
    Ok(summary)
}

fn report(summary: &RunSummary, format: &str) -> AppResult<()> {
    if summary.total_findings() > 0 {
        info!(
            "Fuzzing completed with {} total findings.",
            summary.total_findings()
        );
        for finding in summary.findings() {
            info!("Issue: {finding}");
        }
    } else {
        info!("Fuzzing completed with no findings.");
    }

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(summary)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TargetKind;

    #[test]
    fn default_plan_covers_every_target_in_order() {
        let plan = build_plan(&Config::default()).unwrap();
        assert_eq!(plan.seed, 1337);
        assert_eq!(
            plan.targets,
            vec![
                (TargetKind::MakeChunks, 200),
                (TargetKind::DaysBetween, 200),
                (TargetKind::DumpContent, 50),
                (TargetKind::Average, 200),
                (TargetKind::Median, 200),
            ]
        );
        assert!(!plan.progress);
    }
}
