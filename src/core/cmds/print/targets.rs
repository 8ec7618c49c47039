use console::style;
use log::info;
use serde::Serialize;

use crate::core::registry::TargetRegistry;
use crate::types::config::config;
use crate::types::{AppResult, TargetKind};

#[derive(Serialize)]
struct TargetInfo {
    name: TargetKind,
    default_iterations: usize,
    iterations: usize,
    domain: &'static str,
}

#[derive(Serialize)]
struct JsonTargets {
    targets: Vec<TargetInfo>,
}

pub fn execute(registry: &TargetRegistry, format: &str) -> AppResult<()> {
    let targets: Vec<TargetInfo> = registry
        .all_targets()
        .into_iter()
        .map(|kind| TargetInfo {
            name: kind,
            default_iterations: kind.default_iterations(),
            iterations: config().iterations_for(kind),
            domain: kind.domain(),
        })
        .collect();

    if format == "json" {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonTargets { targets })?
        );
        return Ok(());
    }

    if targets.is_empty() {
        info!("No targets registered");
        return Ok(());
    }

    for target in targets {
        let iterations = if target.iterations == target.default_iterations {
            style(target.iterations.to_string()).green()
        } else {
            style(format!(
                "{} (default {})",
                target.iterations, target.default_iterations
            ))
            .yellow()
        };
        info!("Target: {} iterations: {}", target.name, iterations);
        info!("  domain: {}", target.domain);
    }
    Ok(())
}
