use log::info;

use crate::types::AppResult;
use crate::types::config::config;

pub fn execute(format: &str) -> AppResult<()> {
    let effective_config = config().to_effective();

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&effective_config)?);
        return Ok(());
    }

    info!("Effective Configuration:");
    info!("");
    info!("Global:");
    info!("  seed: {}", effective_config.seed());

    info!("");
    info!("Log:");
    let log = effective_config.log();
    info!("  level: {}", log.level());
    match log.color() {
        Some(true) => info!("  color: on"),
        Some(false) => info!("  color: off"),
        None => info!("  color: auto"),
    }

    info!("");
    info!("Run:");
    let run = effective_config.run();
    match run.targets() {
        Some(targets) => info!("  targets: [{}]", targets.join(", ")),
        None => info!("  targets: all"),
    }
    info!("  progress: {}", run.progress());

    info!("");
    info!("Iterations:");
    if let Some(iterations) = &effective_config.iterations {
        for (target, count) in iterations {
            info!("  {target}: {count}");
        }
    }

    Ok(())
}
