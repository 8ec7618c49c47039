use std::env;
use std::path::PathBuf;

use clap::Parser;
use log::debug;

use crate::core::cli::{Args, Commands, PrintArgs, RunArgs};
use crate::core::cmds;
use crate::core::logging::init_logging;
use crate::core::registry::TargetRegistry;
use crate::types::AppResult;
use crate::types::config::{CliOverrides, config, init_with_overrides};

/// Parse the command line, initialize config and logging, and dispatch.
///
/// Findings never produce a failing exit; only harness errors (bad flags,
/// unreadable config) are returned.
pub fn run_main(registry: TargetRegistry) -> AppResult<()> {
    let args = Args::parse();

    // Handle global arguments
    if let Some(cwd_arg) = args.cwd.as_ref() {
        let cwd = PathBuf::from(cwd_arg).canonicalize()?;
        env::set_current_dir(&cwd)?;
    }

    let command = args.command.unwrap_or(Commands::Run(RunArgs::default()));

    // Build CLI overrides for config precedence
    let mut cli_overrides = CliOverrides {
        config: args.config.clone(),
        log_level: args.log_level.clone(),
        log_color: args.log_color.clone(),
        ..Default::default()
    };
    if let Commands::Run(run_args) = &command {
        cli_overrides.seed = run_args.seed;
        cli_overrides.iterations = run_args.iterations;
        cli_overrides.targets = run_args.targets.clone();
        cli_overrides.progress = run_args.progress;
    }

    // Initialize configuration (files, env, then CLI overrides)
    init_with_overrides(&cli_overrides)?;

    // Initialize logging after config so level/color are applied
    init_logging()?;
    debug!("Current working directory: {}", env::current_dir()?.display());

    match command {
        Commands::Run(run_args) => {
            cmds::execute_run(config(), &registry, &run_args.format)?;
        }
        Commands::Print {
            command: print_args,
        } => match print_args {
            PrintArgs::Targets(args) => cmds::execute_print(
                cmds::print::PrintCommand::Targets(args.format),
                &registry,
            )?,
            PrintArgs::Config(args) => {
                cmds::execute_print(cmds::print::PrintCommand::Config(args.format), &registry)?
            }
        },
    }

    Ok(())
}
