use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// All relative paths will be interpreted relative to this directory.
    #[arg(long, global = true)]
    pub cwd: Option<String>,

    /// Config file to use instead of the nearest oraclefuzz.toml
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Logging level (overrides env/config). One of: trace, debug, info, warn, error
    #[arg(long = "log.level", global = true)]
    pub log_level: Option<String>,

    /// Logging color control: "on" to force colors, "off" to disable; omit for auto
    #[arg(long = "log.color", global = true)]
    pub log_color: Option<String>,

    /// Defaults to `run` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the fuzzing campaigns
    Run(RunArgs),

    /// Print various information about targets and configuration
    Print {
        #[command(subcommand)]
        command: PrintArgs,
    },
}

/// Arguments for the run command
#[derive(Parser, Debug, Default)]
pub struct RunArgs {
    /// Seed for the random source.
    /// Replaces FUZZ_SEED and config `seed` if provided.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Iterations for every selected target.
    /// Replaces config [iterations] if provided.
    #[arg(long)]
    pub iterations: Option<usize>,

    /// Comma-separated list of targets to fuzz (e.g., "average,median").
    /// Use 'print targets' for a full list. Campaigns always run in declared order.
    /// Replaces config [run].targets if provided.
    #[arg(long)]
    pub targets: Option<String>,

    /// Show a progress bar per campaign
    #[arg(long)]
    pub progress: bool,

    /// Output format: "table" (default) or "json" (run summary on stdout)
    #[arg(long, default_value = "table")]
    pub format: String,
}

/// Arguments for the print command
#[derive(Subcommand, Debug)]
pub enum PrintArgs {
    /// List all targets with their iteration counts and input domains
    Targets(PrintFormatArgs),

    /// Print the effective global configuration
    Config(PrintFormatArgs),
}

/// Arguments shared by the print subcommands
#[derive(Parser, Debug)]
pub struct PrintFormatArgs {
    /// Output format: "table" (default) or "json"
    #[arg(long, default_value = "table")]
    pub format: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_is_optional() {
        let args = Args::try_parse_from(["oraclefuzz"]).unwrap();
        assert!(args.command.is_none());
    }

    #[test]
    fn run_flags_parse() {
        let args = Args::try_parse_from([
            "oraclefuzz",
            "--log.level",
            "debug",
            "run",
            "--seed",
            "7",
            "--iterations",
            "10",
            "--targets",
            "median,average",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(args.log_level.as_deref(), Some("debug"));
        match args.command {
            Some(Commands::Run(run)) => {
                assert_eq!(run.seed, Some(7));
                assert_eq!(run.iterations, Some(10));
                assert_eq!(run.targets.as_deref(), Some("median,average"));
                assert_eq!(run.format, "json");
                assert!(!run.progress);
            }
            other => panic!("expected run command, got {other:?}"),
        }
    }

    #[test]
    fn print_targets_parses() {
        let args = Args::try_parse_from(["oraclefuzz", "print", "targets", "--format", "json"])
            .unwrap();
        assert!(matches!(
            args.command,
            Some(Commands::Print {
                command: PrintArgs::Targets(PrintFormatArgs { ref format })
            }) if format == "json"
        ));
    }
}
