use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::types::{AppError, AppResult, TargetKind};

/// Environment variable controlling the random seed.
pub const SEED_ENV_VAR: &str = "FUZZ_SEED";
pub const DEFAULT_SEED: u64 = 1337;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct LogConfig {
    pub level: Option<String>,
    pub color: Option<bool>, // None = auto-detect (semantic)
}

impl LogConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn color(&self) -> Option<bool> {
        self.color // None has semantic meaning (auto-detect)
    }

    pub fn to_effective(&self) -> Self {
        Self {
            level: Some(self.level().to_string()),
            color: self.color,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct RunConfig {
    pub targets: Option<Vec<String>>, // None = every target (semantic)
    pub progress: Option<bool>,
}

impl RunConfig {
    pub fn targets(&self) -> Option<&[String]> {
        self.targets.as_deref()
    }

    pub fn progress(&self) -> bool {
        self.progress.unwrap_or(false)
    }

    pub fn to_effective(&self) -> Self {
        Self {
            targets: self.targets.clone(),
            progress: Some(self.progress()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    // Top-level fields
    pub seed: Option<u64>,

    // Nested sections
    pub log: Option<LogConfig>,
    pub run: Option<RunConfig>,
    pub iterations: Option<BTreeMap<String, usize>>, // keyed by target name
}

impl Config {
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    pub fn log(&self) -> LogConfig {
        self.log.clone().unwrap_or_default()
    }

    pub fn run(&self) -> RunConfig {
        self.run.clone().unwrap_or_default()
    }

    /// Iteration count for a target: per-target override, else the target default.
    pub fn iterations_for(&self, kind: TargetKind) -> usize {
        self.iterations
            .as_ref()
            .and_then(|map| map.get(&kind.to_string()).copied())
            .unwrap_or_else(|| kind.default_iterations())
    }

    /// Targets to fuzz, always in declared campaign order.
    pub fn resolve_targets(&self) -> AppResult<Vec<TargetKind>> {
        let Some(names) = self.run().targets else {
            return Ok(TargetKind::iter().collect());
        };

        let mut selected = Vec::new();
        for name in names {
            let kind = TargetKind::from_str(name.trim())
                .map_err(|_| AppError::UnknownTarget(name.clone()))?;
            selected.push(kind);
        }
        selected.sort();
        selected.dedup();
        Ok(selected)
    }

    pub fn to_effective(&self) -> Self {
        Self {
            seed: Some(self.seed()),
            log: Some(self.log().to_effective()),
            run: Some(self.run().to_effective()),
            iterations: Some(
                TargetKind::iter()
                    .map(|kind| (kind.to_string(), self.iterations_for(kind)))
                    .collect(),
            ),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config: Option<String>,
    pub log_level: Option<String>,
    pub log_color: Option<String>, // "on" | "off"
    pub seed: Option<u64>,
    pub iterations: Option<usize>,
    pub targets: Option<String>, // csv
    pub progress: bool,
}

pub const CONFIG_FILENAME: &str = "oraclefuzz.toml";

static CONFIG: OnceCell<Config> = OnceCell::new();

pub fn config() -> &'static Config {
    CONFIG.get_or_init(|| {
        let mut cfg = Config::default();
        if let Some(path) = find_nearest_config_file()
            && let Ok(Some(file_cfg)) = read_config_file(&path)
        {
            apply_file_config(&mut cfg, &file_cfg);
        }
        cfg
    })
}

pub fn init_with_overrides(overrides: &CliOverrides) -> AppResult<()> {
    let cfg = build_config(overrides, std::env::var(SEED_ENV_VAR).ok())?;
    let _ = CONFIG.set(cfg);
    Ok(())
}

/// Layer defaults, config file, environment and CLI (in that order).
pub fn build_config(overrides: &CliOverrides, env_seed: Option<String>) -> AppResult<Config> {
    let mut cfg = Config::default();

    // 1) Config file: explicit --config, else walk up from cwd
    let path = match &overrides.config {
        Some(explicit) => {
            let path = PathBuf::from(explicit);
            if !path.exists() {
                return Err(AppError::Custom(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            Some(path)
        }
        None => find_nearest_config_file(),
    };
    if let Some(path) = path
        && let Some(file_cfg) = read_config_file(&path)?
    {
        apply_file_config(&mut cfg, &file_cfg);
    }

    // 2) Environment
    if let Some(raw) = env_seed {
        apply_env_seed(&mut cfg, &raw)?;
    }

    // 3) CLI arguments (highest priority). Only override if user specified.
    apply_cli_overrides(&mut cfg, overrides);

    Ok(cfg)
}

fn read_config_file(path: &Path) -> AppResult<Option<Config>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)?;
    Ok(Some(toml::from_str::<Config>(&contents)?))
}

fn apply_file_config(cfg: &mut Config, file: &Config) {
    if file.seed.is_some() {
        cfg.seed = file.seed;
    }

    if let Some(file_log) = &file.log {
        let mut log = cfg.log.clone().unwrap_or_default();
        if file_log.level.is_some() {
            log.level = file_log.level.clone();
        }
        if file_log.color.is_some() {
            log.color = file_log.color;
        }
        cfg.log = Some(log);
    }

    if let Some(file_run) = &file.run {
        let mut run = cfg.run.clone().unwrap_or_default();
        if file_run.targets.is_some() {
            run.targets = file_run.targets.clone(); // override semantics
        }
        if file_run.progress.is_some() {
            run.progress = file_run.progress;
        }
        cfg.run = Some(run);
    }

    if let Some(file_iterations) = &file.iterations {
        let mut iterations = cfg.iterations.clone().unwrap_or_default();
        iterations.extend(file_iterations.iter().map(|(k, v)| (k.clone(), *v)));
        cfg.iterations = Some(iterations);
    }
}

fn apply_env_seed(cfg: &mut Config, raw: &str) -> AppResult<()> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(());
    }
    let seed = trimmed.parse::<u64>().map_err(|_| {
        AppError::Custom(format!("{SEED_ENV_VAR} must be an unsigned integer, got '{raw}'"))
    })?;
    cfg.seed = Some(seed);
    Ok(())
}

fn apply_cli_overrides(cfg: &mut Config, overrides: &CliOverrides) {
    if overrides.seed.is_some() {
        cfg.seed = overrides.seed;
    }

    // Log overrides
    let mut log = cfg.log.clone().unwrap_or_default();
    if let Some(level) = &overrides.log_level
        && !level.trim().is_empty()
    {
        log.level = Some(level.trim().to_string());
    }
    if let Some(color_str) = &overrides.log_color {
        match color_str.to_lowercase().as_str() {
            "on" => log.color = Some(true),
            "off" => log.color = Some(false),
            _ => {}
        }
    }
    if overrides.log_level.is_some() || overrides.log_color.is_some() {
        cfg.log = Some(log);
    }

    // Run overrides
    let mut run = cfg.run.clone().unwrap_or_default();
    if let Some(targets_csv) = &overrides.targets {
        let list = parse_csv(targets_csv);
        if !list.is_empty() {
            run.targets = Some(list);
        }
    }
    if overrides.progress {
        run.progress = Some(true);
    }
    if overrides.targets.is_some() || overrides.progress {
        cfg.run = Some(run);
    }

    // --iterations applies to every target
    if let Some(n) = overrides.iterations {
        cfg.iterations = Some(
            TargetKind::iter()
                .map(|kind| (kind.to_string(), n))
                .collect(),
        );
    }
}

fn parse_csv(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn find_nearest_config_file() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    for dir in cwd.ancestors() {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
    }
    None
}

pub fn colors_enabled() -> bool {
    match config().log().color() {
        Some(force) => force,
        None => console::colors_enabled_stderr(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn file_config(contents: &str) -> Config {
        toml::from_str(contents).unwrap()
    }

    #[test]
    fn defaults_match_reference_run() {
        let cfg = Config::default();
        assert_eq!(cfg.seed(), 1337);
        assert_eq!(cfg.iterations_for(TargetKind::MakeChunks), 200);
        assert_eq!(cfg.iterations_for(TargetKind::DumpContent), 50);
        assert_eq!(cfg.resolve_targets().unwrap().len(), 5);
        assert_eq!(cfg.log().level(), "info");
    }

    #[test]
    fn file_values_are_merged() {
        let mut cfg = Config::default();
        let file = file_config(
            r#"
seed = 7

[log]
level = "debug"

[run]
targets = ["median", "make_chunks"]

[iterations]
median = 10
"#,
        );
        apply_file_config(&mut cfg, &file);

        assert_eq!(cfg.seed(), 7);
        assert_eq!(cfg.log().level(), "debug");
        assert_eq!(cfg.iterations_for(TargetKind::Median), 10);
        assert_eq!(cfg.iterations_for(TargetKind::Average), 200);
        assert_eq!(
            cfg.resolve_targets().unwrap(),
            vec![TargetKind::MakeChunks, TargetKind::Median]
        );
    }

    #[test]
    fn env_seed_beats_file_and_cli_beats_env() {
        let mut cfg = Config::default();
        apply_file_config(&mut cfg, &file_config("seed = 7"));
        apply_env_seed(&mut cfg, "99").unwrap();
        assert_eq!(cfg.seed(), 99);

        apply_cli_overrides(
            &mut cfg,
            &CliOverrides {
                seed: Some(5),
                ..Default::default()
            },
        );
        assert_eq!(cfg.seed(), 5);
    }

    #[test]
    fn blank_env_seed_is_ignored_and_garbage_is_rejected() {
        let mut cfg = Config::default();
        apply_env_seed(&mut cfg, "  ").unwrap();
        assert_eq!(cfg.seed(), DEFAULT_SEED);
        assert!(apply_env_seed(&mut cfg, "not-a-number").is_err());
    }

    #[test]
    fn cli_iterations_override_every_target() {
        let mut cfg = Config::default();
        apply_file_config(&mut cfg, &file_config("[iterations]\nmedian = 10"));
        apply_cli_overrides(
            &mut cfg,
            &CliOverrides {
                iterations: Some(3),
                ..Default::default()
            },
        );
        for kind in TargetKind::iter() {
            assert_eq!(cfg.iterations_for(kind), 3);
        }
    }

    #[test]
    fn unknown_target_names_are_rejected() {
        let mut cfg = Config::default();
        apply_cli_overrides(
            &mut cfg,
            &CliOverrides {
                targets: Some("average, bogus".to_string()),
                ..Default::default()
            },
        );
        match cfg.resolve_targets() {
            Err(AppError::UnknownTarget(name)) => assert_eq!(name, "bogus"),
            other => panic!("expected UnknownTarget, got {other:?}"),
        }
    }

    #[test]
    fn build_config_reads_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "seed = 42\n[log]\ncolor = false").unwrap();

        let overrides = CliOverrides {
            config: Some(path.to_string_lossy().to_string()),
            ..Default::default()
        };
        let cfg = build_config(&overrides, None).unwrap();
        assert_eq!(cfg.seed(), 42);
        assert_eq!(cfg.log().color(), Some(false));
    }

    #[test]
    fn malformed_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "seed = \"seven").unwrap();

        let overrides = CliOverrides {
            config: Some(path.to_string_lossy().to_string()),
            ..Default::default()
        };
        assert!(matches!(
            build_config(&overrides, None),
            Err(AppError::Toml(_))
        ));
    }
}
