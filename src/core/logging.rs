use std::str::FromStr;

use console::style;
use log::{Level, LevelFilter};

use crate::types::AppResult;
use crate::types::config::{colors_enabled, config};

const LOG_TARGET: &str = "oraclefuzz";

/// Install the global logger using the effective `[log]` config.
/// Must run after configuration has been initialized.
pub fn init_logging() -> AppResult<()> {
    let level = parse_level(config().log().level());
    let colors = colors_enabled();

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{}:{}:{}",
                level_label(record.level(), colors),
                LOG_TARGET,
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

/// Unknown level names fall back to `info`.
pub fn parse_level(level: &str) -> LevelFilter {
    LevelFilter::from_str(level.trim()).unwrap_or(LevelFilter::Info)
}

fn level_label(level: Level, colors: bool) -> String {
    let label = level.to_string();
    if !colors {
        return label;
    }
    match level {
        Level::Error => style(label).red().bold().to_string(),
        Level::Warn => style(label).yellow().to_string(),
        Level::Info => style(label).green().to_string(),
        Level::Debug => style(label).cyan().to_string(),
        Level::Trace => style(label).dim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_parse_case_insensitively() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level(" WARN "), LevelFilter::Warn);
        assert_eq!(parse_level("loud"), LevelFilter::Info);
    }

    #[test]
    fn plain_labels_without_colors() {
        assert_eq!(level_label(Level::Warn, false), "WARN");
        assert_eq!(level_label(Level::Info, false), "INFO");
    }
}
