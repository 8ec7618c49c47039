use crate::core::registry::TargetRegistry;
use crate::types::AppResult;

pub mod config;
pub mod targets;

pub enum PrintCommand {
    Targets(String),
    Config(String),
}

pub fn execute_print(command: PrintCommand, registry: &TargetRegistry) -> AppResult<()> {
    match command {
        PrintCommand::Targets(format) => targets::execute(registry, &format),
        PrintCommand::Config(format) => config::execute(&format),
    }
}
