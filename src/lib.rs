pub mod core;
pub mod targets;

// Re-export key items for easy importing in this crate
pub use core::types;

// Re-export key items for easy importing in other crates
pub use core::engine::generators;
pub use core::engine::traits::FuzzTarget;
pub use core::main_shared::run_main;
pub use core::recorder::record;
pub use core::registry::TargetRegistry;
pub use core::runner::{Campaigner, RunPlan, execute_plan, run_campaign};
