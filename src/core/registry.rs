use crate::core::engine::traits::FuzzTarget;
use crate::core::runner::Campaigner;
use crate::targets::average::engine::AverageTarget;
use crate::targets::chunks::engine::ChunkTarget;
use crate::targets::dates::engine::DaysBetweenTarget;
use crate::targets::dump::engine::DumpContentTarget;
use crate::targets::median::engine::MedianTarget;
use crate::types::TargetKind;

/// Registry for managing the fuzzable targets
pub struct TargetRegistry {
    targets: Vec<Box<dyn Campaigner>>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
        }
    }

    /// Registry holding the bundled reference subjects for every target.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(ChunkTarget::new());
        registry.register(DaysBetweenTarget::new());
        registry.register(DumpContentTarget::new());
        registry.register(AverageTarget::new());
        registry.register(MedianTarget::new());
        registry
    }

    /// Register a target. A later registration for the same kind replaces
    /// the earlier one in place.
    pub fn register<T: FuzzTarget + 'static>(&mut self, target: T) {
        let kind = target.kind();
        let boxed: Box<dyn Campaigner> = Box::new(target);
        match self.targets.iter().position(|existing| existing.target() == kind) {
            Some(index) => self.targets[index] = boxed,
            None => self.targets.push(boxed),
        }
    }

    /// Get the campaign driver for a target
    pub fn get(&self, kind: TargetKind) -> Option<&dyn Campaigner> {
        self.targets
            .iter()
            .find(|target| target.target() == kind)
            .map(|target| target.as_ref())
    }

    /// Get all registered targets
    pub fn all_targets(&self) -> Vec<TargetKind> {
        self.targets.iter().map(|target| target.target()).collect()
    }
}

impl Default for TargetRegistry {
    fn default() -> Self {
        Self::new()
    }
}
