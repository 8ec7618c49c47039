use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

use crate::core::engine::generators::{TextPayload, text_payload};
use crate::core::engine::rng::FuzzRng;
use crate::core::engine::traits::FuzzTarget;
use crate::core::recorder::record;
use crate::types::{Finding, TargetFault, TargetKind};

use super::subject;

pub type DumpFn = fn(&str, &Path) -> Result<u64, TargetFault>;

/// Scratch directory for one content-dump campaign. Removed, with everything
/// written into it, when the scope is dropped.
pub struct DumpScope {
    dir: TempDir,
    issued: Cell<usize>,
}

impl DumpScope {
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    fn next_seq(&self) -> usize {
        let seq = self.issued.get();
        self.issued.set(seq + 1);
        seq
    }
}

/// Fuzzes a write-and-report function: the reported size must match the size
/// of the file measured after the call.
pub struct DumpContentTarget {
    subject: DumpFn,
    root: Option<PathBuf>,
}

impl Default for DumpContentTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl DumpContentTarget {
    pub fn new() -> Self {
        Self::with_subject(subject::dump_content_into_file)
    }

    pub fn with_subject(subject: DumpFn) -> Self {
        Self {
            subject,
            root: None,
        }
    }

    /// Create campaign scratch directories under `root` instead of the
    /// system temp directory.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }
}

impl FuzzTarget for DumpContentTarget {
    type Scope = DumpScope;
    type Input = TextPayload;
    type Output = u64;

    fn kind(&self) -> TargetKind {
        TargetKind::DumpContent
    }

    fn fault_context(&self) -> &'static str {
        "write"
    }

    fn open_scope(&self) -> Result<DumpScope, TargetFault> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("oraclefuzz-dump-");
        let dir = match &self.root {
            Some(root) => builder.tempdir_in(root)?,
            None => builder.tempdir()?,
        };
        Ok(DumpScope {
            dir,
            issued: Cell::new(0),
        })
    }

    fn generate(&self, rng: &mut FuzzRng, scope: &DumpScope) -> TextPayload {
        text_payload(rng, scope.path(), scope.next_seq())
    }

    fn invoke(&self, input: &TextPayload) -> Result<u64, TargetFault> {
        (self.subject)(&input.content, &input.path)
    }

    fn check(
        &self,
        input: &TextPayload,
        reported: u64,
        findings: &mut Vec<Finding>,
    ) -> Result<(), TargetFault> {
        let actual = fs::metadata(&input.path)?.len();
        if reported != actual {
            record(
                findings,
                &self.name(),
                "reported size mismatch",
                json!({
                    "reported": reported,
                    "actual": actual,
                    "path": input.path.display().to_string(),
                }),
                None,
            );
        }
        Ok(())
    }

    fn fault_payload(&self, input: &TextPayload) -> Value {
        json!({
            "path": input.path.display().to_string(),
            "len": input.content.len(),
        })
    }
}
