use serde_json::{Value, json};

use crate::core::engine::generators::{ChunkInput, chunk_input};
use crate::core::engine::rng::FuzzRng;
use crate::core::engine::traits::FuzzTarget;
use crate::core::recorder::record;
use crate::types::{Finding, TargetFault, TargetKind};

use super::subject;

pub type ChunkFn = fn(&[i64], i64) -> Result<Vec<Vec<i64>>, TargetFault>;

/// Fuzzes a chunking function: non-positive sizes must produce no chunks and
/// positive sizes must partition the input without loss or duplication.
pub struct ChunkTarget {
    subject: ChunkFn,
}

impl Default for ChunkTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl ChunkTarget {
    pub fn new() -> Self {
        Self::with_subject(subject::make_chunks)
    }

    pub fn with_subject(subject: ChunkFn) -> Self {
        Self { subject }
    }
}

impl FuzzTarget for ChunkTarget {
    type Scope = ();
    type Input = ChunkInput;
    type Output = Vec<Vec<i64>>;

    fn kind(&self) -> TargetKind {
        TargetKind::MakeChunks
    }

    fn fault_context(&self) -> &'static str {
        "chunking"
    }

    fn open_scope(&self) -> Result<(), TargetFault> {
        Ok(())
    }

    fn generate(&self, rng: &mut FuzzRng, _scope: &()) -> ChunkInput {
        chunk_input(rng)
    }

    fn invoke(&self, input: &ChunkInput) -> Result<Vec<Vec<i64>>, TargetFault> {
        (self.subject)(&input.data, input.size)
    }

    fn check(
        &self,
        input: &ChunkInput,
        chunks: Vec<Vec<i64>>,
        findings: &mut Vec<Finding>,
    ) -> Result<(), TargetFault> {
        if input.size <= 0 {
            if !chunks.is_empty() {
                record(
                    findings,
                    &self.name(),
                    "non-positive size not rejected",
                    json!({
                        "size": input.size,
                        "len": input.data.len(),
                        "result_len": chunks.len(),
                    }),
                    None,
                );
            }
            return Ok(());
        }

        let flattened: Vec<i64> = chunks.into_iter().flatten().collect();
        if flattened != input.data {
            record(
                findings,
                &self.name(),
                "reconstruction mismatch",
                json!({
                    "size": input.size,
                    "original_len": input.data.len(),
                    "flattened_len": flattened.len(),
                }),
                None,
            );
        }
        Ok(())
    }

    fn fault_payload(&self, input: &ChunkInput) -> Value {
        json!({ "size": input.size, "len": input.data.len() })
    }
}
