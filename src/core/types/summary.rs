use serde::Serialize;

use crate::types::{Finding, TargetKind};

/// All findings from the trials run against one target. Sealed by the runner
/// once the last iteration completes.
#[derive(Debug, Clone, Serialize)]
pub struct Campaign {
    target: TargetKind,
    iterations: usize,
    findings: Vec<Finding>,
}

impl Campaign {
    pub(crate) fn seal(target: TargetKind, iterations: usize, findings: Vec<Finding>) -> Self {
        Self {
            target,
            iterations,
            findings,
        }
    }

    pub fn target(&self) -> TargetKind {
        self.target
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn has_findings(&self) -> bool {
        !self.findings.is_empty()
    }
}

/// Aggregate over every campaign of one execution.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    seed: u64,
    campaigns: Vec<Campaign>,
    total_findings: usize,
}

impl RunSummary {
    pub(crate) fn new(seed: u64, campaigns: Vec<Campaign>) -> Self {
        let total_findings = campaigns.iter().map(|c| c.findings.len()).sum();
        Self {
            seed,
            campaigns,
            total_findings,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn campaigns(&self) -> &[Campaign] {
        &self.campaigns
    }

    pub fn total_findings(&self) -> usize {
        self.total_findings
    }

    /// Every finding, campaign by campaign, in discovery order.
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.campaigns.iter().flat_map(|c| c.findings.iter())
    }
}
