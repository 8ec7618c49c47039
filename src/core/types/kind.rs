use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// The targets known to the harness, in the order campaigns run.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TargetKind {
    MakeChunks,
    DaysBetween,
    DumpContent,
    Average,
    Median,
}

impl TargetKind {
    /// Iterations used when neither config nor CLI overrides the count.
    /// Content dumps touch the filesystem, so they run fewer trials.
    pub fn default_iterations(self) -> usize {
        match self {
            TargetKind::DumpContent => 50,
            _ => 200,
        }
    }

    /// Short description of the generator's output domain.
    pub fn domain(self) -> &'static str {
        match self {
            TargetKind::MakeChunks => "ints[0..=40] in [-1000, 1000], size in {0, -1, 1..=max(1, len)}",
            TargetKind::DaysBetween => "start 1990..=2030 (day <= 28), end = start +/- 1000 days",
            TargetKind::DumpContent => "printable ASCII, length 0..=2048, unique path per trial",
            TargetKind::Average | TargetKind::Median => {
                "0..=20 of int | float | \"\" | null | \"noise\""
            }
        }
    }
}
