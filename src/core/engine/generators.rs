//! Input generators shared by the target engines.
//!
//! Every generator is a pure function of the random source it is handed; none
//! of them keep state between calls.

use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::Rng;

use crate::types::NoiseValue;

pub const CHUNK_MAX_LEN: usize = 40;
pub const CHUNK_ELEMENT_BOUND: i64 = 1000;
pub const DATE_YEARS: (i32, i32) = (1990, 2030);
pub const DATE_MAX_OFFSET_DAYS: i64 = 1000;
pub const TEXT_MAX_LEN: usize = 2048;
pub const NOISE_MAX_LEN: usize = 20;
pub const NOISE_TOKEN: &str = "noise";

#[derive(Debug, Clone, PartialEq)]
pub struct ChunkInput {
    pub data: Vec<i64>,
    pub size: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatePair {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextPayload {
    pub content: String,
    pub path: PathBuf,
}

/// Integer sequence plus a chunk size drawn from `{0, -1, 1..=max(1, len)}`.
pub fn chunk_input<R: Rng + ?Sized>(rng: &mut R) -> ChunkInput {
    let len = rng.gen_range(0..=CHUNK_MAX_LEN);
    let data = (0..len)
        .map(|_| rng.gen_range(-CHUNK_ELEMENT_BOUND..=CHUNK_ELEMENT_BOUND))
        .collect();
    let positive = rng.gen_range(1..=len.max(1)) as i64;
    let size = match rng.gen_range(0..3) {
        0 => 0,
        1 => -1,
        _ => positive,
    };
    ChunkInput { data, size }
}

/// Start timestamp with day capped at 28 (valid in every month) and an end
/// timestamp up to 1000 days before or after it.
pub fn date_pair<R: Rng + ?Sized>(rng: &mut R) -> DatePair {
    let year = rng.gen_range(DATE_YEARS.0..=DATE_YEARS.1);
    let month = rng.gen_range(1..=12);
    let day = rng.gen_range(1..=28);
    let hour = rng.gen_range(0..=23);
    let minute = rng.gen_range(0..=59);

    let start = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .unwrap_or_default();

    let delta = rng.gen_range(-DATE_MAX_OFFSET_DAYS..=DATE_MAX_OFFSET_DAYS);
    let end = start
        .checked_add_signed(Duration::days(delta))
        .unwrap_or(start);

    DatePair { start, end }
}

/// Printable ASCII text and a destination inside `dir`. `seq` keeps paths
/// unique within one campaign.
pub fn text_payload<R: Rng + ?Sized>(rng: &mut R, dir: &Path, seq: usize) -> TextPayload {
    let len = rng.gen_range(0..=TEXT_MAX_LEN);
    let content: String = (0..len)
        .map(|_| char::from(rng.gen_range(32u8..=126)))
        .collect();
    let tag = rng.gen_range(0..=999_999u32);
    let path = dir.join(format!("fuzz-{seq:04}-{tag:06}.txt"));
    TextPayload { content, path }
}

/// Up to 20 elements picked from one set of options drawn per payload: a
/// single integer, a single float and the three junk values. Repeated
/// numbers within a payload are therefore the norm.
pub fn numeric_noise<R: Rng + ?Sized>(rng: &mut R) -> Vec<NoiseValue> {
    let int = rng.gen_range(-1000..=1000);
    let unit: f64 = rng.gen_range(0.0..1.0);
    let scale = rng.gen_range(-10i32..=10);
    let options = [
        NoiseValue::Int(int),
        NoiseValue::Float(unit * f64::from(scale)),
        NoiseValue::EmptyString,
        NoiseValue::Absent,
        NoiseValue::Token(NOISE_TOKEN.to_string()),
    ];

    let len = rng.gen_range(0..=NOISE_MAX_LEN);
    (0..len)
        .map(|_| options[rng.gen_range(0..options.len())].clone())
        .collect()
}
