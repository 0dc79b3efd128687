use crate::error::DashError;
use chrono::{Duration, Local, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const DEFAULT_DAYS: usize = 30;
pub const MAX_DAYS: usize = 3650;

pub const SCORE_RANGE: RangeInclusive<f64> = 55.0..=95.0;
pub const INCIDENT_RANGE: RangeInclusive<u32> = 0..=12;
pub const ACTIVITY_RANGE: RangeInclusive<f64> = 35.0..=95.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampleRow {
    pub date: NaiveDate,
    pub ergonomic_score: f64,
    pub posture_incidents: u32,
    pub activity_level: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleParams {
    days: usize,
    end: NaiveDate,
}

impl SampleParams {
    pub fn new(days: usize, end: NaiveDate) -> Result<Self, DashError> {
        if days == 0 || days > MAX_DAYS {
            return Err(DashError::InvalidDays(days));
        }
        Ok(Self { days, end })
    }

    /// Last `days` days ending today.
    pub fn last_days(days: usize) -> Result<Self, DashError> {
        Self::new(days, Local::now().date_naive())
    }

    pub fn days(&self) -> usize {
        self.days
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

impl Default for SampleParams {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            end: Local::now().date_naive(),
        }
    }
}

/// Synthetic per-day statistics, oldest row first. Immutable once built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampleTable {
    rows: Vec<SampleRow>,
}

impl SampleTable {
    pub fn generate() -> Self {
        generate_sample_table(SampleParams::default(), &mut rand::thread_rng())
    }

    pub fn generate_seeded(params: SampleParams, seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => generate_sample_table(params, &mut StdRng::seed_from_u64(seed)),
            None => generate_sample_table(params, &mut rand::thread_rng()),
        }
    }

    pub fn from_rows(rows: Vec<SampleRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[SampleRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn latest(&self) -> Option<&SampleRow> {
        self.rows.last()
    }
}

pub fn generate_sample_table<R: Rng>(params: SampleParams, rng: &mut R) -> SampleTable {
    let start = params.end - Duration::days(params.days as i64 - 1);
    let rows = (0..params.days)
        .map(|offset| SampleRow {
            date: start + Duration::days(offset as i64),
            ergonomic_score: one_decimal(rng.gen_range(SCORE_RANGE)),
            posture_incidents: rng.gen_range(INCIDENT_RANGE),
            activity_level: one_decimal(rng.gen_range(ACTIVITY_RANGE)),
        })
        .collect();
    SampleTable { rows }
}

fn one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
