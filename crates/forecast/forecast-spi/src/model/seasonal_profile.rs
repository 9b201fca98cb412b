//! Per-phase seasonal offsets

use serde::{Deserialize, Serialize};

use crate::error::ForecastError;

/// Additive seasonal offsets keyed by phase.
///
/// The phase of an absolute series index `i` is `i % season_length()`. Each
/// phase holds only its latest value; updates overwrite in place.
/// Deserialization rejects an empty profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSeasonalProfile")]
pub struct SeasonalProfile {
    offsets: Vec<f64>,
}

#[derive(Deserialize)]
struct RawSeasonalProfile {
    offsets: Vec<f64>,
}

impl TryFrom<RawSeasonalProfile> for SeasonalProfile {
    type Error = ForecastError;

    fn try_from(raw: RawSeasonalProfile) -> Result<Self, Self::Error> {
        if raw.offsets.is_empty() {
            return Err(ForecastError::invalid_parameter(
                "offsets",
                "seasonal profile needs at least one phase",
            ));
        }
        Ok(Self::from_offsets(raw.offsets))
    }
}

impl SeasonalProfile {
    /// Build a profile from one offset per phase.
    ///
    /// `offsets` must be non-empty; callers validate the season length first.
    pub fn from_offsets(offsets: Vec<f64>) -> Self {
        Self { offsets }
    }

    pub fn season_length(&self) -> usize {
        self.offsets.len()
    }

    /// Phase of an absolute series index.
    pub fn phase(&self, index: usize) -> usize {
        index % self.offsets.len()
    }

    /// Offset for the phase of an absolute series index.
    pub fn get(&self, index: usize) -> f64 {
        self.offsets[self.phase(index)]
    }

    /// Overwrite the offset for the phase of an absolute series index.
    pub fn set(&mut self, index: usize, value: f64) {
        let phase = self.phase(index);
        self.offsets[phase] = value;
    }

    pub fn offsets(&self) -> &[f64] {
        &self.offsets
    }

    pub fn into_offsets(self) -> Vec<f64> {
        self.offsets
    }
}
