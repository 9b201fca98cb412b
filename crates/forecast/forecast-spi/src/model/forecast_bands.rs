//! Deviation bands and anomaly flags

use serde::{Deserialize, Serialize};

/// Deviation track with its upper and lower bounds, index-aligned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastBands {
    pub deviation: Vec<f64>,
    pub ubound: Vec<f64>,
    pub lbound: Vec<f64>,
}

impl ForecastBands {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            deviation: Vec::with_capacity(capacity),
            ubound: Vec::with_capacity(capacity),
            lbound: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, deviation: f64, ubound: f64, lbound: f64) {
        self.deviation.push(deviation);
        self.ubound.push(ubound);
        self.lbound.push(lbound);
    }

    /// Concatenate a later band onto this one.
    pub fn append(&mut self, mut other: ForecastBands) {
        self.deviation.append(&mut other.deviation);
        self.ubound.append(&mut other.ubound);
        self.lbound.append(&mut other.lbound);
    }

    pub fn len(&self) -> usize {
        self.deviation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deviation.is_empty()
    }
}

/// Which side of the band an observation escaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnomalyKind {
    AboveUpper,
    BelowLower,
}

/// An observation outside its confidence band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    pub index: usize,
    pub value: f64,
    pub lower: f64,
    pub upper: f64,
    pub kind: AnomalyKind,
}
