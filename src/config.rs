//! Simulation configuration.
//!
//! All fields have defaults, so a partial JSON document (or `{}`) is a
//! valid configuration.

use serde::{Deserialize, Serialize};

/// Parameters shared by the quantum-based policies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Time quantum (ticks) for Round Robin and the three-level Queue1.
    pub quantum: u32,
    /// Priority thresholds partitioning processes into three-level bands.
    pub bands: BandThresholds,
}

/// Priority cut-offs of the three-level policy.
///
/// `priority <= high_max` → band 1, `priority >= low_min` → band 3,
/// anything in between → band 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandThresholds {
    pub high_max: u32,
    pub low_min: u32,
}

/// One of the three priority partitions of the three-level policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    /// Round Robin band (highest priority).
    High,
    /// FCFS band.
    Middle,
    /// Holding band, drained into `Middle` when it is empty.
    Low,
}

impl SimulationConfig {
    pub const DEFAULT_QUANTUM: u32 = 2;

    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the time quantum.
    pub fn with_quantum(mut self, quantum: u32) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the band thresholds.
    pub fn with_bands(mut self, bands: BandThresholds) -> Self {
        self.bands = bands;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            quantum: Self::DEFAULT_QUANTUM,
            bands: BandThresholds::default(),
        }
    }
}

impl BandThresholds {
    pub fn new(high_max: u32, low_min: u32) -> Self {
        Self { high_max, low_min }
    }

    /// Band a process with `priority` is admitted to.
    pub fn band_of(&self, priority: u32) -> Band {
        if priority <= self.high_max {
            Band::High
        } else if priority >= self.low_min {
            Band::Low
        } else {
            Band::Middle
        }
    }
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            high_max: 2,
            low_min: 5,
        }
    }
}
