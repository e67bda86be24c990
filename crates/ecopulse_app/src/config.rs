//! Application configuration

use crate::error::{EcoPulseError, Result};
use ecopulse_animation::{DEFAULT_COUNTER_DURATION_MS, DEFAULT_VISIBILITY_THRESHOLD};
use ecopulse_scene::PARTICLE_COUNT;
use serde::{Deserialize, Serialize};

/// Tunable knobs for the dashboard
///
/// The defaults match the shipped dashboard; embedders can deserialize a
/// partial override (every field has a default) and must call
/// [`validate`](AppConfig::validate) before handing the config to the
/// application context.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Hero particle field population
    pub particle_count: usize,
    /// Stat counter count-up duration in milliseconds
    pub counter_duration_ms: f32,
    /// Visible fraction that triggers a stat card's count-up
    pub visibility_threshold: f32,
    /// Seed for the hero particle field
    pub particle_seed: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            counter_duration_ms: DEFAULT_COUNTER_DURATION_MS,
            visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
            particle_seed: 0x6563_6f70,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        if self.particle_count == 0 {
            return Err(EcoPulseError::Config(
                "particle_count must be at least 1".into(),
            ));
        }
        if !self.counter_duration_ms.is_finite() || self.counter_duration_ms <= 0.0 {
            return Err(EcoPulseError::Config(format!(
                "counter_duration_ms must be a positive number, got {}",
                self.counter_duration_ms
            )));
        }
        if !(0.0..=1.0).contains(&self.visibility_threshold) {
            return Err(EcoPulseError::Config(format!(
                "visibility_threshold must be in [0, 1], got {}",
                self.visibility_threshold
            )));
        }
        Ok(())
    }
}
