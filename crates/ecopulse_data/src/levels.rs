//! Severity labels for the scenario sliders
//!
//! Each pollution category grades a 0-100 slider value into one of four
//! bands, 25 points wide, with its own vocabulary.

use serde::{Deserialize, Serialize};

/// A pollution category with its own simulation section
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Air,
    Water,
    Light,
}

impl Category {
    /// All categories, in section order
    pub const ALL: [Category; 3] = [Category::Air, Category::Water, Category::Light];

    /// Severity vocabulary from mildest to worst
    pub fn severity_labels(&self) -> [&'static str; 4] {
        match self {
            Category::Air => ["Clean", "Moderate", "Unhealthy", "Hazardous"],
            Category::Water => ["Pure", "Moderate", "Contaminated", "Toxic"],
            Category::Light => ["Natural", "Low", "High", "Extreme"],
        }
    }

    /// Label for a slider value in 0-100
    ///
    /// Values land in 25-point bands; anything past 75 stays in the worst
    /// band, so out-of-range input saturates instead of panicking.
    pub fn severity_label(&self, value: u32) -> &'static str {
        let band = ((value / 25) as usize).min(3);
        self.severity_labels()[band]
    }
}
