//! Easing functions
//!
//! Time-to-value mappings used by timed animations. Input is normalized
//! progress in [0, 1]; output is the eased fraction of the animated range.

/// Easing function selection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    /// Quadratic ease-in (slow start)
    EaseIn,
    /// Quadratic ease-out (slow end)
    EaseOut,
    /// Quadratic ease-in-out
    EaseInOut,
    /// Exponential ease-out: `1 - 2^(-10t)`, used by the stat counters
    ExpoOut,
}

impl Easing {
    /// Apply the easing function to normalized progress
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::ExpoOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f32.powf(-10.0 * t)
                }
            }
        }
    }
}
