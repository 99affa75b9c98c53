//! Synthesis configuration.
//!
//! The step budget and playback rate are explicit per-call values, not
//! globals; every generation call receives its own `Config`.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Discrete step budget. Linear mode partitions `[0, total_steps]`
    /// across frames; the clip always spans the full budget.
    pub total_steps: u32,
    /// Playback rate in Hz. One step is `1/frame_rate` seconds.
    pub frame_rate: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            total_steps: 255,
            frame_rate: 60.0,
        }
    }
}

impl Config {
    /// Clip length in seconds (`total_steps / frame_rate`; ~4.25 s at defaults).
    pub fn clip_duration(&self) -> f32 {
        self.total_steps as f32 / self.frame_rate
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.total_steps == 0 || !self.frame_rate.is_finite() || self.frame_rate <= 0.0 {
            return Err(ValidationError::InvalidConfig);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_and_duration() {
        let cfg = Config::default();
        assert_eq!(cfg.total_steps, 255);
        assert!((cfg.clip_duration() - 4.25).abs() < 1e-6);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_values() {
        assert!(Config {
            total_steps: 0,
            frame_rate: 60.0
        }
        .validate()
        .is_err());
        assert!(Config {
            total_steps: 255,
            frame_rate: 0.0
        }
        .validate()
        .is_err());
        assert!(Config {
            total_steps: 255,
            frame_rate: f32::NAN
        }
        .validate()
        .is_err());
    }
}
