//! Data-driven game balance
//!
//! Every gameplay number the simulation consumes lives in [`Tuning`], so a
//! balance pass is a JSON edit rather than a rebuild. Defaults match the
//! shipped constants in [`crate::consts`].

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts;

/// Balance values for a run. Serializable and load-time validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Playfield width
    pub screen_width: f32,
    /// Playfield height
    pub screen_height: f32,
    /// Boat sprite width
    pub boat_width: f32,
    /// Boat sprite height
    pub boat_height: f32,
    /// Distance from the bottom edge to the boat's baseline
    pub boat_baseline: f32,
    /// Boat travel speed (units per sim-second)
    pub boat_speed: f32,
    /// Log sprite width
    pub log_width: f32,
    /// Log sprite height
    pub log_height: f32,
    /// Width of the scoring gap
    pub gap_width: f32,
    /// Height of the invisible gap sensor
    pub gap_sensor_height: f32,
    /// Seconds between spawn cycles
    pub spawn_period: f32,
    /// Seconds for a pair to travel top to bottom
    pub fall_duration: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: consts::SCREEN_WIDTH,
            screen_height: consts::SCREEN_HEIGHT,
            boat_width: consts::BOAT_WIDTH,
            boat_height: consts::BOAT_HEIGHT,
            boat_baseline: consts::BOAT_BASELINE,
            boat_speed: consts::BOAT_SPEED,
            log_width: consts::LOG_WIDTH,
            log_height: consts::LOG_HEIGHT,
            gap_width: consts::GAP_WIDTH,
            gap_sensor_height: consts::GAP_SENSOR_HEIGHT,
            spawn_period: consts::SPAWN_PERIOD,
            fall_duration: consts::FALL_DURATION,
        }
    }
}

/// Failure to produce a usable tuning at startup
#[derive(Debug)]
pub enum TuningError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(&'static str),
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Io(e) => write!(f, "tuning file unreadable: {e}"),
            TuningError::Parse(e) => write!(f, "tuning file malformed: {e}"),
            TuningError::Invalid(reason) => write!(f, "tuning rejected: {reason}"),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Io(e) => Some(e),
            TuningError::Parse(e) => Some(e),
            TuningError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for TuningError {
    fn from(e: std::io::Error) -> Self {
        TuningError::Io(e)
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}

impl Tuning {
    /// Smallest legal gap center X
    pub fn min_gap_x(&self) -> f32 {
        self.gap_width / 2.0
    }

    /// Largest legal gap center X
    pub fn max_gap_x(&self) -> f32 {
        self.screen_width - self.gap_width / 2.0
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        if !(self.screen_width > 0.0 && self.screen_height > 0.0) {
            return Err(TuningError::Invalid("playfield dimensions must be positive"));
        }
        if !(self.gap_width > 0.0 && self.gap_width < self.screen_width) {
            return Err(TuningError::Invalid(
                "gap width must be positive and narrower than the playfield",
            ));
        }
        if !(self.boat_width > 0.0 && self.boat_width <= self.screen_width) {
            return Err(TuningError::Invalid("boat must fit in the channel"));
        }
        if !(self.boat_height > 0.0 && self.log_width > 0.0 && self.log_height > 0.0) {
            return Err(TuningError::Invalid("sprite dimensions must be positive"));
        }
        if !(self.boat_speed > 0.0) {
            return Err(TuningError::Invalid("boat speed must be positive"));
        }
        if !(self.spawn_period > 0.0 && self.fall_duration > 0.0) {
            return Err(TuningError::Invalid("timings must be positive"));
        }
        Ok(())
    }

    /// Load and validate a tuning file. Startup-fatal on failure; the caller
    /// decides whether to abort or fall back.
    pub fn load(path: &Path) -> Result<Self, TuningError> {
        let json = fs::read_to_string(path)?;
        let tuning: Tuning = serde_json::from_str(&json)?;
        tuning.validate()?;
        log::info!("loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Load from `path`, falling back to defaults when the file is absent
    /// or unusable
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(tuning) => tuning,
            Err(TuningError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("no tuning file at {}; using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("{e}; using default tuning");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), TuningError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("tuning saved to {}", path.display());
        Ok(())
    }
}
