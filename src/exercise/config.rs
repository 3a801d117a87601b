//! Per-exercise threshold, direction, and tolerance configuration
//!
//! The three exercises share one state machine; everything that differs
//! between them lives in an `ExerciseConfig`. Presets carry the tuned
//! constants; `validate` runs once at session start so a broken config
//! fails fast instead of misbehaving per frame.

use thiserror::Error;

use super::feedback::{CUE_COUNT, DEFAULT_CUE_WINDOWS};

/// The supported upper-body exercises.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exercise {
    BicepCurl,
    LateralRaise,
    OverheadPress,
}

impl Exercise {
    pub fn name(&self) -> &'static str {
        match self {
            Exercise::BicepCurl => "bicep_curl",
            Exercise::LateralRaise => "lateral_raise",
            Exercise::OverheadPress => "overhead_press",
        }
    }

    pub fn from_name(name: &str) -> Option<Exercise> {
        match name {
            "bicep_curl" => Some(Exercise::BicepCurl),
            "lateral_raise" => Some(Exercise::LateralRaise),
            "overhead_press" => Some(Exercise::OverheadPress),
            _ => None,
        }
    }
}

/// Which way the working angle moves during the lift.
///
/// The press and raise extend toward larger angles; the curl contracts
/// toward smaller ones. All threshold comparisons in the state machine
/// are direction-relative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Increasing,
    Decreasing,
}

/// Full parameter set for one exercise session.
#[derive(Clone, Debug)]
pub struct ExerciseConfig {
    pub exercise: Exercise,
    pub direction: Direction,

    /// Crossing this (moving in `direction`) leaves Down and starts a rep.
    pub start_angle: f32,
    /// Crossing this reaches full range and enters the hold.
    pub full_angle: f32,
    /// Crossing this (moving back) closes the cycle at the bottom.
    pub return_angle: f32,
    /// Past this the motion has overshot the safe range; the attempt is
    /// flagged but not aborted. `None` disables the check.
    pub overshoot_angle: Option<f32>,
    /// Minimum time to stay at the top before the descent counts.
    pub min_hold_secs: f32,

    /// Curl: max horizontal elbow-to-shoulder drift (normalized units).
    pub elbow_drift_limit: f32,
    /// Raise: how far the elbow may rise above the shoulder line.
    pub elbow_rise_limit: f32,
    /// Press: wrist separation must be at least this fraction of
    /// shoulder separation.
    pub min_grip_ratio: f32,
    /// Press: max horizontal wrist-to-elbow drift.
    pub wrist_drift_limit: f32,

    /// Whether the front end should offer background music for this
    /// exercise. Explicit capability flag, uniform across exercises.
    pub background_music: bool,

    /// Per-cue cooldown windows in seconds, indexed like `Cue::index`
    /// (success, too_high, bad_form, try_again).
    pub cue_cooldowns: [f64; CUE_COUNT],
}

impl ExerciseConfig {
    pub fn preset(exercise: Exercise) -> Self {
        match exercise {
            Exercise::BicepCurl => Self::bicep_curl(),
            Exercise::LateralRaise => Self::lateral_raise(),
            Exercise::OverheadPress => Self::overhead_press(),
        }
    }

    /// Elbow flexion curl: the angle closes as the weight comes up.
    pub fn bicep_curl() -> Self {
        Self {
            exercise: Exercise::BicepCurl,
            direction: Direction::Decreasing,
            start_angle: 120.0,
            full_angle: 60.0,
            return_angle: 160.0,
            overshoot_angle: Some(30.0),
            min_hold_secs: 0.4,
            elbow_drift_limit: 0.15,
            elbow_rise_limit: 0.0,
            min_grip_ratio: 0.0,
            wrist_drift_limit: 0.0,
            background_music: false,
            cue_cooldowns: DEFAULT_CUE_WINDOWS,
        }
    }

    /// Arm abduction at the shoulder, up to horizontal.
    pub fn lateral_raise() -> Self {
        Self {
            exercise: Exercise::LateralRaise,
            direction: Direction::Increasing,
            start_angle: 45.0,
            full_angle: 90.0,
            return_angle: 20.0,
            overshoot_angle: Some(120.0),
            min_hold_secs: 0.8,
            elbow_drift_limit: 0.0,
            elbow_rise_limit: 0.05,
            min_grip_ratio: 0.0,
            wrist_drift_limit: 0.0,
            background_music: true,
            cue_cooldowns: DEFAULT_CUE_WINDOWS,
        }
    }

    /// Elbow extension pressing overhead.
    pub fn overhead_press() -> Self {
        Self {
            exercise: Exercise::OverheadPress,
            direction: Direction::Increasing,
            start_angle: 115.0,
            full_angle: 150.0,
            return_angle: 95.0,
            overshoot_angle: None,
            min_hold_secs: 0.5,
            elbow_drift_limit: 0.0,
            elbow_rise_limit: 0.0,
            min_grip_ratio: 0.7,
            wrist_drift_limit: 0.25,
            background_music: true,
            cue_cooldowns: DEFAULT_CUE_WINDOWS,
        }
    }

    /// Check internal consistency. Called once at session construction;
    /// a failure here is a programming error, not a runtime condition.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let angles = [
            ("start_angle", self.start_angle),
            ("full_angle", self.full_angle),
            ("return_angle", self.return_angle),
        ];
        for (name, value) in angles {
            if !(0.0..=180.0).contains(&value) {
                return Err(ConfigError::AngleOutOfRange { name, value });
            }
        }
        if let Some(limit) = self.overshoot_angle {
            if !(0.0..=180.0).contains(&limit) {
                return Err(ConfigError::AngleOutOfRange {
                    name: "overshoot_angle",
                    value: limit,
                });
            }
        }

        let ordered = match self.direction {
            Direction::Increasing => {
                self.return_angle <= self.start_angle
                    && self.start_angle < self.full_angle
                    && self.overshoot_angle.map_or(true, |m| m > self.full_angle)
            }
            Direction::Decreasing => {
                self.return_angle >= self.start_angle
                    && self.start_angle > self.full_angle
                    && self.overshoot_angle.map_or(true, |m| m < self.full_angle)
            }
        };
        if !ordered {
            return Err(ConfigError::ThresholdOrdering);
        }

        if !self.min_hold_secs.is_finite() || self.min_hold_secs <= 0.0 {
            return Err(ConfigError::InvalidHold(self.min_hold_secs));
        }

        let tolerances = [
            self.elbow_drift_limit,
            self.elbow_rise_limit,
            self.wrist_drift_limit,
        ];
        if tolerances.iter().any(|t| *t < 0.0) || !(0.0..=1.0).contains(&self.min_grip_ratio) {
            return Err(ConfigError::InvalidTolerance);
        }

        for window in self.cue_cooldowns {
            if !window.is_finite() || window <= 0.0 {
                return Err(ConfigError::InvalidCooldown(window));
            }
        }

        Ok(())
    }
}

/// Configuration problems caught at session start.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("angle threshold out of [0, 180]: {name} = {value}")]
    AngleOutOfRange { name: &'static str, value: f32 },

    #[error("thresholds do not match the direction of travel")]
    ThresholdOrdering,

    #[error("minimum hold must be a positive duration, got {0}")]
    InvalidHold(f32),

    #[error("form tolerance out of range")]
    InvalidTolerance,

    #[error("cue cooldown must be a positive duration, got {0}")]
    InvalidCooldown(f64),

    #[error("unknown exercise: {0:?}")]
    UnknownExercise(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_presets_validate() {
        for ex in [
            Exercise::BicepCurl,
            Exercise::LateralRaise,
            Exercise::OverheadPress,
        ] {
            let config = ExerciseConfig::preset(ex);
            assert!(config.validate().is_ok(), "{:?} preset invalid", ex);
            assert_eq!(Exercise::from_name(ex.name()), Some(ex));
        }
    }

    #[test]
    fn rejects_threshold_order_against_direction() {
        let mut config = ExerciseConfig::overhead_press();
        // start above full makes no sense for an increasing lift
        config.start_angle = 160.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ThresholdOrdering)
        ));
    }

    #[test]
    fn rejects_out_of_range_angle() {
        let mut config = ExerciseConfig::bicep_curl();
        config.return_angle = 200.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::AngleOutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_non_positive_hold() {
        let mut config = ExerciseConfig::lateral_raise();
        config.min_hold_secs = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidHold(_))));
    }

    #[test]
    fn rejects_overshoot_inside_working_range() {
        let mut config = ExerciseConfig::lateral_raise();
        config.overshoot_angle = Some(80.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ThresholdOrdering)
        ));
    }

    #[test]
    fn rejects_non_positive_cue_cooldown() {
        let mut config = ExerciseConfig::overhead_press();
        config.cue_cooldowns[0] = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidCooldown(_))
        ));
    }

    #[test]
    fn unknown_exercise_name_is_rejected() {
        assert_eq!(Exercise::from_name("deadlift"), None);
    }
}
