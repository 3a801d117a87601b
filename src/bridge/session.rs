//! Per-session state bundle exposed to JavaScript
//!
//! One `ExerciseSession` per active exercise. The JS layer owns the
//! camera, MediaPipe, drawing, and audio playback; it calls `process`
//! once per analyzed frame with the landmark array and a monotonic
//! timestamp in seconds (e.g. `performance.now() / 1000`), and overlays
//! whatever comes back. Sessions own all of their state - there are no
//! module globals, so independent sessions cannot leak into each other.

use wasm_bindgen::prelude::*;

use crate::exercise::config::{ConfigError, Exercise, ExerciseConfig};
use crate::exercise::feedback::FeedbackEmitter;
use crate::exercise::form::check_form;
use crate::exercise::pose::{measured_angle, UpperBody};
use crate::exercise::rep_machine::{RepEvent, RepTracker};
use crate::exercise::smoothing::AngleSmoother;

use super::landmarks::decode_frame;

/// Everything the front end needs to render one processed frame.
#[wasm_bindgen]
pub struct FrameResult {
    /// Total valid reps this session.
    pub count: u32,
    /// Smoothed working angle in degrees (for the overlay readout).
    pub angle: f32,
    #[wasm_bindgen(getter_with_clone)]
    pub feedback: String,
    /// Status tier: "good" | "warning" | "error".
    #[wasm_bindgen(getter_with_clone)]
    pub status: String,
    /// Audio cue to play this frame, if any (already rate-limited).
    #[wasm_bindgen(getter_with_clone)]
    pub cue: Option<String>,
    /// Current machine phase: "down" | "lifting" | "hold" | "lowering".
    #[wasm_bindgen(getter_with_clone)]
    pub phase: String,
}

#[wasm_bindgen]
pub struct ExerciseSession {
    tracker: RepTracker,
    smoother: AngleSmoother,
    emitter: FeedbackEmitter,
}

#[wasm_bindgen]
impl ExerciseSession {
    /// Create a session for `exercise` ("bicep_curl", "lateral_raise",
    /// or "overhead_press"). Configuration is validated here, once -
    /// a bad config fails construction, never a frame.
    #[wasm_bindgen(constructor)]
    pub fn new(exercise: &str) -> Result<ExerciseSession, JsValue> {
        let kind = Exercise::from_name(exercise).ok_or_else(|| {
            JsValue::from_str(&ConfigError::UnknownExercise(exercise.to_string()).to_string())
        })?;
        let config = ExerciseConfig::preset(kind);
        Self::with_config(config).map_err(|e| JsValue::from_str(&e))
    }

    /// Process one frame. Total: every call returns a usable result, and
    /// a frame without a pose leaves the count and phase untouched.
    pub fn process(&mut self, data: &[f32], timestamp: f64) -> FrameResult {
        let (event, angle) = match decode_frame(data) {
            None => (RepEvent::NoPose, 0.0),
            Some(landmarks) => {
                let body = UpperBody::from_landmarks(&landmarks);
                let config = self.tracker.config();
                let raw = measured_angle(config.exercise, &body);
                let angle = self.smoother.apply(timestamp, raw);
                let issue = check_form(config, &body);
                (self.tracker.update(angle, issue, timestamp), angle)
            }
        };

        let feedback = self.emitter.render(&event, timestamp);
        FrameResult {
            count: self.tracker.count(),
            angle,
            feedback: feedback.text,
            status: feedback.tier.name().to_string(),
            cue: feedback.cue.map(|c| c.name().to_string()),
            phase: self.tracker.phase().name().to_string(),
        }
    }

    /// Zero the counter and drop all transient state: phase, attempt
    /// flags, hold timer, cue cooldowns, angle filter history.
    pub fn reset(&mut self) {
        self.tracker.reset();
        self.smoother.reset();
        self.emitter.reset();
    }

    pub fn rep_count(&self) -> u32 {
        self.tracker.count()
    }

    pub fn phase_name(&self) -> String {
        self.tracker.phase().name().to_string()
    }

    pub fn exercise_name(&self) -> String {
        self.tracker.config().exercise.name().to_string()
    }

    /// Whether the front end should offer background music for this
    /// exercise.
    pub fn wants_background_music(&self) -> bool {
        self.tracker.config().background_music
    }
}

impl ExerciseSession {
    /// Native constructor, also used by the wasm one.
    pub fn with_config(config: ExerciseConfig) -> Result<ExerciseSession, String> {
        config.validate().map_err(|e| e.to_string())?;
        let emitter = FeedbackEmitter::new(&config);
        Ok(ExerciseSession {
            tracker: RepTracker::new(config),
            smoother: AngleSmoother::for_arm_tracking(),
            emitter,
        })
    }
}
