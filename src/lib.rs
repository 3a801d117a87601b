//! Armfit Web - rep counting and form feedback for upper-body exercises
//!
//! The browser runs the camera, MediaPipe Pose, drawing, and audio; this
//! module owns the per-frame analysis: joint angles, posture checks, the
//! debounced rep state machine, and rate-limited feedback. JS creates one
//! `ExerciseSession` per workout and calls `process` per frame.

pub mod bridge;
pub mod exercise;

use wasm_bindgen::prelude::*;

pub use bridge::{ExerciseSession, FrameResult};
pub use exercise::{
    Cue, Exercise, ExerciseConfig, FailureReason, FormIssue, RepEvent, RepPhase, RepTracker,
    StatusTier,
};

/// Called automatically when the WASM module loads.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
