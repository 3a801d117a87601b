//! Frame-synchronous rep-counting core
//!
//! Everything in here is pure computation over one frame's landmarks and
//! runs identically on the host and in WASM; only `bridge` knows about JS.

pub mod angles;
pub mod config;
pub mod feedback;
pub mod form;
pub mod pose;
pub mod rep_machine;
pub mod smoothing;

pub use angles::joint_angle;
pub use config::{ConfigError, Direction, Exercise, ExerciseConfig};
pub use feedback::{Cue, CooldownTable, Feedback, FeedbackEmitter, StatusTier};
pub use form::{check_form, FormIssue};
pub use pose::{measured_angle, Landmark, UpperBody, LANDMARK_COUNT};
pub use rep_machine::{FailureReason, RepEvent, RepPhase, RepTracker};
pub use smoothing::AngleSmoother;
