//! Feedback rendering and rate-limited audio cues
//!
//! Translates each frame's `RepEvent` into overlay text, a status tier
//! for skeleton coloring, and an optional named audio cue. Cues are
//! debounced through a fixed-key cooldown table so a violation held over
//! many frames plays once, not thirty times a second. The emitter never
//! touches rep state.

use super::config::{Exercise, ExerciseConfig};
use super::rep_machine::{FailureReason, RepEvent};

/// Coarse severity tier for downstream highlighting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTier {
    Good,
    Warning,
    Error,
}

impl StatusTier {
    pub fn name(&self) -> &'static str {
        match self {
            StatusTier::Good => "good",
            StatusTier::Warning => "warning",
            StatusTier::Error => "error",
        }
    }
}

/// Named audio cues the front end knows how to play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Success,
    TooHigh,
    BadForm,
    TryAgain,
}

pub const CUE_COUNT: usize = 4;

/// Default per-cue cooldown windows in seconds, indexed like
/// `Cue::index`: success, too_high, bad_form, try_again.
pub const DEFAULT_CUE_WINDOWS: [f64; CUE_COUNT] = [0.5, 1.5, 1.5, 1.0];

impl Cue {
    pub fn name(&self) -> &'static str {
        match self {
            Cue::Success => "success",
            Cue::TooHigh => "too_high",
            Cue::BadForm => "bad_form",
            Cue::TryAgain => "try_again",
        }
    }

    fn index(&self) -> usize {
        match self {
            Cue::Success => 0,
            Cue::TooHigh => 1,
            Cue::BadForm => 2,
            Cue::TryAgain => 3,
        }
    }
}

/// Last-fired timestamp per cue, with a per-cue cooldown window.
pub struct CooldownTable {
    last_fired: [Option<f64>; CUE_COUNT],
    window_secs: [f64; CUE_COUNT],
}

impl CooldownTable {
    pub fn with_windows(window_secs: [f64; CUE_COUNT]) -> Self {
        Self {
            last_fired: [None; CUE_COUNT],
            window_secs,
        }
    }

    /// Returns true and records the timestamp if the cue may fire now;
    /// false while the same cue is still inside its window.
    pub fn try_fire(&mut self, cue: Cue, now: f64) -> bool {
        let idx = cue.index();
        let allowed = match self.last_fired[idx] {
            Some(last) => now - last > self.window_secs[idx],
            None => true,
        };
        if allowed {
            self.last_fired[idx] = Some(now);
        }
        allowed
    }

    pub fn clear(&mut self) {
        self.last_fired = [None; CUE_COUNT];
    }
}

/// What the caller overlays/plays for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Feedback {
    pub text: String,
    pub tier: StatusTier,
    /// Cue to play this frame, already rate-limited.
    pub cue: Option<Cue>,
}

/// Stateful emitter for one session.
pub struct FeedbackEmitter {
    exercise: Exercise,
    cooldowns: CooldownTable,
}

impl FeedbackEmitter {
    pub fn new(config: &ExerciseConfig) -> Self {
        Self {
            exercise: config.exercise,
            cooldowns: CooldownTable::with_windows(config.cue_cooldowns),
        }
    }

    pub fn reset(&mut self) {
        self.cooldowns.clear();
    }

    fn lift_phrase(&self) -> &'static str {
        match self.exercise {
            Exercise::BicepCurl => "Curling...",
            Exercise::LateralRaise => "Raising arms...",
            Exercise::OverheadPress => "Pushing...",
        }
    }

    fn higher_phrase(&self) -> &'static str {
        match self.exercise {
            Exercise::BicepCurl => "Curl higher!",
            Exercise::LateralRaise => "Raise higher!",
            Exercise::OverheadPress => "Push higher!",
        }
    }

    /// Render one frame's event. `now` is the frame timestamp used for
    /// cue rate limiting.
    pub fn render(&mut self, event: &RepEvent, now: f64) -> Feedback {
        let (text, tier, wanted): (String, StatusTier, Option<Cue>) = match event {
            RepEvent::NoPose => (
                "No pose detected - stand in view".into(),
                StatusTier::Good,
                None,
            ),
            RepEvent::FormError(issue) => (
                format!("Fix form: {}", issue.message()),
                StatusTier::Error,
                Some(Cue::BadForm),
            ),
            RepEvent::Overshoot => (
                "Too high! Ease off".into(),
                StatusTier::Warning,
                Some(Cue::TooHigh),
            ),
            RepEvent::Started | RepEvent::Lifting => {
                (self.lift_phrase().into(), StatusTier::Good, None)
            }
            RepEvent::ReachedTop => ("Top position - hold!".into(), StatusTier::Good, None),
            RepEvent::Holding { elapsed, required } => (
                format!("Hold: {:.1}/{:.1}s", elapsed, required),
                StatusTier::Good,
                None,
            ),
            RepEvent::LoweringStarted => ("Lower slowly".into(), StatusTier::Good, None),
            RepEvent::LoweringRegressed => (
                "Complete the lowering!".into(),
                StatusTier::Warning,
                None,
            ),
            RepEvent::RepCounted(count) => (
                format!("Perfect! Rep {}", count),
                StatusTier::Good,
                Some(Cue::Success),
            ),
            RepEvent::Discarded(reason) => (
                format!("Failed: {}", reason.label()),
                StatusTier::Warning,
                None,
            ),
            RepEvent::AbortedShallow => (
                self.higher_phrase().into(),
                StatusTier::Warning,
                Some(Cue::TryAgain),
            ),
            RepEvent::Idle => ("Ready".into(), StatusTier::Good, None),
        };

        let cue = wanted.filter(|c| self.cooldowns.try_fire(*c, now));
        Feedback { text, tier, cue }
    }
}
