//! Rep-counting state machine
//!
//! One generic four-phase machine drives all three exercises; everything
//! exercise-specific comes from the `ExerciseConfig`. Per frame it takes
//! the measured angle, the form verdict, and the frame timestamp, mutates
//! its phase/flags, and reports what happened as a `RepEvent` for the
//! feedback layer.
//!
//! Counting invariant: the counter increments exactly once per completed
//! Down -> Lifting -> Hold -> Lowering -> Down cycle, and only when the
//! attempt was started, reached full range, and was never flagged.

use super::config::{Direction, ExerciseConfig};
use super::form::FormIssue;

/// Phase of the current rep cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepPhase {
    /// At the bottom, between reps.
    Down,
    /// Moving toward full range.
    Lifting,
    /// At full range, riding out the minimum hold.
    Hold,
    /// Coming back toward the bottom.
    Lowering,
}

impl RepPhase {
    pub fn name(&self) -> &'static str {
        match self {
            RepPhase::Down => "down",
            RepPhase::Lifting => "lifting",
            RepPhase::Hold => "hold",
            RepPhase::Lowering => "lowering",
        }
    }
}

/// Why an attempt did not count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureReason {
    BadForm,
    TooHigh,
    TryAgain,
}

impl FailureReason {
    pub fn label(&self) -> &'static str {
        match self {
            FailureReason::BadForm => "bad form",
            FailureReason::TooHigh => "too high",
            FailureReason::TryAgain => "try again",
        }
    }
}

/// Outcome of processing one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RepEvent {
    /// No landmarks this frame; nothing advanced.
    NoPose,
    /// Posture violation; the attempt was aborted back to Down.
    FormError(FormIssue),
    /// Angle past the safe maximum; attempt flagged, phase kept.
    Overshoot,
    /// Down -> Lifting, a new attempt armed.
    Started,
    /// Still on the way up.
    Lifting,
    /// Full range reached, hold timer started.
    ReachedTop,
    /// Waiting out the minimum hold.
    Holding { elapsed: f32, required: f32 },
    /// Hold satisfied, descent under way.
    LoweringStarted,
    /// Angle climbed back to full range mid-descent.
    LoweringRegressed,
    /// Cycle closed cleanly; payload is the new total.
    RepCounted(u32),
    /// Cycle closed (or attempt ended) without credit.
    Discarded(FailureReason),
    /// Lift gave up before full range and fell back to Down.
    AbortedShallow,
    /// Sitting in Down with nothing to report.
    Idle,
}

/// Per-session rep tracker for one exercise.
pub struct RepTracker {
    config: ExerciseConfig,
    phase: RepPhase,
    count: u32,
    /// When the hold began (frame-timestamp seconds).
    up_since: Option<f64>,
    rep_started: bool,
    rep_failed: bool,
    failure_reason: Option<FailureReason>,
    reached_top: bool,
}

impl RepTracker {
    pub fn new(config: ExerciseConfig) -> Self {
        Self {
            config,
            phase: RepPhase::Down,
            count: 0,
            up_since: None,
            rep_started: false,
            rep_failed: false,
            failure_reason: None,
            reached_top: false,
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn phase(&self) -> RepPhase {
        self.phase
    }

    pub fn config(&self) -> &ExerciseConfig {
        &self.config
    }

    /// Zero the counter and return to a fresh Down state. Idempotent.
    pub fn reset(&mut self) {
        self.phase = RepPhase::Down;
        self.count = 0;
        self.up_since = None;
        self.clear_attempt();
    }

    fn clear_attempt(&mut self) {
        self.rep_started = false;
        self.rep_failed = false;
        self.failure_reason = None;
        self.reached_top = false;
    }

    fn flag_failure(&mut self, reason: FailureReason) {
        if !self.rep_failed {
            self.rep_failed = true;
            self.failure_reason = Some(reason);
        }
    }

    /// True when `angle` has crossed `threshold` on the lift's advancing
    /// side. Inclusive: an angle exactly at the threshold counts.
    fn reached(&self, angle: f32, threshold: f32) -> bool {
        match self.config.direction {
            Direction::Increasing => angle >= threshold,
            Direction::Decreasing => angle <= threshold,
        }
    }

    /// True when `angle` has moved back past `threshold` toward the
    /// bottom. Inclusive on the returning side.
    fn returned(&self, angle: f32, threshold: f32) -> bool {
        match self.config.direction {
            Direction::Increasing => angle <= threshold,
            Direction::Decreasing => angle >= threshold,
        }
    }

    /// True when `angle` has slipped off the advancing side of
    /// `threshold` (strict; used to end the hold).
    fn receded(&self, angle: f32, threshold: f32) -> bool {
        !self.reached(angle, threshold)
    }

    fn overshot(&self, angle: f32) -> bool {
        match self.config.overshoot_angle {
            Some(limit) => match self.config.direction {
                Direction::Increasing => angle > limit,
                Direction::Decreasing => angle < limit,
            },
            None => false,
        }
    }

    /// Advance the machine by one frame.
    pub fn update(&mut self, angle: f32, issue: Option<FormIssue>, now: f64) -> RepEvent {
        // Hard form errors abort the attempt outright.
        if let Some(issue) = issue {
            if self.rep_started {
                self.flag_failure(FailureReason::BadForm);
            }
            self.phase = RepPhase::Down;
            self.up_since = None;
            self.rep_started = false;
            self.reached_top = false;
            return RepEvent::FormError(issue);
        }

        // Overshoot is a soft warning: the attempt is flagged as failed
        // but the user keeps moving and the cycle closes normally.
        if self.phase != RepPhase::Down && self.overshot(angle) {
            self.flag_failure(FailureReason::TooHigh);
            return RepEvent::Overshoot;
        }

        match self.phase {
            RepPhase::Down => {
                if self.rep_failed {
                    // An aborted attempt left an unreported failure;
                    // report it once before anything new can arm.
                    let reason = self.failure_reason.unwrap_or(FailureReason::TryAgain);
                    self.clear_attempt();
                    RepEvent::Discarded(reason)
                } else if self.reached(angle, self.config.start_angle) {
                    self.rep_started = true;
                    self.phase = RepPhase::Lifting;
                    RepEvent::Started
                } else {
                    RepEvent::Idle
                }
            }

            RepPhase::Lifting => {
                if self.reached(angle, self.config.full_angle) {
                    self.reached_top = true;
                    self.up_since = Some(now);
                    self.phase = RepPhase::Hold;
                    RepEvent::ReachedTop
                } else if self.returned(angle, self.config.return_angle) {
                    // Fell all the way back without reaching full range.
                    self.clear_attempt();
                    self.phase = RepPhase::Down;
                    RepEvent::AbortedShallow
                } else {
                    RepEvent::Lifting
                }
            }

            RepPhase::Hold => {
                let held = self
                    .up_since
                    .map(|since| (now - since) as f32)
                    .unwrap_or(0.0);
                if held >= self.config.min_hold_secs
                    && self.receded(angle, self.config.full_angle)
                {
                    self.phase = RepPhase::Lowering;
                    RepEvent::LoweringStarted
                } else {
                    RepEvent::Holding {
                        elapsed: held,
                        required: self.config.min_hold_secs,
                    }
                }
            }

            RepPhase::Lowering => {
                if self.returned(angle, self.config.return_angle) {
                    let counted = self.rep_started && self.reached_top && !self.rep_failed;
                    let event = if counted {
                        self.count += 1;
                        RepEvent::RepCounted(self.count)
                    } else {
                        let reason = self.failure_reason.unwrap_or(FailureReason::TryAgain);
                        RepEvent::Discarded(reason)
                    };
                    self.clear_attempt();
                    self.up_since = None;
                    self.phase = RepPhase::Down;
                    event
                } else if self.reached(angle, self.config.full_angle) {
                    // Bounced back up to full range. Re-enter the hold
                    // with `up_since` intact: a hold already served is
                    // not demanded again just because the angle
                    // jittered across the threshold.
                    self.phase = RepPhase::Hold;
                    RepEvent::LoweringRegressed
                } else {
                    RepEvent::LoweringStarted
                }
            }
        }
    }
}
