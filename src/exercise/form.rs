//! Posture checks per exercise
//!
//! Pure predicates over the current frame's joints. A returned issue is a
//! hard form error and aborts the in-flight rep; range overshoot (a soft
//! warning) is handled by the state machine, not here.

use super::config::{Exercise, ExerciseConfig};
use super::pose::UpperBody;

/// Reason codes for posture violations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormIssue {
    /// Curl: elbows swinging away from the torso.
    ElbowDrift,
    /// Lateral raise: elbows lifted above the shoulder line.
    ElbowsAboveShoulders,
    /// Press: hands closer together than the grip allows.
    GripTooNarrow,
    /// Press: wrists not stacked over the elbows.
    WristsNotOverElbows,
}

impl FormIssue {
    pub fn message(&self) -> &'static str {
        match self {
            FormIssue::ElbowDrift => "Keep elbows close to your body",
            FormIssue::ElbowsAboveShoulders => "Elbows above shoulders - lower arms",
            FormIssue::GripTooNarrow => "Too narrow - widen grip",
            FormIssue::WristsNotOverElbows => "Keep wrists over elbows",
        }
    }
}

/// Check posture for the configured exercise. `None` means the form is
/// acceptable this frame.
pub fn check_form(config: &ExerciseConfig, body: &UpperBody) -> Option<FormIssue> {
    match config.exercise {
        Exercise::BicepCurl => {
            let left_drift = (body.left_elbow.x - body.left_shoulder.x).abs();
            let right_drift = (body.right_elbow.x - body.right_shoulder.x).abs();
            if left_drift > config.elbow_drift_limit || right_drift > config.elbow_drift_limit {
                return Some(FormIssue::ElbowDrift);
            }
            None
        }
        Exercise::LateralRaise => {
            // Image y grows downward; an elbow "above" the shoulder has
            // smaller y.
            let left_high = body.left_elbow.y < body.left_shoulder.y - config.elbow_rise_limit;
            let right_high = body.right_elbow.y < body.right_shoulder.y - config.elbow_rise_limit;
            if left_high || right_high {
                return Some(FormIssue::ElbowsAboveShoulders);
            }
            None
        }
        Exercise::OverheadPress => {
            let wrist_span = (body.left_wrist.x - body.right_wrist.x).abs();
            let shoulder_span = (body.left_shoulder.x - body.right_shoulder.x).abs();
            if wrist_span < shoulder_span * config.min_grip_ratio {
                return Some(FormIssue::GripTooNarrow);
            }
            let left_drift = (body.left_wrist.x - body.left_elbow.x).abs();
            let right_drift = (body.right_wrist.x - body.right_elbow.x).abs();
            if left_drift > config.wrist_drift_limit || right_drift > config.wrist_drift_limit {
                return Some(FormIssue::WristsNotOverElbows);
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercise::pose::test_poses::symmetric_frame;

    #[test]
    fn curl_passes_with_elbows_under_shoulders() {
        let frame = symmetric_frame((0.4, 0.5), (0.42, 0.65), (0.44, 0.5), (0.4, 0.8));
        let body = UpperBody::from_landmarks(&frame);
        let config = ExerciseConfig::bicep_curl();
        assert_eq!(check_form(&config, &body), None);
    }

    #[test]
    fn curl_flags_elbow_drift() {
        // Left elbow 0.2 ahead of the shoulder, past the 0.15 limit
        let frame = symmetric_frame((0.4, 0.5), (0.6, 0.6), (0.6, 0.45), (0.4, 0.8));
        let body = UpperBody::from_landmarks(&frame);
        let config = ExerciseConfig::bicep_curl();
        assert_eq!(check_form(&config, &body), Some(FormIssue::ElbowDrift));
    }

    #[test]
    fn raise_flags_elbows_above_shoulders() {
        // Elbow y well above (smaller than) shoulder y
        let frame = symmetric_frame((0.4, 0.5), (0.3, 0.4), (0.25, 0.45), (0.4, 0.8));
        let body = UpperBody::from_landmarks(&frame);
        let config = ExerciseConfig::lateral_raise();
        assert_eq!(
            check_form(&config, &body),
            Some(FormIssue::ElbowsAboveShoulders)
        );
    }

    #[test]
    fn raise_allows_elbows_within_tolerance() {
        // Elbow 0.03 above the shoulder, inside the 0.05 tolerance
        let frame = symmetric_frame((0.4, 0.5), (0.3, 0.47), (0.25, 0.5), (0.4, 0.8));
        let body = UpperBody::from_landmarks(&frame);
        let config = ExerciseConfig::lateral_raise();
        assert_eq!(check_form(&config, &body), None);
    }

    #[test]
    fn press_flags_narrow_grip() {
        // Wrists nearly touching while shoulders are 0.2 apart
        let frame = symmetric_frame((0.4, 0.5), (0.42, 0.35), (0.48, 0.2), (0.4, 0.8));
        let body = UpperBody::from_landmarks(&frame);
        let config = ExerciseConfig::overhead_press();
        assert_eq!(check_form(&config, &body), Some(FormIssue::GripTooNarrow));
    }

    #[test]
    fn press_flags_wrist_drift() {
        // Grip wide enough but wrists 0.3 outside the elbows
        let frame = symmetric_frame((0.4, 0.5), (0.4, 0.35), (0.1, 0.2), (0.4, 0.8));
        let body = UpperBody::from_landmarks(&frame);
        let config = ExerciseConfig::overhead_press();
        assert_eq!(
            check_form(&config, &body),
            Some(FormIssue::WristsNotOverElbows)
        );
    }

    #[test]
    fn press_passes_with_stacked_wrists() {
        let frame = symmetric_frame((0.4, 0.5), (0.38, 0.35), (0.39, 0.2), (0.4, 0.8));
        let body = UpperBody::from_landmarks(&frame);
        let config = ExerciseConfig::overhead_press();
        assert_eq!(check_form(&config, &body), None);
    }
}
