//! MediaPipe Pose landmark layout and upper-body joint extraction

use nalgebra::Point2;

use super::angles::joint_angle;
use super::config::Exercise;

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose - 33 total)
// ============================================================================

pub const LANDMARK_COUNT: usize = 33;

pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_ELBOW: usize = 13;
pub const RIGHT_ELBOW: usize = 14;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;

/// A single landmark in normalized image coordinates.
/// `z` is MediaPipe's relative depth; the analysis is planar and ignores it.
#[derive(Clone, Copy, Default)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub fn point(&self) -> Point2<f32> {
        Point2::new(self.x, self.y)
    }
}

/// The eight joints the rep trackers care about, both sides.
#[derive(Clone, Copy)]
pub struct UpperBody {
    pub left_shoulder: Point2<f32>,
    pub right_shoulder: Point2<f32>,
    pub left_elbow: Point2<f32>,
    pub right_elbow: Point2<f32>,
    pub left_wrist: Point2<f32>,
    pub right_wrist: Point2<f32>,
    pub left_hip: Point2<f32>,
    pub right_hip: Point2<f32>,
}

impl UpperBody {
    pub fn from_landmarks(landmarks: &[Landmark; LANDMARK_COUNT]) -> Self {
        Self {
            left_shoulder: landmarks[LEFT_SHOULDER].point(),
            right_shoulder: landmarks[RIGHT_SHOULDER].point(),
            left_elbow: landmarks[LEFT_ELBOW].point(),
            right_elbow: landmarks[RIGHT_ELBOW].point(),
            left_wrist: landmarks[LEFT_WRIST].point(),
            right_wrist: landmarks[RIGHT_WRIST].point(),
            left_hip: landmarks[LEFT_HIP].point(),
            right_hip: landmarks[RIGHT_HIP].point(),
        }
    }
}

/// Measure the exercise's working angle, averaged over both arms.
///
/// Curl and press track the elbow (shoulder-elbow-wrist); the lateral
/// raise tracks arm abduction at the shoulder (hip-shoulder-elbow).
pub fn measured_angle(exercise: Exercise, body: &UpperBody) -> f32 {
    let (left, right) = match exercise {
        Exercise::BicepCurl | Exercise::OverheadPress => (
            joint_angle(body.left_shoulder, body.left_elbow, body.left_wrist),
            joint_angle(body.right_shoulder, body.right_elbow, body.right_wrist),
        ),
        Exercise::LateralRaise => (
            joint_angle(body.left_hip, body.left_shoulder, body.left_elbow),
            joint_angle(body.right_hip, body.right_shoulder, body.right_elbow),
        ),
    };
    (left + right) / 2.0
}

#[cfg(test)]
pub(crate) mod test_poses {
    use super::*;

    /// Build a symmetric frame from one side's joint positions, mirrored
    /// about x = 0.5. Unused landmarks stay at the origin.
    pub fn symmetric_frame(
        shoulder: (f32, f32),
        elbow: (f32, f32),
        wrist: (f32, f32),
        hip: (f32, f32),
    ) -> [Landmark; LANDMARK_COUNT] {
        let mut frame = [Landmark::default(); LANDMARK_COUNT];
        let mut set = |idx: usize, p: (f32, f32), mirror: bool| {
            let x = if mirror { 1.0 - p.0 } else { p.0 };
            frame[idx] = Landmark { x, y: p.1, z: 0.0 };
        };
        set(LEFT_SHOULDER, shoulder, false);
        set(RIGHT_SHOULDER, shoulder, true);
        set(LEFT_ELBOW, elbow, false);
        set(RIGHT_ELBOW, elbow, true);
        set(LEFT_WRIST, wrist, false);
        set(RIGHT_WRIST, wrist, true);
        set(LEFT_HIP, hip, false);
        set(RIGHT_HIP, hip, true);
        frame
    }
}
