//! Joint angle calculation from three 2D landmarks
//!
//! The vertex joint sits at `b`; `a` and `c` are the adjacent joints
//! (e.g. shoulder-elbow-wrist for the elbow angle).

use nalgebra::Point2;

/// Angle at `b` in degrees, always in [0, 180].
///
/// Computed as the absolute difference of the polar angles of the two
/// bone vectors, reflected over 180 so that 170 and 190 both read as 170.
pub fn joint_angle(a: Point2<f32>, b: Point2<f32>, c: Point2<f32>) -> f32 {
    let ab = a - b;
    let cb = c - b;

    // Coincident points make the polar angle undefined; report 0 instead
    // of letting NaN leak into the state machine.
    if ab.norm_squared() < 1e-10 || cb.norm_squared() < 1e-10 {
        return 0.0;
    }

    let radians = cb.y.atan2(cb.x) - ab.y.atan2(ab.x);
    let mut angle = radians.to_degrees().abs();
    if angle > 180.0 {
        angle = 360.0 - angle;
    }
    angle
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Point2<f32> {
        Point2::new(x, y)
    }

    #[test]
    fn straight_arm_reads_180() {
        let angle = joint_angle(p(0.0, 0.0), p(0.5, 0.0), p(1.0, 0.0));
        assert!((angle - 180.0).abs() < 0.01);
    }

    #[test]
    fn right_angle_reads_90() {
        let angle = joint_angle(p(0.0, 0.0), p(0.5, 0.0), p(0.5, 0.5));
        assert!((angle - 90.0).abs() < 0.01);
    }

    #[test]
    fn folded_arm_reads_0() {
        let angle = joint_angle(p(0.0, 0.0), p(0.5, 0.0), p(0.0, 0.0));
        assert!(angle.abs() < 0.01);
    }

    #[test]
    fn reflex_angles_fold_below_180() {
        // c placed so the raw polar difference exceeds 180 degrees
        let angle = joint_angle(p(1.0, 0.1), p(0.0, 0.0), p(1.0, -0.1));
        assert!(angle <= 180.0);
        assert!(angle > 0.0);
    }

    #[test]
    fn coincident_points_return_zero_not_nan() {
        let angle = joint_angle(p(0.3, 0.3), p(0.3, 0.3), p(0.3, 0.3));
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn symmetric_under_endpoint_swap() {
        let a = p(0.2, 0.8);
        let b = p(0.5, 0.5);
        let c = p(0.9, 0.7);
        let lhs = joint_angle(a, b, c);
        let rhs = joint_angle(c, b, a);
        assert!((lhs - rhs).abs() < 0.01);
    }
}
