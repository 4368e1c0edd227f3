use crate::types::{Finger, Point2D};

fn distance(a: Point2D, b: Point2D) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Interior angle in degrees at the joint `p2`, between the segments
/// p2-p1 and p2-p3, via the law of cosines.
///
/// A zero-length adjacent segment (coincident points) yields 0.0 instead of
/// a division by zero, and the cosine is clamped so floating point rounding
/// can never push it outside acos' domain. Total over all finite inputs.
pub fn joint_angle(p1: Point2D, p2: Point2D, p3: Point2D) -> f32 {
    let l1 = distance(p2, p3);
    let l2 = distance(p1, p3);
    let l3 = distance(p1, p2);

    if l1 == 0.0 || l3 == 0.0 {
        return 0.0;
    }

    let cos_val = (l1 * l1 + l3 * l3 - l2 * l2) / (2.0 * l1 * l3);
    cos_val.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Bend angle of every finger from one hand's pixel-space landmarks,
/// in `Finger::ALL` order (thumb, index, middle, ring, pinky).
pub fn hand_angles(points: &[Point2D]) -> [f32; 5] {
    let mut angles = [0.0; 5];
    for (i, finger) in Finger::ALL.iter().enumerate() {
        let [a, b, c] = finger.landmark_triple();
        angles[i] = joint_angle(points[a], points[b], points[c]);
    }
    angles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f32, y: f32) -> Point2D {
        Point2D::new(x, y)
    }

    #[test]
    fn test_coincident_points_give_zero() {
        let p = pt(3.7, -12.5);
        assert_eq!(joint_angle(p, p, p), 0.0);
        // Zero-length adjacent segments, one at a time
        assert_eq!(joint_angle(pt(1.0, 1.0), pt(1.0, 1.0), pt(5.0, 0.0)), 0.0);
        assert_eq!(joint_angle(pt(5.0, 0.0), pt(1.0, 1.0), pt(1.0, 1.0)), 0.0);
    }

    #[test]
    fn test_right_angle() {
        // Vertex at p2: p2->p1 points along -x, p2->p3 along +y
        let angle = joint_angle(pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, 1.0));
        assert!((angle - 90.0).abs() < 1e-3, "expected 90 deg, got {}", angle);
    }

    #[test]
    fn test_straight_line_is_180() {
        let angle = joint_angle(pt(0.0, 0.0), pt(1.0, 0.0), pt(2.0, 0.0));
        assert!((angle - 180.0).abs() < 1e-3, "expected 180 deg, got {}", angle);
    }

    #[test]
    fn test_folded_back_is_zero() {
        // p1 and p3 on the same side of the vertex, cos clamps at 1.0
        let angle = joint_angle(pt(2.0, 0.0), pt(0.0, 0.0), pt(1.0, 0.0));
        assert!(angle.abs() < 1e-3, "expected 0 deg, got {}", angle);
    }

    #[test]
    fn test_invariant_under_translation_and_reflection() {
        let base = joint_angle(pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, 1.0));

        // Translate all three points
        let shifted = joint_angle(pt(10.5, -3.0), pt(11.5, -3.0), pt(11.5, -2.0));
        assert!((base - shifted).abs() < 1e-3);

        // Mirror across the y axis
        let mirrored = joint_angle(pt(0.0, 0.0), pt(-1.0, 0.0), pt(-1.0, 1.0));
        assert!((base - mirrored).abs() < 1e-3);
    }

    #[test]
    fn test_not_invariant_under_axis_scaling() {
        let base = joint_angle(pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, 1.0));
        // Stretch only the y axis; the angle must change
        let stretched = joint_angle(pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, 3.0));
        assert!((base - stretched).abs() > 1.0);
    }

    #[test]
    fn test_hand_angles_uses_the_finger_table() {
        // All landmarks on one line except the index chain, which bends 90 deg
        let mut points = vec![Point2D::default(); crate::types::LANDMARK_COUNT];
        for (i, p) in points.iter_mut().enumerate() {
            *p = pt(i as f32, 0.0);
        }
        points[5] = pt(0.0, 0.0);
        points[6] = pt(1.0, 0.0);
        points[8] = pt(1.0, 1.0);

        let angles = hand_angles(&points);
        assert!((angles[1] - 90.0).abs() < 1e-3, "index angle: {}", angles[1]);
        assert!((angles[2] - 180.0).abs() < 1e-3, "middle angle: {}", angles[2]);
    }
}
