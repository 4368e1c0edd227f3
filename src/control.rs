use crate::angles;
use crate::classifier;
use crate::types::{ActuatorCommand, HandObservation, Point2D};

/// Everything computed from one observed hand in one frame: the pixel-space
/// landmarks (for the overlay), the five bend angles, and the resulting
/// actuator command.
pub struct HandReading {
    pub points_px: Vec<Point2D>,
    pub angles: [f32; 5],
    pub command: ActuatorCommand,
}

/// One hand's worth of the per-frame pipeline: scale landmarks into pixel
/// space, measure the five bend angles, classify into servo positions.
/// Frames with no observed hand never reach this point, which leaves the
/// remote servos holding their last commanded position.
pub fn read_hand(
    observation: &HandObservation,
    frame_width: u32,
    frame_height: u32,
    threshold: f32,
) -> HandReading {
    let points_px = observation.to_pixels(frame_width, frame_height);
    let angles = angles::hand_angles(&points_px);
    let command = classifier::classify(&angles, threshold);
    HandReading {
        points_px,
        angles,
        command,
    }
}
