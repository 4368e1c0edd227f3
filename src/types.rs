/// Represents a single 2D point in pixel or normalized space
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Number of landmarks in one hand observation (MediaPipe numbering,
/// 0 = wrist .. 4 = thumb tip .. 20 = pinky tip).
pub const LANDMARK_COUNT: usize = 21;

/// One tracked hand: 21 landmarks with normalized (0..1) coordinates.
#[derive(Debug, Clone, Default)]
pub struct HandObservation {
    pub points: Vec<Point2D>,
}

impl HandObservation {
    pub fn new(points: Vec<Point2D>) -> Self {
        Self { points }
    }

    /// Scale the normalized landmarks into pixel space for a given frame size.
    pub fn to_pixels(&self, width: u32, height: u32) -> Vec<Point2D> {
        let (w, h) = (width as f32, height as f32);
        self.points
            .iter()
            .map(|p| Point2D::new(p.x * w, p.y * h))
            .collect()
    }
}

/// Bone connections for the on-screen skeleton.
pub const HAND_SKELETON: [(usize, usize); 21] = [
    (0, 1), (1, 2), (2, 3), (3, 4),        // thumb
    (0, 5), (5, 6), (6, 7), (7, 8),        // index
    (0, 9), (9, 10), (10, 11), (11, 12),   // middle
    (0, 13), (13, 14), (14, 15), (15, 16), // ring
    (0, 17), (17, 18), (18, 19), (19, 20), // pinky
    (5, 9),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    /// Landmark indices (proximal, joint, distal) defining the bend angle.
    /// The middle entry is the vertex the angle is measured at.
    pub fn landmark_triple(self) -> [usize; 3] {
        match self {
            Finger::Thumb => [1, 2, 4],
            Finger::Index => [5, 6, 8],
            Finger::Middle => [9, 10, 12],
            Finger::Ring => [13, 14, 16],
            Finger::Pinky => [17, 18, 20],
        }
    }

    /// Wire channel this finger is bound to (slot in the outgoing message).
    pub fn channel(self) -> usize {
        match self {
            Finger::Pinky => 0,
            Finger::Ring => 1,
            Finger::Middle => 2,
            Finger::Index => 3,
            Finger::Thumb => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Finger::Thumb => "thumb",
            Finger::Index => "index",
            Finger::Middle => "middle",
            Finger::Ring => "ring",
            Finger::Pinky => "pinky",
        }
    }
}

/// Five discrete servo positions, indexed by wire channel
/// (0 = pinky, 1 = ring, 2 = middle, 3 = index, 4 = thumb).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActuatorCommand {
    pub channels: [u8; 5],
}

impl ActuatorCommand {
    pub fn set(&mut self, finger: Finger, position: u8) {
        self.channels[finger.channel()] = position;
    }

    #[allow(dead_code)]
    pub fn get(&self, finger: Finger) -> u8 {
        self.channels[finger.channel()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_assignment() {
        // Pin layout on the controller: pinky first, thumb last.
        assert_eq!(Finger::Pinky.channel(), 0);
        assert_eq!(Finger::Ring.channel(), 1);
        assert_eq!(Finger::Middle.channel(), 2);
        assert_eq!(Finger::Index.channel(), 3);
        assert_eq!(Finger::Thumb.channel(), 4);
    }

    #[test]
    fn test_landmark_triples_are_in_range() {
        for finger in Finger::ALL {
            for idx in finger.landmark_triple() {
                assert!(
                    idx < LANDMARK_COUNT,
                    "{}: index {} out of range",
                    finger.label(),
                    idx
                );
            }
        }
    }

    #[test]
    fn test_to_pixels_scales_by_frame_size() {
        let obs = HandObservation::new(vec![Point2D::new(0.5, 0.25)]);
        let px = obs.to_pixels(640, 480);
        assert_eq!(px[0], Point2D::new(320.0, 120.0));
    }
}
