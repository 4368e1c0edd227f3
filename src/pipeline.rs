use crate::types::{HandObservation, Point2D, LANDMARK_COUNT};
use anyhow::Result;
use image::{ImageBuffer, Rgb};

/// Boundary to the pose detector: a frame in, zero or more 21-landmark hand
/// observations out (normalized coordinates). Multi-hand detectors return
/// observations in their own deterministic order; the control loop processes
/// them one at a time.
pub trait HandPipeline {
    fn name(&self) -> String;
    fn process(&mut self, frame: &ImageBuffer<Rgb<u8>, Vec<u8>>) -> Result<Vec<HandObservation>>;
}

/// Synthetic hand for running without model assets: one hand whose fingers
/// curl and extend on offset sine phases, so the servos cycle through every
/// combination over time.
pub struct SimulatedHandPipeline {
    frame_count: u32,
}

impl SimulatedHandPipeline {
    pub fn new() -> Self {
        Self { frame_count: 0 }
    }
}

fn rotate(v: (f32, f32), theta: f32) -> (f32, f32) {
    let (s, c) = theta.sin_cos();
    (v.0 * c - v.1 * s, v.0 * s + v.1 * c)
}

impl HandPipeline for SimulatedHandPipeline {
    fn name(&self) -> String {
        "Simulated Hand (no model)".to_string()
    }

    fn process(&mut self, _frame: &ImageBuffer<Rgb<u8>, Vec<u8>>) -> Result<Vec<HandObservation>> {
        self.frame_count += 1;
        let t = self.frame_count as f32 * 0.04;

        let wrist = Point2D::new(0.5, 0.85);
        let mut points = vec![wrist; LANDMARK_COUNT];

        // Splay angles from vertical, thumb to pinky
        let splay_deg: [f32; 5] = [-55.0, -20.0, 0.0, 18.0, 38.0];

        for (i, &splay) in splay_deg.iter().enumerate() {
            let a = splay.to_radians();
            let dir = (a.sin(), -a.cos());

            // Curl sweeps 0..140 deg so each finger crosses the bend
            // threshold in both directions
            let curl = ((t + i as f32 * 1.3).sin() + 1.0) * 0.5 * 140f32.to_radians();
            let bent = rotate(dir, curl);

            let base = 1 + i * 4; // landmark chains: 1-4, 5-8, 9-12, 13-16, 17-20
            let mut p = Point2D::new(wrist.x + dir.0 * 0.18, wrist.y + dir.1 * 0.18);
            points[base] = p;
            p = Point2D::new(p.x + dir.0 * 0.07, p.y + dir.1 * 0.07);
            points[base + 1] = p;
            p = Point2D::new(p.x + bent.0 * 0.06, p.y + bent.1 * 0.06);
            points[base + 2] = p;
            p = Point2D::new(p.x + bent.0 * 0.05, p.y + bent.1 * 0.05);
            points[base + 3] = p;
        }

        Ok(vec![HandObservation::new(points)])
    }
}
