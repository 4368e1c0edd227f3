use anyhow::Result;
use image::{imageops::FilterType, ImageBuffer, Rgb};
use ort::session::{builder::GraphOptimizationLevel, Session};
use std::path::Path;

use crate::pipeline::HandPipeline;
use crate::types::{HandObservation, Point2D, LANDMARK_COUNT};

const INPUT_SIZE: u32 = 224;

/// MediaPipe-style hand landmark model run over the full frame.
/// Output 0 is 63 floats (21 landmarks, x/y/z in input-pixel scale),
/// output 1 is the hand presence score.
pub struct HandLandmarkPipeline {
    session: Option<Session>,
    min_score: f32,
}

impl HandLandmarkPipeline {
    pub fn new(model_path: &str, min_score: f32) -> Result<Self> {
        let session = if Path::new(model_path).exists() {
            println!("Loading hand landmark model from {}...", model_path);
            Some(
                Session::builder()?
                    .with_optimization_level(GraphOptimizationLevel::Level3)?
                    .with_intra_threads(4)?
                    .commit_from_file(model_path)?,
            )
        } else {
            println!(
                "Hand landmark model not found at {}. No hands will be detected (try --simulate).",
                model_path
            );
            None
        };

        Ok(Self { session, min_score })
    }
}

impl HandPipeline for HandLandmarkPipeline {
    fn name(&self) -> String {
        "Hand Landmarks (21 pts)".to_string()
    }

    fn process(&mut self, frame: &ImageBuffer<Rgb<u8>, Vec<u8>>) -> Result<Vec<HandObservation>> {
        let Some(session) = &mut self.session else {
            return Ok(Vec::new());
        };

        let resized = image::imageops::resize(frame, INPUT_SIZE, INPUT_SIZE, FilterType::Triangle);

        // NHWC [1, 224, 224, 3], pixels scaled to 0..1
        let mut input_data = Vec::with_capacity((INPUT_SIZE * INPUT_SIZE * 3) as usize);
        for y in 0..INPUT_SIZE {
            for x in 0..INPUT_SIZE {
                let pixel = resized.get_pixel(x, y);
                input_data.push(pixel[0] as f32 / 255.0);
                input_data.push(pixel[1] as f32 / 255.0);
                input_data.push(pixel[2] as f32 / 255.0);
            }
        }

        let input = ort::value::Tensor::from_array((vec![1, 224, 224, 3], input_data))?;
        let outputs = session.run(ort::inputs![input])?;

        let (_score_shape, score_data) = outputs[1].try_extract_tensor::<f32>()?;
        if score_data.first().copied().unwrap_or(0.0) < self.min_score {
            return Ok(Vec::new());
        }

        let (_lm_shape, lm_data) = outputs[0].try_extract_tensor::<f32>()?;
        if lm_data.len() < LANDMARK_COUNT * 3 {
            return Ok(Vec::new());
        }

        // Model coordinates are in input-pixel scale; normalize to 0..1
        let mut points = Vec::with_capacity(LANDMARK_COUNT);
        for i in 0..LANDMARK_COUNT {
            points.push(Point2D::new(
                lm_data[i * 3] / INPUT_SIZE as f32,
                lm_data[i * 3 + 1] / INPUT_SIZE as f32,
            ));
        }

        Ok(vec![HandObservation::new(points)])
    }
}
