use clap::Parser;
use colored::*;

mod angles;
mod args;
mod camera;
mod classifier;
mod config;
mod control;
mod draw;
mod font;
mod inference;
mod link;
mod output;
mod pipeline;
mod protocol;
mod types;

use args::Args;
use camera::CameraSource;
use config::AppConfig;
use inference::HandLandmarkPipeline;
use link::{ControllerLink, SendStatus, TcpDialer};
use output::WindowOutput;
use pipeline::{HandPipeline, SimulatedHandPipeline};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.list {
        let cameras = nokhwa::query(nokhwa::utils::ApiBackend::Auto)?;
        println!("Available Cameras:");
        println!("{:<5} | {:<30} | {:<10}", "Index", "Name", "Misc");
        println!("{}", "-".repeat(60));
        for cam in cameras {
            println!(
                "{:<5} | {:<30} | {:?}",
                cam.index(),
                cam.human_name(),
                cam.misc()
            );
        }
        return Ok(());
    }

    // 0. Load Config
    let config = AppConfig::load()?;

    // 1. Setup Camera
    let mut camera = CameraSource::new(args.cam_index as usize)?;
    let (width, height) = camera.dimensions();

    // 2. Setup Hand Tracking
    let mut hand_pipeline: Box<dyn HandPipeline> = if args.simulate {
        Box::new(SimulatedHandPipeline::new())
    } else {
        Box::new(HandLandmarkPipeline::new(
            &args.model,
            config.tracking.min_hand_score,
        )?)
    };
    println!("Active Pipeline: {}", hand_pipeline.name());

    // 3. Setup Display
    let mut window = WindowOutput::new("Rusty Hand", width as usize, height as usize)?;

    // 4. Connect to the servo controller. Failure here is non-fatal: the
    // loop runs and sends are skipped until a link exists.
    let addr = args
        .controller
        .clone()
        .unwrap_or_else(|| config.controller_addr());
    let mut controller = ControllerLink::new(TcpDialer, addr);
    controller.connect();

    // Feature Toggles (Loaded from Config)
    let mut mirror_mode = args.mirror || config.defaults.mirror_mode;
    let mut show_skeleton = config.defaults.show_skeleton;
    let mut show_angles = config.defaults.show_angles;

    let bone_color = draw::parse_hex(&config.ui.skeleton_color_hex);
    let hud_scale = config.ui.hud_scale;
    let threshold = config.tracking.extend_threshold_deg;

    println!("Starting control loop...");
    println!("Controls: [1] Skeleton [2] Angles [3] Mirror [Esc] Quit");

    // 5. Loop: capture -> detect -> angles -> classify -> encode -> send.
    // One iteration runs to completion before the next; cancellation is
    // checked between iterations.
    while window.is_open() && !window.is_key_down(minifb::Key::Escape) {
        for key in window.keys_pressed() {
            match key {
                minifb::Key::Key1 => show_skeleton = !show_skeleton,
                minifb::Key::Key2 => show_angles = !show_angles,
                minifb::Key::Key3 => mirror_mode = !mirror_mode,
                _ => {}
            }
        }

        // Capture Frame
        let mut frame = match camera.capture() {
            Ok(f) => f,
            Err(e) => {
                eprintln!("{}", format!("Frame capture failed: {}", e).yellow());
                continue;
            }
        };
        if mirror_mode {
            image::imageops::flip_horizontal_in_place(&mut frame);
        }

        let mut display_buffer = frame.to_vec();

        // A frame with no hand sends nothing: the remote servos hold their
        // last commanded position.
        let hands = hand_pipeline.process(&frame)?;

        for observation in &hands {
            let reading = control::read_hand(observation, width, height, threshold);
            let message = protocol::encode(&reading.command);

            print!("-> sending {}", message);
            match controller.send(&message)? {
                SendStatus::Sent => {}
                SendStatus::Recovered => {
                    // Reconnected; that command is gone, the next frame
                    // produces a fresh one
                }
                SendStatus::Skipped => {}
            }

            if show_skeleton {
                draw::draw_skeleton(
                    &mut display_buffer,
                    width as usize,
                    height as usize,
                    &reading.points_px,
                    bone_color,
                    (255, 0, 0),
                );
            }
            if show_angles {
                draw::draw_angle_panel(
                    &mut display_buffer,
                    width as usize,
                    height as usize,
                    &reading.angles,
                    hud_scale,
                    (255, 255, 255),
                );
            }
        }

        // --- VISUAL MENU ---
        let menu_items = [
            ("1", "Skeleton", show_skeleton),
            ("2", "Angles", show_angles),
            ("3", "Mirror", mirror_mode),
            ("-", "Link", controller.is_connected()),
        ];

        let mut y_start = 10;
        for (key, label, active) in menu_items.iter() {
            let color = if *active { (0, 255, 0) } else { (255, 255, 255) };
            let status = if *active { "ON" } else { "OFF" };
            let text = format!("[{}] {} [{}]", key, label, status);
            font::draw_text_line(
                &mut display_buffer,
                width as usize,
                height as usize,
                10,
                y_start,
                &text,
                color,
                hud_scale,
            );
            y_start += font::line_height(hud_scale);
        }

        window.update(&display_buffer)?;
    }

    controller.close();
    Ok(())
}
