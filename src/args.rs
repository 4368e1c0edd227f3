use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Camera Index (default 0)
    #[arg(short, long, default_value_t = 0)]
    pub cam_index: u32,

    /// Hand landmark model path
    #[arg(long, default_value = "models/hand_landmark.onnx")]
    pub model: String,

    /// Controller address override (host:port)
    #[arg(long)]
    pub controller: Option<String>,

    /// Use the synthetic hand instead of camera inference
    #[arg(long, default_value_t = false)]
    pub simulate: bool,

    /// Mirror the camera output
    #[arg(long, default_value_t = false)]
    pub mirror: bool,

    /// List available cameras
    #[arg(long)]
    pub list: bool,
}
