use clap::{Parser, ValueEnum};
use log::LevelFilter;
use weekend_pathtracer::SceneKind;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SceneArg {
    ThreeSpheres,
    Showcase,
    Cover,
}

impl From<SceneArg> for SceneKind {
    fn from(scene: SceneArg) -> Self {
        match scene {
            SceneArg::ThreeSpheres => SceneKind::ThreeSpheres,
            SceneArg::Showcase => SceneKind::Showcase,
            SceneArg::Cover => SceneKind::Cover,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "weekend-pathtracer")]
#[command(about = "Path traces a scene of spheres into a P3 image")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 400)]
    pub width: u32,

    /// Image height in pixels, 16:9 with the width when omitted
    #[arg(long)]
    pub height: Option<u32>,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value_t = 100)]
    pub samples: u32,

    /// Maximum number of bounces per path
    #[arg(long, default_value_t = 50)]
    pub max_depth: u32,

    /// Seed for pixel jitter, scattering and random scene layout
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    #[arg(long, value_enum, default_value = "three-spheres")]
    pub scene: SceneArg,

    /// Shade by surface normal instead of path tracing
    #[arg(long)]
    pub normals: bool,

    /// Output file; the image goes to stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Hide the progress bar
    #[arg(short, long)]
    pub quiet: bool,

    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    pub fn height(&self) -> u32 {
        self.height
            .unwrap_or_else(|| ((self.width as f64) / (16.0 / 9.0)) as u32)
            .max(1)
    }
}
