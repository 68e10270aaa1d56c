//! Path integrator and the frame driver that runs it over every pixel.

use super::camera::Camera;
use super::error::ConfigError;
use super::hit::{Hit, World};
use super::ray::Ray;
use super::sampling;
use super::vec::Color;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::RngCore;
use rayon::prelude::*;
use std::time::Instant;

/// Rays starting closer than this to a surface ignore it, which keeps
/// scattered rays from re-hitting their own origin (shadow acne).
pub const T_MIN: f64 = 0.001;

/// What a camera ray is turned into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Shading {
    /// Full Monte Carlo path tracing through the materials
    #[default]
    PathTraced,
    /// Surface normals mapped to RGB, for checking geometry
    Normals,
}

#[derive(Clone, Debug)]
pub struct RenderSettings {
    pub image_width: u32,
    pub image_height: u32,
    pub samples_per_pixel: u32,
    pub max_depth: u32,
    pub seed: u64,
    pub show_progress: bool,
    pub shading: Shading,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            image_width: 400,
            image_height: 225,
            samples_per_pixel: 100,
            max_depth: 50,
            seed: 0,
            show_progress: false,
            shading: Shading::PathTraced,
        }
    }
}

impl RenderSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.image_width == 0 || self.image_height == 0 {
            return Err(ConfigError::InvalidImageSize {
                width: self.image_width,
                height: self.image_height,
            });
        }
        if self.samples_per_pixel == 0 {
            return Err(ConfigError::InvalidSampleCount);
        }
        Ok(())
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.image_width as f64 / self.image_height as f64
    }
}

/// Environment light seen by rays that escape the scene: a vertical blend
/// from white at the horizon to sky blue at the zenith.
pub fn background(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalized();
    let t = (unit_direction.y() + 1.0) * 0.5;
    let from = Color::new(1.0, 1.0, 1.0);
    let to = Color::new(0.5, 0.7, 1.0);
    (1.0 - t) * from + t * to
}

/// Single path estimate of the light arriving along `ray`.
///
/// The path is followed iteratively, carrying the product of the attenuations
/// seen so far, so a large `depth` costs time but never stack.
pub fn ray_color(ray: &Ray, world: &World, depth: u32, rng: &mut dyn RngCore) -> Color {
    let mut ray = *ray;
    let mut throughput = Color::one();

    for _ in 0..depth {
        let Some(hit) = world.hit(&ray, T_MIN, f64::INFINITY) else {
            return throughput * background(&ray);
        };
        match hit.material.scatter(&ray, &hit, rng) {
            Some((attenuation, scattered)) => {
                throughput *= attenuation;
                ray = scattered;
            }
            None => return Color::zero(),
        }
    }

    // Too many bounces! Assume all energy lost
    Color::zero()
}

/// Debug shading: a hit is colored by its normal, a miss by the background.
pub fn normal_color(ray: &Ray, world: &World) -> Color {
    match world.hit(ray, T_MIN, f64::INFINITY) {
        Some(hit) => 0.5 * (hit.normal + Color::one()),
        None => background(ray),
    }
}

/// Averaged linear color of pixel `(i, j)`, with `j` counted from the bottom row.
///
/// Each sample jitters the position inside the pixel; averaging the samples is
/// the only anti-aliasing filter.
pub fn render_pixel(
    camera: &Camera,
    world: &World,
    settings: &RenderSettings,
    i: u32,
    j: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let u_scale = (settings.image_width.max(2) - 1) as f64;
    let v_scale = (settings.image_height.max(2) - 1) as f64;

    let mut pixel_color = Color::zero();
    for _ in 0..settings.samples_per_pixel {
        let u = (i as f64 + sampling::uniform(rng)) / u_scale;
        let v = (j as f64 + sampling::uniform(rng)) / v_scale;

        let ray = camera.get_ray(u, v, rng);
        pixel_color += match settings.shading {
            Shading::PathTraced => ray_color(&ray, world, settings.max_depth, rng),
            Shading::Normals => normal_color(&ray, world),
        };
    }

    pixel_color / settings.samples_per_pixel as f64
}

/// A finished frame of averaged linear colors, stored top row first.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Image {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at column `x` and row `y`, where row 0 is the top of the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }
}

/// Render every pixel of the frame.
///
/// Scanlines are traced in parallel. Each row draws from its own random
/// stream derived from the settings seed, so the result only depends on the
/// inputs, never on how rows were scheduled.
pub fn render(
    camera: &Camera,
    world: &World,
    settings: &RenderSettings,
) -> Result<Image, ConfigError> {
    settings.validate()?;

    let start = Instant::now();
    info!(
        "rendering {}x{} at {} samples per pixel, max depth {}, on {} threads",
        settings.image_width,
        settings.image_height,
        settings.samples_per_pixel,
        settings.max_depth,
        rayon::current_num_threads()
    );

    let progress = if settings.show_progress {
        let bar = ProgressBar::new(settings.image_height as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{bar:40} {pos}/{len} scanlines, ETA: {eta}")
        {
            bar.set_style(style);
        }
        bar
    } else {
        ProgressBar::hidden()
    };

    let width = settings.image_width;
    let height = settings.image_height;
    let rows: Vec<Vec<Color>> = (0..height)
        .into_par_iter()
        .map(|row| {
            // Output goes top to bottom while the camera's v runs bottom to top
            let j = height - 1 - row;
            let mut rng = sampling::stream_rng(settings.seed, row as u64);
            let pixels: Vec<Color> = (0..width)
                .map(|i| render_pixel(camera, world, settings, i, j, &mut rng))
                .collect();
            progress.inc(1);
            pixels
        })
        .collect();
    progress.finish_and_clear();

    info!("rendered in {:.2?}", start.elapsed());

    Ok(Image {
        width,
        height,
        pixels: rows.into_iter().flatten().collect(),
    })
}
