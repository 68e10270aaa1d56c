//! CPU path tracer for scenes of spheres.
//!
//! A scene of spheres with diffuse, metal and glass materials is viewed through
//! a thin lens camera. Every pixel averages several jittered single-path
//! Monte Carlo estimates, and the frame is written as a plain text P3 image.

pub mod camera;
pub mod error;
pub mod hit;
pub mod material;
pub mod ppm;
pub mod ray;
pub mod render;
pub mod sampling;
pub mod scene;
pub mod sphere;
pub mod vec;

pub use camera::Camera;
pub use error::ConfigError;
pub use hit::{Hit, HitRecord, World};
pub use material::{Dielectric, Lambertian, Metal, Scatter};
pub use ppm::{to_rgb8, write_ppm};
pub use ray::Ray;
pub use render::{ray_color, render, render_pixel, Image, RenderSettings, Shading};
pub use scene::SceneKind;
pub use sphere::Sphere;
pub use vec::{Color, Point3, Vec3};
