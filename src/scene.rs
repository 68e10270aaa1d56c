//! Hard-coded scenes, each paired with the camera that frames it.

use super::camera::Camera;
use super::error::ConfigError;
use super::hit::World;
use super::material::{Dielectric, Lambertian, Metal, Scatter};
use super::sampling;
use super::sphere::Sphere;
use super::vec::{Color, Point3, Vec3};
use log::debug;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneKind {
    /// Diffuse, hollow glass and metal spheres on a ground plane, with depth of field
    ThreeSpheres,
    /// Glass shells, steel and gold in front of a large red sphere
    Showcase,
    /// Hundreds of random small spheres around three large ones
    Cover,
}

impl SceneKind {
    /// Builds the scene and its camera. `seed` only matters for scenes with
    /// randomly placed objects.
    pub fn build(self, aspect_ratio: f64, seed: u64) -> Result<(World, Camera), ConfigError> {
        let (world, camera) = match self {
            SceneKind::ThreeSpheres => three_spheres(aspect_ratio)?,
            SceneKind::Showcase => showcase(aspect_ratio)?,
            SceneKind::Cover => cover(aspect_ratio, seed)?,
        };
        debug!("built {:?} scene with {} objects", self, world.len());
        Ok((world, camera))
    }
}

fn sphere(
    center: Point3,
    radius: f64,
    material: &Arc<dyn Scatter>,
) -> Result<Box<Sphere>, ConfigError> {
    Ok(Box::new(Sphere::new(center, radius, material.clone())?))
}

fn three_spheres(aspect_ratio: f64) -> Result<(World, Camera), ConfigError> {
    let ground: Arc<dyn Scatter> = Arc::new(Lambertian::new(Color::new(0.8, 0.8, 0.0)));
    let center: Arc<dyn Scatter> = Arc::new(Lambertian::new(Color::new(0.1, 0.2, 0.5)));
    let glass: Arc<dyn Scatter> = Arc::new(Dielectric::new(1.5)?);
    let gold: Arc<dyn Scatter> = Arc::new(Metal::new(Color::new(0.8, 0.6, 0.2), 0.0)?);

    let mut world = World::new();
    world.add(sphere(Point3::new(0.0, -100.5, -1.0), 100.0, &ground)?);
    world.add(sphere(Point3::new(0.0, 0.0, -1.0), 0.5, &center)?);
    world.add(sphere(Point3::new(-1.0, 0.0, -1.0), 0.5, &glass)?);
    // Hollow bubble inside the glass sphere
    world.add(sphere(Point3::new(-1.0, 0.0, -1.0), -0.4, &glass)?);
    world.add(sphere(Point3::new(1.0, 0.0, -1.0), 0.5, &gold)?);

    let look_from = Point3::new(3.0, 3.0, 2.0);
    let look_at = Point3::new(0.0, 0.0, -1.0);
    let camera = Camera::new(
        look_from,
        look_at,
        Vec3::new(0.0, 1.0, 0.0),
        20.0,
        aspect_ratio,
        2.0,
        (look_from - look_at).length(),
    )?;

    Ok((world, camera))
}

fn showcase(aspect_ratio: f64) -> Result<(World, Camera), ConfigError> {
    let ground: Arc<dyn Scatter> = Arc::new(Lambertian::new(Color::new(0.8, 0.8, 0.0)));
    let glass: Arc<dyn Scatter> = Arc::new(Dielectric::new(1.5)?);
    let steel: Arc<dyn Scatter> = Arc::new(Metal::new(Color::new(0.8, 0.8, 0.8), 0.0)?);
    let gold_color = Color::new(205.0 / 255.0, 127.0 / 255.0, 50.0 / 255.0);
    let gold: Arc<dyn Scatter> = Arc::new(Metal::new(gold_color, 0.0)?);
    let fuzzy_gold: Arc<dyn Scatter> = Arc::new(Metal::new(gold_color, 0.5)?);
    let red: Arc<dyn Scatter> = Arc::new(Lambertian::new(Color::new(1.0, 0.0, 0.0)));

    let mut world = World::new();
    world.add(sphere(Point3::new(0.0, -1000.5, -1.0), 1000.0, &ground)?);
    world.add(sphere(Point3::new(-1.2, 0.0, -1.0), 0.5, &glass)?);
    world.add(sphere(Point3::new(-1.2, 0.0, -1.0), -0.4, &glass)?);
    world.add(sphere(Point3::new(1.0, 1.1, -1.2), 0.5, &glass)?);
    world.add(sphere(Point3::new(1.0, 1.1, -1.2), -0.4, &glass)?);
    world.add(sphere(Point3::new(-0.3, 1.1, -1.2), 0.5, &steel)?);
    world.add(sphere(Point3::new(0.0, 0.0, -1.0), 0.5, &gold)?);
    world.add(sphere(Point3::new(1.2, 0.0, -1.0), 0.5, &fuzzy_gold)?);
    world.add(sphere(Point3::new(7.0, 2.5, -5.0), 2.5, &red)?);

    let camera = Camera::new(
        Point3::zero(),
        Point3::new(0.0, 0.0, -1.0),
        Vec3::new(0.0, 1.0, 0.0),
        90.0,
        aspect_ratio,
        0.0,
        1.0,
    )?;

    Ok((world, camera))
}

fn cover(aspect_ratio: f64, seed: u64) -> Result<(World, Camera), ConfigError> {
    // Separate stream from the ones the renderer uses for scanlines
    let mut rng = sampling::stream_rng(seed, u64::MAX);
    let mut world = World::new();

    let ground: Arc<dyn Scatter> = Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5)));
    world.add(sphere(Point3::new(0.0, -1000.0, 0.0), 1000.0, &ground)?);

    let glass: Arc<dyn Scatter> = Arc::new(Dielectric::new(1.5)?);
    for a in -11..11 {
        for b in -11..11 {
            let choose_material = sampling::uniform(&mut rng);
            let center = Point3::new(
                a as f64 + 0.9 * sampling::uniform(&mut rng),
                0.2,
                b as f64 + 0.9 * sampling::uniform(&mut rng),
            );

            // Keep clear of the large metal sphere
            if (center - Point3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            let material: Arc<dyn Scatter> = if choose_material < 0.8 {
                let albedo = sampling::random_vector(&mut rng, 0.0, 1.0)
                    * sampling::random_vector(&mut rng, 0.0, 1.0);
                Arc::new(Lambertian::new(albedo))
            } else if choose_material < 0.95 {
                let albedo = sampling::random_vector(&mut rng, 0.5, 1.0);
                let fuzz = sampling::uniform_range(&mut rng, 0.0, 0.5);
                Arc::new(Metal::new(albedo, fuzz)?)
            } else {
                glass.clone()
            };
            world.add(sphere(center, 0.2, &material)?);
        }
    }

    let brown: Arc<dyn Scatter> = Arc::new(Lambertian::new(Color::new(0.4, 0.2, 0.1)));
    let bronze: Arc<dyn Scatter> = Arc::new(Metal::new(Color::new(0.7, 0.6, 0.5), 0.0)?);
    world.add(sphere(Point3::new(0.0, 1.0, 0.0), 1.0, &glass)?);
    world.add(sphere(Point3::new(-4.0, 1.0, 0.0), 1.0, &brown)?);
    world.add(sphere(Point3::new(4.0, 1.0, 0.0), 1.0, &bronze)?);

    let camera = Camera::new(
        Point3::new(13.0, 2.0, 3.0),
        Point3::zero(),
        Vec3::new(0.0, 1.0, 0.0),
        20.0,
        aspect_ratio,
        0.1,
        10.0,
    )?;

    Ok((world, camera))
}
