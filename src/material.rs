use super::error::ConfigError;
use super::hit::HitRecord;
use super::ray::Ray;
use super::sampling;
use super::vec::Color;
use rand::RngCore;

/// How a surface redirects light. `None` means the ray was absorbed.
///
/// Implementations hold no mutable state, so one material can be shared by any
/// number of spheres and read from every render thread.
pub trait Scatter: Send + Sync {
    fn scatter(
        &self,
        incident: &Ray,
        hit: &HitRecord<'_>,
        rng: &mut dyn RngCore,
    ) -> Option<(Color, Ray)>;
}

#[derive(Clone, Copy, Debug)]
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }
}

impl Scatter for Lambertian {
    // Note we could just as well only scatter with some probability p and have attenuation be albedo/p
    fn scatter(
        &self,
        _incident: &Ray,
        hit: &HitRecord<'_>,
        rng: &mut dyn RngCore,
    ) -> Option<(Color, Ray)> {
        // Normal plus a point on the unit sphere is cosine distributed about the normal
        let mut scatter_direction = hit.normal + sampling::random_unit_vector(rng);

        if scatter_direction.near_zero() {
            // Degenerate case -- we have sampled the direction exactly opposite of the normal,
            // causing a ray with little/no magnitude. Just scatter along normal.
            scatter_direction = hit.normal;
        }

        Some((self.albedo, Ray::new(hit.position, scatter_direction)))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Metal {
    albedo: Color,
    fuzz: f64,
}

impl Metal {
    /// `fuzz` of 0 is a perfect mirror, 1 the roughest allowed surface.
    pub fn new(albedo: Color, fuzz: f64) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&fuzz) {
            return Err(ConfigError::InvalidFuzz(fuzz));
        }
        Ok(Self { albedo, fuzz })
    }
}

impl Scatter for Metal {
    fn scatter(
        &self,
        incident: &Ray,
        hit: &HitRecord<'_>,
        rng: &mut dyn RngCore,
    ) -> Option<(Color, Ray)> {
        let reflected = incident.direction().normalized().reflect(hit.normal);
        let scatter_direction = reflected + self.fuzz * sampling::random_in_unit_sphere(rng);
        let reflection = Ray::new(hit.position, scatter_direction);

        // Make sure the fuzz has not put us inside the surface
        if reflection.direction().dot(hit.normal) > 0.0 {
            Some((self.albedo, reflection))
        } else {
            None
        }
    }
}

/// Clear refractive material such as glass or water. Never tints.
#[derive(Clone, Copy, Debug)]
pub struct Dielectric {
    refractive_index: f64,
}

impl Dielectric {
    pub fn new(refractive_index: f64) -> Result<Self, ConfigError> {
        if refractive_index <= 0.0 || !refractive_index.is_finite() {
            return Err(ConfigError::InvalidRefractiveIndex(refractive_index));
        }
        Ok(Self { refractive_index })
    }

    /// Schlick's approximation of the Fresnel reflectance.
    fn reflectance(cosine: f64, ratio: f64) -> f64 {
        let r0 = ((1.0 - ratio) / (1.0 + ratio)).powi(2);
        if r0 == 0.0 {
            // Matched indices: there is no interface to reflect from
            return 0.0;
        }
        r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
    }
}

impl Scatter for Dielectric {
    fn scatter(
        &self,
        incident: &Ray,
        hit: &HitRecord<'_>,
        rng: &mut dyn RngCore,
    ) -> Option<(Color, Ray)> {
        // Entering the medium from air, or leaving it
        let ratio = if hit.front_face {
            1.0 / self.refractive_index
        } else {
            self.refractive_index
        };

        let unit_direction = incident.direction().normalized();
        let cos_theta = (-unit_direction).dot(hit.normal).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

        let total_internal_reflection = ratio * sin_theta > 1.0;
        let direction = if total_internal_reflection
            || Self::reflectance(cos_theta, ratio) > sampling::uniform(rng)
        {
            unit_direction.reflect(hit.normal)
        } else {
            unit_direction.refract(hit.normal, ratio)
        };

        Some((Color::one(), Ray::new(hit.position, direction)))
    }
}
