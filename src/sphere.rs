use super::error::ConfigError;
use super::hit::{Hit, HitRecord};
use super::material::Scatter;
use super::ray::Ray;
use super::vec::Point3;
use std::sync::Arc;

/// A sphere. A negative radius keeps the same surface but flips the normals
/// inwards, which is how hollow glass shells are built.
pub struct Sphere {
    center: Point3,
    radius: f64,
    material: Arc<dyn Scatter>,
}

impl Sphere {
    pub fn new(
        center: Point3,
        radius: f64,
        material: Arc<dyn Scatter>,
    ) -> Result<Self, ConfigError> {
        if radius == 0.0 || !radius.is_finite() {
            return Err(ConfigError::InvalidRadius(radius));
        }

        Ok(Self {
            center,
            radius,
            material,
        })
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Hit for Sphere {
    fn hit(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<HitRecord<'_>> {
        let oc = ray.origin() - self.center;
        // Quadratic formula with b = 2 * half_b
        let a = ray.direction().length_squared();
        let half_b = oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }

        // Find the nearest root that lies in the acceptable range
        let sqrt_d = discriminant.sqrt();
        let mut root = (-half_b - sqrt_d) / a;
        if root <= t_min || root >= t_max {
            root = (-half_b + sqrt_d) / a;
            if root <= t_min || root >= t_max {
                return None;
            }
        }

        let position = ray.at(root);
        // Dividing by the signed radius turns the normal inwards for hollow spheres
        let outward_normal = (position - self.center) / self.radius;

        Some(HitRecord::new(
            ray,
            root,
            position,
            outward_normal,
            self.material.as_ref(),
        ))
    }
}
