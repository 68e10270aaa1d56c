use super::material::Scatter;
use super::ray::Ray;
use super::vec::{Point3, Vec3};

/// Result of a successful intersection query. Borrows the material of the
/// surface that was struck, so it never outlives the scene.
#[derive(Clone, Copy)]
pub struct HitRecord<'a> {
    pub position: Point3,
    /// Always points against the incoming ray
    pub normal: Vec3,
    pub t: f64,
    pub front_face: bool,
    pub material: &'a dyn Scatter,
}

impl<'a> HitRecord<'a> {
    pub fn new(
        ray: &Ray,
        t: f64,
        position: Point3,
        outward_normal: Vec3,
        material: &'a dyn Scatter,
    ) -> Self {
        let mut record = Self {
            position,
            normal: outward_normal,
            t,
            front_face: true,
            material,
        };
        record.set_face_normal(ray, outward_normal);
        record
    }

    pub fn set_face_normal(&mut self, ray: &Ray, outward_normal: Vec3) {
        // Point normal against ray so shading never has to check the side again,
        // at the cost of tracking which face was hit
        self.front_face = ray.direction().dot(outward_normal) < 0.0;
        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        }
    }
}

pub trait Hit: Send + Sync {
    /// Nearest intersection with `t` strictly inside `(t_min, t_max)`.
    fn hit(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<HitRecord<'_>>;
}

/// Every object in the scene, searched by brute force.
#[derive(Default)]
pub struct World {
    objects: Vec<Box<dyn Hit>>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, object: Box<dyn Hit>) {
        self.objects.push(object);
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Hit for World {
    fn hit(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<HitRecord<'_>> {
        let mut closest_t = t_max;
        let mut closest_record = None;

        for object in &self.objects {
            if let Some(record) = object.hit(ray, t_min, closest_t) {
                closest_t = record.t;
                closest_record = Some(record);
            }
        }

        closest_record
    }
}
