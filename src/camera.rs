use super::error::ConfigError;
use super::ray::Ray;
use super::sampling;
use super::vec::{Point3, Vec3};
use log::debug;
use rand::RngCore;

/// Thin lens camera. Everything is derived up front; rendering only reads it.
#[derive(Clone, Debug)]
pub struct Camera {
    origin: Point3,
    focus_plane_horizontal: Vec3,
    focus_plane_vertical: Vec3,
    focus_plane_lower_left_corner: Point3,
    camera_x: Vec3,
    camera_y: Vec3,
    lens_radius: f64,
}

impl Camera {
    pub fn new(
        origin: Point3,
        look_target: Point3,
        world_up: Vec3,
        vertical_fov_degrees: f64,
        aspect_ratio: f64,
        aperture: f64,
        focus_distance: f64,
    ) -> Result<Self, ConfigError> {
        if !(vertical_fov_degrees > 0.0 && vertical_fov_degrees < 180.0) {
            return Err(ConfigError::InvalidFieldOfView(vertical_fov_degrees));
        }
        if aspect_ratio <= 0.0 || !aspect_ratio.is_finite() {
            return Err(ConfigError::InvalidAspectRatio(aspect_ratio));
        }
        if aperture < 0.0 || !aperture.is_finite() {
            return Err(ConfigError::InvalidAperture(aperture));
        }
        if focus_distance <= 0.0 || !focus_distance.is_finite() {
            return Err(ConfigError::InvalidFocusDistance(focus_distance));
        }

        // Viewport:
        // Doesn't really represent anything in the camera
        const FOCAL_LENGTH: f64 = 1.0;
        let fov = vertical_fov_degrees.to_radians();
        let viewport_height = 2.0 * FOCAL_LENGTH * (fov / 2.0).tan();
        let viewport_width = aspect_ratio * viewport_height;

        // Local coordinate system:
        // Camera faces along -z
        let view = origin - look_target;
        if view.near_zero() {
            return Err(ConfigError::DegenerateView("look-from and look-at coincide"));
        }
        let camera_z = view.normalized();
        let side = world_up.cross(camera_z);
        if side.near_zero() {
            return Err(ConfigError::DegenerateView(
                "up vector is parallel to the view direction",
            ));
        }
        let camera_x = side.normalized();
        let camera_y = camera_z.cross(camera_x);

        // Focus plane:
        // Virtual film plane in the world, where rays from anywhere on the lens pass through
        // the same world point for a given uv, and all objects are in focus.
        // Similar triangles scale the viewport out to the focus distance.
        let focus_plane_horizontal = (focus_distance / FOCAL_LENGTH) * viewport_width * camera_x;
        let focus_plane_vertical = (focus_distance / FOCAL_LENGTH) * viewport_height * camera_y;
        let focus_plane_lower_left_corner = origin
            - focus_plane_horizontal / 2.0
            - focus_plane_vertical / 2.0
            - focus_distance * camera_z;

        debug!(
            "camera at {} looking at {}, fov {} deg, aperture {}, focus distance {}",
            origin, look_target, vertical_fov_degrees, aperture, focus_distance
        );

        Ok(Self {
            origin,
            focus_plane_horizontal,
            focus_plane_vertical,
            focus_plane_lower_left_corner,
            camera_x,
            camera_y,
            lens_radius: aperture / 2.0,
        })
    }

    pub fn origin(&self) -> Point3 {
        self.origin
    }

    pub fn lens_radius(&self) -> f64 {
        self.lens_radius
    }

    /// Ray through the focus plane at `(u, v)`, both in [0, 1] from the lower left.
    /// The origin is jittered across the lens, blurring whatever is off the focus plane.
    pub fn get_ray(&self, u: f64, v: f64, rng: &mut dyn RngCore) -> Ray {
        let position_on_lens = if self.lens_radius > 0.0 {
            let jitter = self.lens_radius * sampling::random_in_unit_disc(rng);
            self.origin + self.camera_x * jitter.x() + self.camera_y * jitter.y()
        } else {
            self.origin
        };
        let position_on_focus_plane = self.focus_plane_lower_left_corner
            + u * self.focus_plane_horizontal
            + v * self.focus_plane_vertical;

        Ray::new(position_on_lens, position_on_focus_plane - position_on_lens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn pinhole(aspect_ratio: f64) -> Camera {
        Camera::new(
            Point3::zero(),
            Point3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 1.0, 0.0),
            90.0,
            aspect_ratio,
            0.0,
            1.0,
        )
        .unwrap()
    }

    fn assert_close(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn pinhole_maps_corners_onto_viewport() {
        let camera = pinhole(2.0);
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        // 90 degree fov gives a viewport of height 2 at distance 1
        assert_close(
            camera.get_ray(0.5, 0.5, &mut rng).direction(),
            Vec3::new(0.0, 0.0, -1.0),
        );
        assert_close(
            camera.get_ray(0.0, 0.0, &mut rng).direction(),
            Vec3::new(-2.0, -1.0, -1.0),
        );
        assert_close(
            camera.get_ray(1.0, 1.0, &mut rng).direction(),
            Vec3::new(2.0, 1.0, -1.0),
        );
        assert_eq!(camera.get_ray(0.2, 0.7, &mut rng).origin(), Point3::zero());
    }

    #[test]
    fn aperture_rays_converge_on_focus_plane() {
        let look_from = Point3::new(3.0, 3.0, 2.0);
        let look_at = Point3::new(0.0, 0.0, -1.0);
        let focus_distance = (look_from - look_at).length();
        let camera = Camera::new(
            look_from,
            look_at,
            Vec3::new(0.0, 1.0, 0.0),
            20.0,
            16.0 / 9.0,
            2.0,
            focus_distance,
        )
        .unwrap();
        assert_eq!(camera.lens_radius(), 1.0);

        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..100 {
            let ray = camera.get_ray(0.5, 0.5, &mut rng);
            // Every lens sample stays on the lens and aims at the focused target
            assert!((ray.origin() - camera.origin()).length() < 1.0 + 1e-9);
            assert_close(ray.at(1.0), look_at);
        }
    }

    #[test]
    fn rejects_invalid_configuration() {
        let from = Point3::zero();
        let at = Point3::new(0.0, 0.0, -1.0);
        let up = Vec3::new(0.0, 1.0, 0.0);

        assert_eq!(
            Camera::new(from, at, up, 90.0, 0.0, 0.0, 1.0).err(),
            Some(ConfigError::InvalidAspectRatio(0.0))
        );
        assert_eq!(
            Camera::new(from, at, up, 180.0, 1.0, 0.0, 1.0).err(),
            Some(ConfigError::InvalidFieldOfView(180.0))
        );
        assert_eq!(
            Camera::new(from, at, up, 90.0, 1.0, -1.0, 1.0).err(),
            Some(ConfigError::InvalidAperture(-1.0))
        );
        assert_eq!(
            Camera::new(from, at, up, 90.0, 1.0, 0.0, 0.0).err(),
            Some(ConfigError::InvalidFocusDistance(0.0))
        );
        assert!(matches!(
            Camera::new(from, from, up, 90.0, 1.0, 0.0, 1.0),
            Err(ConfigError::DegenerateView(_))
        ));
        assert!(matches!(
            Camera::new(from, Point3::new(0.0, 5.0, 0.0), up, 90.0, 1.0, 0.0, 1.0),
            Err(ConfigError::DegenerateView(_))
        ));
    }
}
