use super::vec::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generator for one independent stream of samples.
///
/// All streams share the render seed; the stream id keeps rows rendered on
/// different threads from producing correlated noise.
pub fn stream_rng(seed: u64, stream: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(stream);
    rng
}

/// Uniform sample in [0, 1).
pub fn uniform<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen()
}

/// Uniform sample in [min, max).
pub fn uniform_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    min + (max - min) * uniform(rng)
}

pub fn random_vector<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> Vec3 {
    Vec3::new(
        uniform_range(rng, min, max),
        uniform_range(rng, min, max),
        uniform_range(rng, min, max),
    )
}

/// Rejection sample from the enclosing cube; about half the candidates are kept.
pub fn random_in_unit_sphere<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    loop {
        let p = random_vector(rng, -1.0, 1.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Direction on the unit sphere. Added to a surface normal this gives a
/// cosine weighted scatter direction.
pub fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    loop {
        let p = random_in_unit_sphere(rng);
        // Too short to normalize safely
        if !p.near_zero() {
            return p.normalized();
        }
    }
}

/// Point in the unit disc on the z = 0 plane, for lens jitter.
pub fn random_in_unit_disc<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    loop {
        let p = Vec3::new(
            uniform_range(rng, -1.0, 1.0),
            uniform_range(rng, -1.0, 1.0),
            0.0,
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}
