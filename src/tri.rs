use crate::uniform::Uniform;
use geom::{Position, Triangle, Vec3};
use rand::Rng;

impl<T: Triangle> Uniform for T {
    fn uniform<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        let (a, b, c) = self.positions();
        let bary = sample_bary(rng);

        bary[0] * a.position() + bary[1] * b.position() + bary[2] * c.position()
    }
}

/// Barycentric coordinates distributed uniformly over a triangle.
///
/// Taking the square root of the first draw compensates for the triangle
/// widening linearly away from its first vertex.
pub fn sample_bary<R: Rng + ?Sized>(rng: &mut R) -> [f32; 3] {
    let u = rng.next_f32();
    let v = rng.next_f32();

    let sqrt_u = u.sqrt();

    [1.0 - sqrt_u, sqrt_u * (1.0 - v), sqrt_u * v]
}
