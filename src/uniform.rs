use geom::Vec3;
use rand::Rng;

/// Samples any point on the surface of the implementer.
/// All possible points have approximately equal probability.
pub trait Uniform {
    fn uniform<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3;
}
