use crate::geom::Vec3;
use crate::real::Real;

/// Shortest periodic image of a per-axis displacement: `d - l * round(d / l)`.
///
/// `round` takes any magnitude, so displacements many box lengths away fold back into
/// `[-l/2, l/2]` in one step.
#[inline(always)]
pub fn minimum_image<T: Real>(d: T, l: T) -> T {
    d - l * (d / l).round()
}

pub fn apply_pbc<T: Real>(d: Vec3<T>, lengths: [T; 3]) -> Vec3<T> {
    Vec3::new(
        minimum_image(d.x, lengths[0]),
        minimum_image(d.y, lengths[1]),
        minimum_image(d.z, lengths[2]),
    )
}
