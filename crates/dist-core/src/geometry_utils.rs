use crate::geom::Vec3;
use crate::real::Real;

/// Length of a displacement vector.
#[inline(always)]
pub fn bond_length<T: Real>(d: Vec3<T>) -> T {
    (d.x * d.x + d.y * d.y + d.z * d.z).sqrt()
}

/// Angle between `v1` and `v2` in `[0, pi]`.
///
/// Uses `atan2(|v1 x v2|, v1 . v2)`, which keeps full precision near 0 and pi where
/// `acos` of the normalized dot product does not. A zero-length vector gives 0.
#[inline(always)]
pub fn angle_from_vectors<T: Real>(v1: Vec3<T>, v2: Vec3<T>) -> T {
    let x = v1.dot(v2);
    let xp = v1.cross(v2);
    let y = (xp.x * xp.x + xp.y * xp.y + xp.z * xp.z).sqrt();
    y.atan2(x)
}

/// Signed torsion in `(-pi, pi]` from `b0 = a - b`, `b1 = c - b`, `b2 = d - c`.
///
/// `b0` and `b2` are projected onto the plane normal to `b1`; the sign follows the
/// IUPAC convention. Returns 0 when `b1` has zero length.
#[inline(always)]
pub fn dihedral_from_vectors<T: Real>(b0: Vec3<T>, b1: Vec3<T>, b2: Vec3<T>) -> T {
    let n = b1.norm();
    if n == T::ZERO {
        return T::ZERO;
    }
    let b1n = b1.scale(T::ONE / n);
    let v = b0.sub(b1n.scale(b0.dot(b1n)));
    let w = b2.sub(b1n.scale(b2.dot(b1n)));
    let x = v.dot(w);
    let y = b1n.cross(v).dot(w);
    y.atan2(x)
}

/// `current - reference` folded into `[-pi, pi)`.
pub fn angle_diff<T: Real>(current: T, reference: T) -> T {
    let period = T::PI + T::PI;
    (current - reference + T::PI).rem_euclid(period) - T::PI
}
