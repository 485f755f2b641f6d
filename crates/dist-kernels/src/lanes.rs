//! Structure-of-arrays lane vectors for the batch kernels.
//!
//! A [`LaneVec3`] holds `LANES` triples split into x, y and z arrays so that each
//! arithmetic step is a fixed-length elementwise loop the compiler can lower to vector
//! instructions. Every lane operation performs the same floating-point operations in
//! the same order as its scalar counterpart on [`Vec3`], so both paths give
//! bit-identical results with or without a box.

use dist_core::{minimum_image, OrthoBox, Real, Vec3};

/// Elements per batch.
pub const LANES: usize = 8;

pub type Lanes<T> = [T; LANES];

#[inline(always)]
fn map<T: Real>(f: impl Fn(usize) -> T) -> Lanes<T> {
    std::array::from_fn(f)
}

#[derive(Clone, Copy, Debug)]
pub struct LaneVec3<T: Real> {
    pub x: Lanes<T>,
    pub y: Lanes<T>,
    pub z: Lanes<T>,
}

impl<T: Real> LaneVec3<T> {
    /// Deinterleave `LANES` consecutive triples from `block[..3 * LANES]`.
    #[inline(always)]
    pub fn load(block: &[T]) -> Self {
        let block = &block[..3 * LANES];
        Self {
            x: map(|l| block[3 * l]),
            y: map(|l| block[3 * l + 1]),
            z: map(|l| block[3 * l + 2]),
        }
    }

    #[inline(always)]
    pub fn splat(v: Vec3<T>) -> Self {
        Self {
            x: [v.x; LANES],
            y: [v.y; LANES],
            z: [v.z; LANES],
        }
    }

    #[inline(always)]
    pub fn sub(self, o: Self) -> Self {
        Self {
            x: map(|l| self.x[l] - o.x[l]),
            y: map(|l| self.y[l] - o.y[l]),
            z: map(|l| self.z[l] - o.z[l]),
        }
    }

    /// Minimum image per lane, same division as [`OrthoBox::delta`].
    #[inline(always)]
    pub fn min_image(self, box_: &OrthoBox<T>) -> Self {
        let [lx, ly, lz] = box_.lengths();
        Self {
            x: map(|l| minimum_image(self.x[l], lx)),
            y: map(|l| minimum_image(self.y[l], ly)),
            z: map(|l| minimum_image(self.z[l], lz)),
        }
    }

    #[inline(always)]
    pub fn dot(self, o: Self) -> Lanes<T> {
        map(|l| self.x[l] * o.x[l] + self.y[l] * o.y[l] + self.z[l] * o.z[l])
    }

    #[inline(always)]
    pub fn cross(self, o: Self) -> Self {
        Self {
            x: map(|l| self.y[l] * o.z[l] - self.z[l] * o.y[l]),
            y: map(|l| self.z[l] * o.x[l] - self.x[l] * o.z[l]),
            z: map(|l| self.x[l] * o.y[l] - self.y[l] * o.x[l]),
        }
    }

    #[inline(always)]
    pub fn scale(self, s: Lanes<T>) -> Self {
        Self {
            x: map(|l| self.x[l] * s[l]),
            y: map(|l| self.y[l] * s[l]),
            z: map(|l| self.z[l] * s[l]),
        }
    }

    #[inline(always)]
    pub fn norm(self) -> Lanes<T> {
        map(|l| (self.x[l] * self.x[l] + self.y[l] * self.y[l] + self.z[l] * self.z[l]).sqrt())
    }
}

/// Lane form of [`dist_core::angle_from_vectors`].
#[inline(always)]
pub fn angles<T: Real>(v1: LaneVec3<T>, v2: LaneVec3<T>) -> Lanes<T> {
    let x = v1.dot(v2);
    let y = v1.cross(v2).norm();
    map(|l| y[l].atan2(x[l]))
}

/// Lane form of [`dist_core::dihedral_from_vectors`]. Lanes whose `b1` is zero give 0.
#[inline(always)]
pub fn dihedrals<T: Real>(b0: LaneVec3<T>, b1: LaneVec3<T>, b2: LaneVec3<T>) -> Lanes<T> {
    let n = b1.norm();
    let b1n = b1.scale(map(|l| T::ONE / n[l]));
    let v = b0.sub(b1n.scale(b0.dot(b1n)));
    let w = b2.sub(b1n.scale(b2.dot(b1n)));
    let x = v.dot(w);
    let y = b1n.cross(v).dot(w);
    map(|l| if n[l] == T::ZERO { T::ZERO } else { y[l].atan2(x[l]) })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(offset: f64) -> Vec<f64> {
        (0..3 * LANES).map(|k| k as f64 * 0.25 + offset).collect()
    }

    #[test]
    fn load_deinterleaves() {
        let b = block(0.0);
        let v = LaneVec3::load(&b);
        for l in 0..LANES {
            assert_eq!(Vec3::new(v.x[l], v.y[l], v.z[l]), Vec3::load(&b, l));
        }
    }

    #[test]
    fn lane_norm_matches_scalar_bits() {
        let a = block(0.3);
        let b = block(-1.7);
        let lanes = LaneVec3::load(&a).sub(LaneVec3::load(&b)).norm();
        for l in 0..LANES {
            let s = Vec3::load(&a, l).sub(Vec3::load(&b, l)).norm();
            assert_eq!(lanes[l].to_bits(), s.to_bits());
        }
    }

    #[test]
    fn lane_min_image_matches_box_delta_bits() {
        let box_ = OrthoBox::new([1.73f32, 10.0, 2.5]).unwrap();
        let h = f32::from_bits((0.5 * 1.73f32).to_bits() - 1);
        let mut a = vec![0.0f32; 3 * LANES];
        for l in 0..LANES {
            let s = if l % 2 == 0 { 1.0 } else { -1.0 };
            Vec3::new(s * h, 4.99 * s + l as f32 * 7.0, 1.25 * l as f32).store(&mut a, l);
        }
        let b = vec![0.0f32; 3 * LANES];
        let lanes = LaneVec3::load(&a).sub(LaneVec3::load(&b)).min_image(&box_);
        for l in 0..LANES {
            let d = box_.delta(Vec3::load(&a, l), Vec3::load(&b, l));
            assert_eq!(lanes.x[l].to_bits(), d.x.to_bits(), "lane {l}");
            assert_eq!(lanes.y[l].to_bits(), d.y.to_bits(), "lane {l}");
            assert_eq!(lanes.z[l].to_bits(), d.z.to_bits(), "lane {l}");
            assert_eq!(d.x.abs(), h);
        }
    }

    #[test]
    fn splat_broadcasts() {
        let v = LaneVec3::splat(Vec3::new(1.0f32, 2.0, 3.0));
        assert!(v.x.iter().all(|&x| x == 1.0));
        assert!(v.z.iter().all(|&z| z == 3.0));
    }
}
