use crate::error::{DistError, DistResult};
use crate::geom::Vec3;
use crate::pbc_utils::apply_pbc;
use crate::real::Real;

/// Axis-aligned periodic cell with its origin at zero.
///
/// Edge lengths are validated once here; kernels taking an `&OrthoBox` never re-check
/// them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrthoBox<T: Real> {
    lengths: [T; 3],
}

impl<T: Real> OrthoBox<T> {
    pub fn new(lengths: [T; 3]) -> DistResult<Self> {
        if lengths.iter().any(|&v| !v.is_finite() || v <= T::ZERO) {
            return Err(DistError::Invalid(format!(
                "box lengths must be finite and positive, got [{}, {}, {}]",
                lengths[0], lengths[1], lengths[2]
            )));
        }
        Ok(Self { lengths })
    }

    pub fn cubic(length: T) -> DistResult<Self> {
        Self::new([length; 3])
    }

    #[inline(always)]
    pub fn lengths(&self) -> [T; 3] {
        self.lengths
    }

    /// Minimum-image displacement `a - b`.
    #[inline(always)]
    pub fn delta(&self, a: Vec3<T>, b: Vec3<T>) -> Vec3<T> {
        apply_pbc(a.sub(b), self.lengths)
    }
}
