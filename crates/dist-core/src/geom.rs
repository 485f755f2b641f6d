use crate::real::Real;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3<T: Real> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Real> Vec3<T> {
    #[inline(always)]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    pub fn from_array(v: [T; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    pub fn to_array(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// Triple `i` of a flat `[x0, y0, z0, x1, ...]` buffer.
    #[inline(always)]
    pub fn load(coords: &[T], i: usize) -> Self {
        let base = 3 * i;
        Self::new(coords[base], coords[base + 1], coords[base + 2])
    }

    #[inline(always)]
    pub fn store(self, coords: &mut [T], i: usize) {
        let base = 3 * i;
        coords[base] = self.x;
        coords[base + 1] = self.y;
        coords[base + 2] = self.z;
    }

    #[inline(always)]
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline(always)]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline(always)]
    pub fn norm2(self) -> T {
        self.dot(self)
    }

    #[inline(always)]
    pub fn norm(self) -> T {
        self.norm2().sqrt()
    }

    #[inline(always)]
    pub fn scale(self, s: T) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }

    #[inline(always)]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    #[inline(always)]
    pub fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}
