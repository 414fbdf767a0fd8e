use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};
use nalgebra as na;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpatiaError};
use crate::DEFAULT_EPSILON;

/// Near-zero threshold for [`Vector3::normalize`].
///
/// A vector whose norm is below this value cannot be meaningfully scaled to
/// unit length; see [`Vector3::normalize`] for the documented fallback.
pub const NORM_EPSILON: f64 = 1e-10;

/// A 3D real-valued point or direction.
///
/// Thin domain wrapper around an [`nalgebra`] vector. Plain `Copy` value:
/// copies are fully independent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector3 {
    pub(crate) inner: na::Vector3<f64>,
}

impl Vector3 {
    /// Creates a vector from its three components.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            inner: na::Vector3::new(x, y, z),
        }
    }

    /// The zero vector.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            inner: na::Vector3::zeros(),
        }
    }

    /// Returns the x component.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.inner.x
    }

    /// Returns the y component.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.inner.y
    }

    /// Returns the z component.
    #[must_use]
    pub fn z(&self) -> f64 {
        self.inner.z
    }

    /// Sets the x component.
    pub fn set_x(&mut self, x: f64) {
        self.inner.x = x;
    }

    /// Sets the y component.
    pub fn set_y(&mut self, y: f64) {
        self.inner.y = y;
    }

    /// Sets the z component.
    pub fn set_z(&mut self, z: f64) {
        self.inner.z = z;
    }

    /// Returns the component at `index` (0 = x, 1 = y, 2 = z).
    ///
    /// # Errors
    ///
    /// Returns [`SpatiaError::IndexOutOfRange`] for any index outside
    /// `[0, 3)`, including every negative index.
    pub fn get(&self, index: isize) -> Result<f64> {
        match index {
            0 => Ok(self.inner.x),
            1 => Ok(self.inner.y),
            2 => Ok(self.inner.z),
            _ => Err(SpatiaError::IndexOutOfRange { index, len: 3 }),
        }
    }

    /// Sets the component at `index` (0 = x, 1 = y, 2 = z).
    ///
    /// # Errors
    ///
    /// Returns [`SpatiaError::IndexOutOfRange`] for any index outside
    /// `[0, 3)`, including every negative index.
    pub fn set(&mut self, index: isize, value: f64) -> Result<()> {
        match index {
            0 => self.inner.x = value,
            1 => self.inner.y = value,
            2 => self.inner.z = value,
            _ => return Err(SpatiaError::IndexOutOfRange { index, len: 3 }),
        }
        Ok(())
    }

    /// Dot product with another vector.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        self.inner.dot(&other.inner)
    }

    /// Cross product with another vector.
    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        Self {
            inner: self.inner.cross(&other.inner),
        }
    }

    /// Euclidean norm.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.inner.norm()
    }

    /// Scales the vector to unit length in place and returns the
    /// **pre-normalization** norm.
    ///
    /// Capture the norm from this return value if both are needed; after the
    /// call the stored norm is 1.
    ///
    /// If the norm is below [`NORM_EPSILON`] the direction is undefined: the
    /// vector is set to the unit x-axis and the original (near-zero) norm is
    /// still returned.
    pub fn normalize(&mut self) -> f64 {
        let n = self.inner.norm();
        if n < NORM_EPSILON {
            self.inner = na::Vector3::x();
        } else {
            self.inner /= n;
        }
        n
    }

    /// Flips the sign of every component in place.
    pub fn reverse_sign(&mut self) {
        self.inner = -self.inner;
    }

    /// Resets every component to zero in place.
    pub fn set_to_zero(&mut self) {
        self.inner = na::Vector3::zeros();
    }
}

impl Default for Vector3 {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3 {
            inner: self.inner + rhs.inner,
        }
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3 {
            inner: self.inner - rhs.inner,
        }
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3 { inner: -self.inner }
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: f64) -> Vector3 {
        Vector3 {
            inner: self.inner * rhs,
        }
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs * self
    }
}

impl Div<f64> for Vector3 {
    type Output = Vector3;

    fn div(self, rhs: f64) -> Vector3 {
        Vector3 {
            inner: self.inner / rhs,
        }
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Vector3) {
        self.inner += rhs.inner;
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Vector3) {
        self.inner -= rhs.inner;
    }
}

impl AbsDiffEq for Vector3 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        DEFAULT_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.inner.abs_diff_eq(&other.inner, epsilon)
    }
}

impl RelativeEq for Vector3 {
    fn default_max_relative() -> f64 {
        DEFAULT_EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.inner.relative_eq(&other.inner, epsilon, max_relative)
    }
}
