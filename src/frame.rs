use std::ops::Mul;

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::rotation::Rotation;
use crate::twist::Twist;
use crate::vector::Vector3;
use crate::wrench::Wrench;
use crate::DEFAULT_EPSILON;

/// A rigid pose: an orientation plus a translation.
///
/// Acts on points as the affine map `orientation · v + origin`. On twists
/// and wrenches it rotates both component vectors by the orientation only;
/// no reference-point coupling is applied implicitly — shift the reference
/// point explicitly with [`Twist::ref_point`] / [`Wrench::ref_point`] when
/// needed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    /// Orientation of the pose.
    pub orientation: Rotation,
    /// Position of the pose's origin.
    pub origin: Vector3,
}

impl Frame {
    /// Creates a frame from an orientation and an origin.
    #[must_use]
    pub fn new(orientation: Rotation, origin: Vector3) -> Self {
        Self {
            orientation,
            origin,
        }
    }

    /// The identity pose: identity orientation, zero origin.
    #[must_use]
    pub fn identity() -> Self {
        Self::default()
    }

    /// The inverse pose `(orientationᵀ, −orientationᵀ · origin)`.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let orientation = self.orientation.inverse();
        Self {
            orientation,
            origin: -(orientation * self.origin),
        }
    }

    /// Applies the inverse pose to a point.
    ///
    /// Identical in result to `self.inverse() * v`.
    #[must_use]
    pub fn inv_apply(&self, v: &Vector3) -> Vector3 {
        self.orientation.inv_apply(&(*v - self.origin))
    }

    /// Applies the inverse pose to a twist (inverse orientation on both
    /// halves).
    ///
    /// Identical in result to `self.inverse() * t`.
    #[must_use]
    pub fn inv_apply_twist(&self, t: &Twist) -> Twist {
        self.orientation.inv_apply_twist(t)
    }

    /// Applies the inverse pose to a wrench (inverse orientation on both
    /// halves).
    ///
    /// Identical in result to `self.inverse() * w`.
    #[must_use]
    pub fn inv_apply_wrench(&self, w: &Wrench) -> Wrench {
        self.orientation.inv_apply_wrench(w)
    }
}

impl Mul for Frame {
    type Output = Frame;

    /// Composes two poses: orientations multiply and the origin composes as
    /// `orientation1 · origin2 + origin1`.
    fn mul(self, rhs: Frame) -> Frame {
        Frame {
            orientation: self.orientation * rhs.orientation,
            origin: self.orientation * rhs.origin + self.origin,
        }
    }
}

impl Mul<Vector3> for Frame {
    type Output = Vector3;

    /// The full rigid motion `orientation · v + origin`. Unlike a pure
    /// rotation this does not preserve the norm of `v`.
    fn mul(self, rhs: Vector3) -> Vector3 {
        self.orientation * rhs + self.origin
    }
}

impl Mul<Twist> for Frame {
    type Output = Twist;

    fn mul(self, rhs: Twist) -> Twist {
        self.orientation * rhs
    }
}

impl Mul<Wrench> for Frame {
    type Output = Wrench;

    fn mul(self, rhs: Wrench) -> Wrench {
        self.orientation * rhs
    }
}

impl AbsDiffEq for Frame {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        DEFAULT_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.orientation.abs_diff_eq(&other.orientation, epsilon)
            && self.origin.abs_diff_eq(&other.origin, epsilon)
    }
}
