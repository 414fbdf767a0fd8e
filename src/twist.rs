use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpatiaError};
use crate::vector::Vector3;
use crate::wrench::Wrench;
use crate::DEFAULT_EPSILON;

/// A six-component rigid-body velocity: linear velocity `vel` and angular
/// velocity `rot`.
///
/// Indexed access spans both halves: slots 0–2 address `vel`, slots 3–5
/// address `rot`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Twist {
    /// Linear velocity of the reference point.
    pub vel: Vector3,
    /// Angular velocity of the body.
    pub rot: Vector3,
}

impl Twist {
    /// Creates a twist from its linear and angular parts.
    #[must_use]
    pub fn new(vel: Vector3, rot: Vector3) -> Self {
        Self { vel, rot }
    }

    /// The zero twist.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Returns the component at `index` in `[0, 6)`.
    ///
    /// # Errors
    ///
    /// Returns [`SpatiaError::IndexOutOfRange`] for any index outside
    /// `[0, 6)`, including every negative index.
    pub fn get(&self, index: isize) -> Result<f64> {
        match index {
            0..=2 => self.vel.get(index),
            3..=5 => self.rot.get(index - 3),
            _ => Err(SpatiaError::IndexOutOfRange { index, len: 6 }),
        }
    }

    /// Sets the component at `index` in `[0, 6)`.
    ///
    /// # Errors
    ///
    /// Returns [`SpatiaError::IndexOutOfRange`] for any index outside
    /// `[0, 6)`, including every negative index.
    pub fn set(&mut self, index: isize, value: f64) -> Result<()> {
        match index {
            0..=2 => self.vel.set(index, value),
            3..=5 => self.rot.set(index - 3, value),
            _ => Err(SpatiaError::IndexOutOfRange { index, len: 6 }),
        }
    }

    /// Transfers the twist to another point rigidly attached to the same
    /// body: `vel' = vel + rot × p`, angular velocity unchanged.
    #[must_use]
    pub fn ref_point(&self, p: &Vector3) -> Self {
        Self {
            vel: self.vel + self.rot.cross(p),
            rot: self.rot,
        }
    }

    /// The twist–wrench pairing `dot(vel, force) + dot(rot, torque)` —
    /// the instantaneous power of the wrench acting along this twist.
    ///
    /// Symmetric with [`Wrench::dot`].
    #[must_use]
    pub fn dot(&self, w: &Wrench) -> f64 {
        self.vel.dot(&w.force) + self.rot.dot(&w.torque)
    }

    /// Flips the sign of all six components in place.
    pub fn reverse_sign(&mut self) {
        self.vel.reverse_sign();
        self.rot.reverse_sign();
    }

    /// Resets all six components to zero in place.
    pub fn set_to_zero(&mut self) {
        self.vel.set_to_zero();
        self.rot.set_to_zero();
    }
}

impl Add for Twist {
    type Output = Twist;

    fn add(self, rhs: Twist) -> Twist {
        Twist::new(self.vel + rhs.vel, self.rot + rhs.rot)
    }
}

impl Sub for Twist {
    type Output = Twist;

    fn sub(self, rhs: Twist) -> Twist {
        Twist::new(self.vel - rhs.vel, self.rot - rhs.rot)
    }
}

impl Neg for Twist {
    type Output = Twist;

    fn neg(self) -> Twist {
        Twist::new(-self.vel, -self.rot)
    }
}

impl Mul<f64> for Twist {
    type Output = Twist;

    fn mul(self, rhs: f64) -> Twist {
        Twist::new(self.vel * rhs, self.rot * rhs)
    }
}

impl Mul<Twist> for f64 {
    type Output = Twist;

    fn mul(self, rhs: Twist) -> Twist {
        rhs * self
    }
}

impl Div<f64> for Twist {
    type Output = Twist;

    fn div(self, rhs: f64) -> Twist {
        Twist::new(self.vel / rhs, self.rot / rhs)
    }
}

impl AddAssign for Twist {
    fn add_assign(&mut self, rhs: Twist) {
        self.vel += rhs.vel;
        self.rot += rhs.rot;
    }
}

impl SubAssign for Twist {
    fn sub_assign(&mut self, rhs: Twist) {
        self.vel -= rhs.vel;
        self.rot -= rhs.rot;
    }
}

impl AbsDiffEq for Twist {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        DEFAULT_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.vel.abs_diff_eq(&other.vel, epsilon) && self.rot.abs_diff_eq(&other.rot, epsilon)
    }
}
