use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpatiaError};
use crate::twist::Twist;
use crate::vector::Vector3;
use crate::DEFAULT_EPSILON;

/// A six-component generalized force: `force` and `torque`.
///
/// Dual to [`Twist`] under the pairing [`Wrench::dot`]. Indexed access spans
/// both halves: slots 0–2 address `force`, slots 3–5 address `torque`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Wrench {
    /// Force applied at the reference point.
    pub force: Vector3,
    /// Torque about the reference point.
    pub torque: Vector3,
}

impl Wrench {
    /// Creates a wrench from its force and torque parts.
    #[must_use]
    pub fn new(force: Vector3, torque: Vector3) -> Self {
        Self { force, torque }
    }

    /// The zero wrench.
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
            0..=2 => self.force.get(index),
            3..=5 => self.torque.get(index - 3),
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
            0..=2 => self.force.set(index, value),
            3..=5 => self.torque.set(index - 3, value),
            _ => Err(SpatiaError::IndexOutOfRange { index, len: 6 }),
        }
    }

    /// Transfers the wrench to another point rigidly attached to the same
    /// body: force unchanged, `torque' = torque + force × p`.
    ///
    /// The dual of [`Twist::ref_point`].
    #[must_use]
    pub fn ref_point(&self, p: &Vector3) -> Self {
        Self {
            force: self.force,
            torque: self.torque + self.force.cross(p),
        }
    }

    /// The twist–wrench pairing `dot(vel, force) + dot(rot, torque)`.
    ///
    /// Symmetric with [`Twist::dot`]: `w.dot(&t) == t.dot(&w)`.
    #[must_use]
    pub fn dot(&self, t: &Twist) -> f64 {
        self.force.dot(&t.vel) + self.torque.dot(&t.rot)
    }

    /// Flips the sign of all six components in place.
    pub fn reverse_sign(&mut self) {
        self.force.reverse_sign();
        self.torque.reverse_sign();
    }

    /// Resets all six components to zero in place.
    pub fn set_to_zero(&mut self) {
        self.force.set_to_zero();
        self.torque.set_to_zero();
    }
}

impl Add for Wrench {
    type Output = Wrench;

    fn add(self, rhs: Wrench) -> Wrench {
        Wrench::new(self.force + rhs.force, self.torque + rhs.torque)
    }
}

impl Sub for Wrench {
    type Output = Wrench;

    fn sub(self, rhs: Wrench) -> Wrench {
        Wrench::new(self.force - rhs.force, self.torque - rhs.torque)
    }
}

impl Neg for Wrench {
    type Output = Wrench;

    fn neg(self) -> Wrench {
        Wrench::new(-self.force, -self.torque)
    }
}

impl Mul<f64> for Wrench {
    type Output = Wrench;

    fn mul(self, rhs: f64) -> Wrench {
        Wrench::new(self.force * rhs, self.torque * rhs)
    }
}

impl Mul<Wrench> for f64 {
    type Output = Wrench;

    fn mul(self, rhs: Wrench) -> Wrench {
        rhs * self
    }
}

impl Div<f64> for Wrench {
    type Output = Wrench;

    fn div(self, rhs: f64) -> Wrench {
        Wrench::new(self.force / rhs, self.torque / rhs)
    }
}

impl AddAssign for Wrench {
    fn add_assign(&mut self, rhs: Wrench) {
        self.force += rhs.force;
        self.torque += rhs.torque;
    }
}

impl SubAssign for Wrench {
    fn sub_assign(&mut self, rhs: Wrench) {
        self.force -= rhs.force;
        self.torque -= rhs.torque;
    }
}

impl AbsDiffEq for Wrench {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        DEFAULT_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.force.abs_diff_eq(&other.force, epsilon)
            && self.torque.abs_diff_eq(&other.torque, epsilon)
    }
}
