use std::f64::consts::{FRAC_PI_2, PI};
use std::ops::Mul;

use approx::{AbsDiffEq, RelativeEq};
use nalgebra as na;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpatiaError};
use crate::twist::Twist;
use crate::vector::Vector3;
use crate::wrench::Wrench;
use crate::DEFAULT_EPSILON;

/// Angle threshold used when detecting singular configurations during
/// parameterization extraction.
const SINGULARITY_EPSILON: f64 = 1e-12;

/// Maps an index to a checked matrix axis, rejecting anything outside `[0, 3)`.
fn axis_index(index: isize) -> Option<usize> {
    match index {
        0 => Some(0),
        1 => Some(1),
        2 => Some(2),
        _ => None,
    }
}

/// An element of the 3D rotation group, stored as an orthonormal 3x3 matrix
/// with determinant +1.
///
/// Every constructor and conversion maintains orthonormality. The one
/// exception is [`Rotation::set`], which writes a raw element and leaves the
/// invariant to the caller; see its documentation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rotation {
    pub(crate) mat: na::Matrix3<f64>,
}

impl Rotation {
    /// Creates a rotation from nine components in row-major order.
    ///
    /// The components are taken as-is: if the rows/columns are not
    /// orthonormal the result is not a valid rotation.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        m00: f64,
        m01: f64,
        m02: f64,
        m10: f64,
        m11: f64,
        m12: f64,
        m20: f64,
        m21: f64,
        m22: f64,
    ) -> Self {
        Self {
            mat: na::Matrix3::new(m00, m01, m02, m10, m11, m12, m20, m21, m22),
        }
    }

    /// The identity rotation.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            mat: na::Matrix3::identity(),
        }
    }

    /// Rotation about the x-axis by `angle` radians.
    #[must_use]
    pub fn rot_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(1.0, 0.0, 0.0, 0.0, c, -s, 0.0, s, c)
    }

    /// Rotation about the y-axis by `angle` radians.
    #[must_use]
    pub fn rot_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, 0.0, s, 0.0, 1.0, 0.0, -s, 0.0, c)
    }

    /// Rotation about the z-axis by `angle` radians.
    #[must_use]
    pub fn rot_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0)
    }

    /// Builds a rotation from fixed-axis roll-pitch-yaw angles:
    /// `rot_z(yaw) * rot_y(pitch) * rot_x(roll)`.
    #[must_use]
    pub fn from_rpy(roll: f64, pitch: f64, yaw: f64) -> Self {
        let (sa, ca) = yaw.sin_cos();
        let (sb, cb) = pitch.sin_cos();
        let (sc, cc) = roll.sin_cos();
        Self::new(
            ca * cb,
            ca * sb * sc - sa * cc,
            ca * sb * cc + sa * sc,
            sa * cb,
            sa * sb * sc + ca * cc,
            sa * sb * cc - ca * sc,
            -sb,
            cb * sc,
            cb * cc,
        )
    }

    /// Extracts `(roll, pitch, yaw)` such that
    /// `Rotation::from_rpy(roll, pitch, yaw)` reproduces this rotation.
    ///
    /// At the `pitch = ±π/2` singularity roll and yaw are not independent;
    /// roll is reported as 0 and the remaining angle is folded into yaw.
    #[must_use]
    pub fn rpy(&self) -> (f64, f64, f64) {
        let m = &self.mat;
        let pitch = (-m[(2, 0)]).atan2((m[(0, 0)].powi(2) + m[(1, 0)].powi(2)).sqrt());
        if pitch.abs() > FRAC_PI_2 - SINGULARITY_EPSILON {
            let yaw = (-m[(0, 1)]).atan2(m[(1, 1)]);
            (0.0, pitch, yaw)
        } else {
            let roll = m[(2, 1)].atan2(m[(2, 2)]);
            let yaw = m[(1, 0)].atan2(m[(0, 0)]);
            (roll, pitch, yaw)
        }
    }

    /// Builds a rotation from Euler ZYX angles:
    /// `rot_z(alfa) * rot_y(beta) * rot_x(gamma)`.
    ///
    /// Same convention as [`Rotation::from_rpy`] with the argument order
    /// reversed.
    #[must_use]
    pub fn from_euler_zyx(alfa: f64, beta: f64, gamma: f64) -> Self {
        Self::from_rpy(gamma, beta, alfa)
    }

    /// Extracts the Euler ZYX angles `(alfa, beta, gamma)`.
    #[must_use]
    pub fn euler_zyx(&self) -> (f64, f64, f64) {
        let (roll, pitch, yaw) = self.rpy();
        (yaw, pitch, roll)
    }

    /// Builds a rotation from Euler ZYZ angles:
    /// `rot_z(alfa) * rot_y(beta) * rot_z(gamma)`.
    #[must_use]
    pub fn from_euler_zyz(alfa: f64, beta: f64, gamma: f64) -> Self {
        let (sa, ca) = alfa.sin_cos();
        let (sb, cb) = beta.sin_cos();
        let (sg, cg) = gamma.sin_cos();
        Self::new(
            ca * cb * cg - sa * sg,
            -ca * cb * sg - sa * cg,
            ca * sb,
            sa * cb * cg + ca * sg,
            -sa * cb * sg + ca * cg,
            sa * sb,
            -sb * cg,
            sb * sg,
            cb,
        )
    }

    /// Extracts the Euler ZYZ angles `(alfa, beta, gamma)` with
    /// `beta` in `[0, π]`.
    ///
    /// Near the `beta = 0` (or `beta = π`) singularity alfa and gamma rotate
    /// about the same axis: alfa is reported as 0 and the combined angle is
    /// folded into gamma. Close to (but not at) the singularity the third
    /// angle round-trips only to reduced floating precision — this is
    /// inherent to the parameterization, not a defect.
    #[must_use]
    pub fn euler_zyz(&self) -> (f64, f64, f64) {
        let m = &self.mat;
        if m[(2, 0)].abs() < SINGULARITY_EPSILON && m[(2, 1)].abs() < SINGULARITY_EPSILON {
            if m[(2, 2)] > 0.0 {
                (0.0, 0.0, m[(1, 0)].atan2(m[(0, 0)]))
            } else {
                (0.0, PI, (-m[(1, 0)]).atan2(-m[(0, 0)]))
            }
        } else {
            let alfa = m[(1, 2)].atan2(m[(0, 2)]);
            let beta = (m[(2, 0)].powi(2) + m[(2, 1)].powi(2))
                .sqrt()
                .atan2(m[(2, 2)]);
            let gamma = m[(2, 1)].atan2(-m[(2, 0)]);
            (alfa, beta, gamma)
        }
    }

    /// Builds a rotation of `angle` radians about `axis` (Rodrigues).
    ///
    /// The axis is normalized internally, so any positive multiple of the
    /// same axis yields an identical rotation. A near-zero axis falls back
    /// to the unit x-axis, matching [`Vector3::normalize`].
    #[allow(clippy::many_single_char_names)]
    #[must_use]
    pub fn from_axis_angle(axis: &Vector3, angle: f64) -> Self {
        let mut v = *axis;
        v.normalize();
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        let (x, y, z) = (v.x(), v.y(), v.z());

        #[allow(clippy::suspicious_operation_groupings)]
        Self::new(
            t * x * x + c,
            t * x * y - s * z,
            t * x * z + s * y,
            t * x * y + s * z,
            t * y * y + c,
            t * y * z - s * x,
            t * x * z - s * y,
            t * y * z + s * x,
            t * z * z + c,
        )
    }

    /// Extracts the `(unit axis, angle)` representation with the angle in
    /// `[0, π]`.
    ///
    /// The identity rotation has an arbitrary axis; the unit z-axis with
    /// angle 0 is returned. For a half-turn (angle π) the axis sign is
    /// likewise arbitrary and a deterministic choice is made.
    #[must_use]
    pub fn axis_angle(&self) -> (Vector3, f64) {
        let epsilon = DEFAULT_EPSILON;
        let epsilon2 = epsilon * 10.0;
        let m = &self.mat;

        if (m[(0, 1)] - m[(1, 0)]).abs() < epsilon
            && (m[(0, 2)] - m[(2, 0)]).abs() < epsilon
            && (m[(1, 2)] - m[(2, 1)]).abs() < epsilon
        {
            // Symmetric matrix: the angle is either 0 or π.
            if (m[(0, 1)] + m[(1, 0)]).abs() < epsilon2
                && (m[(0, 2)] + m[(2, 0)]).abs() < epsilon2
                && (m[(1, 2)] + m[(2, 1)]).abs() < epsilon2
                && (m[(0, 0)] + m[(1, 1)] + m[(2, 2)] - 3.0).abs() < epsilon2
            {
                return (Vector3::new(0.0, 0.0, 1.0), 0.0);
            }

            // Half-turn: recover the axis from the largest diagonal term.
            let xx = (m[(0, 0)] + 1.0) / 2.0;
            let yy = (m[(1, 1)] + 1.0) / 2.0;
            let zz = (m[(2, 2)] + 1.0) / 2.0;
            let xy = (m[(0, 1)] + m[(1, 0)]) / 4.0;
            let xz = (m[(0, 2)] + m[(2, 0)]) / 4.0;
            let yz = (m[(1, 2)] + m[(2, 1)]) / 4.0;
            let axis = if xx > yy && xx > zz {
                let x = xx.sqrt();
                Vector3::new(x, xy / x, xz / x)
            } else if yy > zz {
                let y = yy.sqrt();
                Vector3::new(xy / y, y, yz / y)
            } else {
                let z = zz.sqrt();
                Vector3::new(xz / z, yz / z, z)
            };
            return (axis, PI);
        }

        let f = (m[(0, 0)] + m[(1, 1)] + m[(2, 2)] - 1.0) / 2.0;
        let mut axis = Vector3::new(
            m[(2, 1)] - m[(1, 2)],
            m[(0, 2)] - m[(2, 0)],
            m[(1, 0)] - m[(0, 1)],
        );
        let sin_doubled = axis.normalize();
        (axis, (sin_doubled / 2.0).atan2(f))
    }

    /// Returns the element at `(row, col)`, each in `[0, 3)`.
    ///
    /// # Errors
    ///
    /// Returns [`SpatiaError::ElementOutOfRange`] if either axis is outside
    /// `[0, 3)`, including negative values.
    pub fn get(&self, row: isize, col: isize) -> Result<f64> {
        match (axis_index(row), axis_index(col)) {
            (Some(r), Some(c)) => Ok(self.mat[(r, c)]),
            _ => Err(SpatiaError::ElementOutOfRange { row, col }),
        }
    }

    /// Writes the element at `(row, col)`, each in `[0, 3)`.
    ///
    /// The matrix is **not** re-orthonormalized afterwards: writing raw
    /// elements can produce a matrix that is no longer a rotation, and
    /// restoring the invariant is the caller's responsibility.
    ///
    /// # Errors
    ///
    /// Returns [`SpatiaError::ElementOutOfRange`] if either axis is outside
    /// `[0, 3)`, including negative values.
    pub fn set(&mut self, row: isize, col: isize, value: f64) -> Result<()> {
        match (axis_index(row), axis_index(col)) {
            (Some(r), Some(c)) => {
                self.mat[(r, c)] = value;
                Ok(())
            }
            _ => Err(SpatiaError::ElementOutOfRange { row, col }),
        }
    }

    /// First basis column (the image of the x-axis).
    #[must_use]
    pub fn unit_x(&self) -> Vector3 {
        Vector3 {
            inner: self.mat.column(0).into_owned(),
        }
    }

    /// Second basis column (the image of the y-axis).
    #[must_use]
    pub fn unit_y(&self) -> Vector3 {
        Vector3 {
            inner: self.mat.column(1).into_owned(),
        }
    }

    /// Third basis column (the image of the z-axis).
    #[must_use]
    pub fn unit_z(&self) -> Vector3 {
        Vector3 {
            inner: self.mat.column(2).into_owned(),
        }
    }

    /// The inverse rotation — the matrix transpose, valid because the
    /// matrix is orthonormal.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            mat: self.mat.transpose(),
        }
    }

    /// Applies the inverse rotation to a vector.
    ///
    /// Identical in result to `self.inverse() * v`, computed without
    /// materializing the transpose.
    #[must_use]
    pub fn inv_apply(&self, v: &Vector3) -> Vector3 {
        Vector3 {
            inner: self.mat.tr_mul(&v.inner),
        }
    }

    /// Applies the inverse rotation to both halves of a twist.
    ///
    /// Identical in result to `self.inverse() * t`.
    #[must_use]
    pub fn inv_apply_twist(&self, t: &Twist) -> Twist {
        Twist::new(self.inv_apply(&t.vel), self.inv_apply(&t.rot))
    }

    /// Applies the inverse rotation to both halves of a wrench.
    ///
    /// Identical in result to `self.inverse() * w`.
    #[must_use]
    pub fn inv_apply_wrench(&self, w: &Wrench) -> Wrench {
        Wrench::new(self.inv_apply(&w.force), self.inv_apply(&w.torque))
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Rotation {
    type Output = Rotation;

    /// Composes two rotations in standard matrix order: the right operand
    /// is applied first.
    fn mul(self, rhs: Rotation) -> Rotation {
        Rotation {
            mat: self.mat * rhs.mat,
        }
    }
}

impl Mul<Vector3> for Rotation {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        Vector3 {
            inner: self.mat * rhs.inner,
        }
    }
}

impl Mul<Twist> for Rotation {
    type Output = Twist;

    /// Rotates both component vectors; a pure rotation contributes no
    /// translational term.
    fn mul(self, rhs: Twist) -> Twist {
        Twist::new(self * rhs.vel, self * rhs.rot)
    }
}

impl Mul<Wrench> for Rotation {
    type Output = Wrench;

    /// Rotates both component vectors; a pure rotation contributes no
    /// translational term.
    fn mul(self, rhs: Wrench) -> Wrench {
        Wrench::new(self * rhs.force, self * rhs.torque)
    }
}

impl AbsDiffEq for Rotation {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        DEFAULT_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.mat.abs_diff_eq(&other.mat, epsilon)
    }
}

impl RelativeEq for Rotation {
    fn default_max_relative() -> f64 {
        DEFAULT_EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.mat.relative_eq(&other.mat, epsilon, max_relative)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::{abs_diff_eq, assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    const TOL: f64 = 1e-10;

    fn deg(d: f64) -> f64 {
        d.to_radians()
    }

    /// Exercises the full rotation contract for the rotation built from the
    /// given RPY angles, acting on the given vector.
    fn check_rotation_laws(v: Vector3, a: f64, b: f64, c: f64) {
        let w = Wrench::new(Vector3::new(7.0, -1.0, 3.0), Vector3::new(2.0, -3.0, 3.0));
        let t = Twist::new(Vector3::new(6.0, 3.0, 5.0), Vector3::new(4.0, -2.0, 7.0));
        let r = Rotation::from_rpy(a, b, c);

        // Orthonormal basis.
        assert_abs_diff_eq!(r.unit_x().dot(&r.unit_x()), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(r.unit_y().dot(&r.unit_y()), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(r.unit_z().dot(&r.unit_z()), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(r.unit_x().dot(&r.unit_y()), 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(r.unit_x().dot(&r.unit_z()), 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(r.unit_y().dot(&r.unit_z()), 0.0, epsilon = 1e-15);

        let r2 = r;
        assert_eq!(r, r2);

        // Rotation preserves the norm.
        assert_relative_eq!((r * v).norm(), v.norm(), max_relative = 1e-14);

        // Fused inverse application agrees with the two-step form, for every
        // acted-upon type.
        assert_abs_diff_eq!(r.inv_apply(&(r * v)), v, epsilon = TOL);
        assert_abs_diff_eq!(r.inv_apply_twist(&(r * t)), t, epsilon = TOL);
        assert_abs_diff_eq!(r.inv_apply_wrench(&(r * w)), w, epsilon = TOL);
        assert_abs_diff_eq!(r * r.inv_apply(&v), v, epsilon = TOL);
        assert_abs_diff_eq!(r.inverse() * v, r.inv_apply(&v), epsilon = 1e-15);
        assert_abs_diff_eq!(r.inverse() * t, r.inv_apply_twist(&t), epsilon = 1e-15);
        assert_abs_diff_eq!(r.inverse() * w, r.inv_apply_wrench(&w), epsilon = 1e-15);

        // Identity and inverse laws.
        assert_eq!(r * Rotation::identity(), r);
        assert_eq!(Rotation::identity() * r, r);
        assert_abs_diff_eq!(r * r.inverse(), Rotation::identity(), epsilon = TOL);
        assert_abs_diff_eq!(r.inverse() * r, Rotation::identity(), epsilon = TOL);

        // Associativity over every acted-upon type.
        assert_abs_diff_eq!(r * (r * (r * v)), (r * r * r) * v, epsilon = TOL);
        assert_abs_diff_eq!(r * (r * (r * t)), (r * r * r) * t, epsilon = TOL);
        assert_abs_diff_eq!(r * (r * (r * w)), (r * r * r) * w, epsilon = TOL);

        // RPY round-trips exactly for these generic angles.
        let (ra, rb, rc) = r.rpy();
        assert_eq!((ra, rb, rc), (a, b, c));

        let r = Rotation::from_euler_zyx(a, b, c);
        assert_eq!(r.euler_zyx(), (a, b, c));

        let r = Rotation::from_euler_zyz(a, b, c);
        let (za, zb, zc) = r.euler_zyz();
        assert_eq!((za, zb), (a, b));
        assert_abs_diff_eq!(zc, c, epsilon = 1e-15);

        // Axis-angle round-trip, including invariance to positive axis
        // scaling.
        let (axis, angle) = r.axis_angle();
        assert_abs_diff_eq!(Rotation::from_axis_angle(&axis, angle), r, epsilon = TOL);
        assert_abs_diff_eq!(
            Rotation::from_axis_angle(&(axis * 1e20), angle),
            r,
            epsilon = TOL
        );
    }

    #[test]
    fn rotation_laws_generic_angles() {
        check_rotation_laws(Vector3::new(3.0, 4.0, 5.0), deg(10.0), deg(20.0), deg(30.0));
        check_rotation_laws(Vector3::zero(), deg(10.0), deg(20.0), deg(30.0));
    }

    #[test]
    fn rotation_laws_zero_angles() {
        check_rotation_laws(Vector3::new(3.0, 4.0, 5.0), 0.0, 0.0, 0.0);
        check_rotation_laws(Vector3::zero(), 0.0, 0.0, 0.0);
    }

    #[test]
    fn row_major_element_access() {
        let mut r = Rotation::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        for i in 0..3 {
            for j in 0..3 {
                #[allow(clippy::cast_precision_loss)]
                let expected = (3 * i + j + 1) as f64;
                assert_eq!(r.get(i, j).unwrap(), expected);
            }
        }
        assert_eq!(r.get(0, 0).unwrap(), 1.0);
        assert_eq!(r.get(2, 2).unwrap(), 9.0);

        for i in 0..3 {
            for j in 0..3 {
                #[allow(clippy::cast_precision_loss)]
                r.set(i, j, (3 * i + j) as f64).unwrap();
            }
        }
        for i in 0..3 {
            for j in 0..3 {
                #[allow(clippy::cast_precision_loss)]
                let expected = (3 * i + j) as f64;
                assert_eq!(r.get(i, j).unwrap(), expected);
            }
        }
    }

    #[test]
    fn element_access_out_of_range() {
        let mut r = Rotation::identity();
        for (row, col) in [(-1, 0), (0, -1), (3, 2), (2, 3)] {
            assert_eq!(
                r.get(row, col),
                Err(SpatiaError::ElementOutOfRange { row, col })
            );
            assert_eq!(
                r.set(row, col, 1.0),
                Err(SpatiaError::ElementOutOfRange { row, col })
            );
        }
        assert_eq!(r, Rotation::identity());
    }

    #[test]
    fn axis_rotations_match_rpy() {
        let angle = 0.7;
        assert_abs_diff_eq!(
            Rotation::rot_x(angle),
            Rotation::from_rpy(angle, 0.0, 0.0),
            epsilon = 1e-15
        );
        assert_abs_diff_eq!(
            Rotation::rot_y(angle),
            Rotation::from_rpy(0.0, angle, 0.0),
            epsilon = 1e-15
        );
        assert_abs_diff_eq!(
            Rotation::rot_z(angle),
            Rotation::from_rpy(0.0, 0.0, angle),
            epsilon = 1e-15
        );
    }

    #[test]
    fn rot_z_quarter_turn_maps_x_to_y() {
        let r = Rotation::rot_z(std::f64::consts::FRAC_PI_2);
        let v = r * Vector3::new(1.0, 0.0, 0.0);
        assert_abs_diff_eq!(v, Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-15);
    }

    #[test]
    fn identity_axis_angle_is_z_with_zero_angle() {
        let (axis, angle) = Rotation::identity().axis_angle();
        assert_eq!(angle, 0.0);
        assert_eq!(axis, Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn half_turn_axis_angle() {
        let r = Rotation::rot_x(PI);
        let (axis, angle) = r.axis_angle();
        assert_abs_diff_eq!(angle, PI, epsilon = 1e-10);
        assert_abs_diff_eq!(axis.norm(), 1.0, epsilon = 1e-10);
        assert_abs_diff_eq!(
            Rotation::from_axis_angle(&axis, angle),
            r,
            epsilon = 1e-10
        );
    }

    #[test]
    fn zyz_singularity_folds_into_gamma() {
        // At beta = 0 the z-rotations collapse into one angle, reported in
        // gamma with alfa pinned to 0.
        let r = Rotation::from_euler_zyz(0.3, 0.0, 0.4);
        let (alfa, beta, gamma) = r.euler_zyz();
        assert_eq!(alfa, 0.0);
        assert_eq!(beta, 0.0);
        assert_abs_diff_eq!(gamma, 0.7, epsilon = 1e-12);
        assert_abs_diff_eq!(Rotation::from_euler_zyz(alfa, beta, gamma), r, epsilon = 1e-12);
    }

    #[test]
    fn zyz_half_turn_singularity_pins_alfa() {
        let r = Rotation::from_euler_zyz(0.3, PI, 0.4);
        let (alfa, beta, _gamma) = r.euler_zyz();
        assert_eq!(alfa, 0.0);
        assert_eq!(beta, PI);
    }

    #[test]
    fn element_mutation_does_not_reorthonormalize() {
        let mut r = Rotation::identity();
        r.set(0, 0, 5.0).unwrap();
        assert_eq!(r.get(0, 0).unwrap(), 5.0);
        assert!(!abs_diff_eq!(r.unit_x().norm(), 1.0));
    }

    #[test]
    fn serde_roundtrip_is_exact() {
        let r = Rotation::from_rpy(0.3, -1.2, 2.5);
        let json = serde_json::to_string(&r).unwrap();
        let back: Rotation = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
