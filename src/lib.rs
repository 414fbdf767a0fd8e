//! Spatial-algebra primitives for rigid-body kinematics and dynamics.
//!
//! This crate provides the core geometric value types consumed by
//! kinematics/dynamics solvers: [`Vector3`], [`Rotation`] (an orthonormal
//! 3x3 matrix), [`Frame`] (a rigid pose), and the six-component velocity
//! and force quantities [`Twist`] and [`Wrench`].
//!
//! All types are plain `Copy` values with no shared state; mutating one
//! instance is never observable through another. Exact equality is the
//! derived `==`; tolerance comparison goes through the [`approx`] traits
//! ([`approx::AbsDiffEq`] and [`approx::RelativeEq`]) with a default
//! epsilon of [`DEFAULT_EPSILON`].

pub mod error;
pub mod frame;
pub mod rotation;
pub mod twist;
pub mod vector;
pub mod wrench;

pub use error::{Result, SpatiaError};
pub use frame::Frame;
pub use rotation::Rotation;
pub use twist::Twist;
pub use vector::Vector3;
pub use wrench::Wrench;

/// Default tolerance for approximate comparisons of all value types.
pub const DEFAULT_EPSILON: f64 = 1e-6;
