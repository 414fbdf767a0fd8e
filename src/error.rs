use thiserror::Error;

/// Top-level error type for the spatia spatial-algebra library.
///
/// The only failure mode in this crate is an out-of-range indexed access.
/// Indices are taken as `isize` so that negative values are representable
/// and rejected explicitly — there is no wraparound or offset-from-the-end
/// interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpatiaError {
    #[error("index {index} is out of range [0, {len})")]
    IndexOutOfRange { index: isize, len: usize },

    #[error("element index ({row}, {col}) is out of range [0, 3) x [0, 3)")]
    ElementOutOfRange { row: isize, col: isize },
}

/// Convenience type alias for results using [`SpatiaError`].
pub type Result<T> = std::result::Result<T, SpatiaError>;
