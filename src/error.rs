use thiserror::Error;

/// Everything that can go wrong before the carver touches a pixel.
/// Validation happens up front: when a carve fails, the caller's
/// image has not been read past its dimensions, let alone mutated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarveError {
    /// The input has a zero dimension; there is nothing to carve.
    #[error("cannot carve a {width}x{height} image; both dimensions must be nonzero")]
    EmptyImage { width: u32, height: u32 },

    /// A direction flag that parsed to neither of the two seam
    /// orientations.
    #[error("unknown seam direction `{0}`; expected `vertical` or `horizontal`")]
    UnknownDirection(String),
}
