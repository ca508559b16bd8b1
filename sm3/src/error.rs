use core::fmt;

/// Errors surfaced by [`Sm3`](crate::Sm3).
///
/// Hashing itself cannot fail; the only fallible path is growing a
/// caller-supplied buffer to hold the digest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Memory for the output could not be reserved.
    Allocation,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Allocation => f.write_str("sm3: unable to allocate output buffer"),
        }
    }
}

#[cfg(feature = "alloc")]
impl From<alloc::collections::TryReserveError> for Error {
    fn from(_: alloc::collections::TryReserveError) -> Self {
        Error::Allocation
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
