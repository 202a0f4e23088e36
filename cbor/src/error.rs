use super::value::MajorType;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("Incorrect type {0}")]
    TypeMismatch(MajorType),

    #[error("Unexpected map key {0}")]
    KeyMismatch(u64),

    #[error("Not enough data for encoded value")]
    Overrun,

    #[error("Integer magnitude does not fit in a signed 64-bit integer")]
    IntegerDecodeOverflow,

    #[error("Invalid minor-type value {0}")]
    IntegerEncoding(u8),

    #[error("{0} items are not supported")]
    Unimplemented(MajorType),

    #[error("Maximum recursion depth reached")]
    MaxRecursion,
}

impl Error {
    /// Stable numeric code for the error kind, 0 being reserved for success.
    pub fn code(&self) -> u8 {
        match self {
            Self::TypeMismatch(_) => 1,
            Self::KeyMismatch(_) => 2,
            Self::Overrun => 3,
            Self::IntegerDecodeOverflow => 4,
            Self::IntegerEncoding(_) => 5,
            Self::Unimplemented(_) => 6,
            Self::MaxRecursion => 7,
        }
    }

    /// Reports the error and the decoder location that raised it.
    ///
    /// Purely diagnostic: the error is returned unchanged.
    #[track_caller]
    pub(crate) fn raise(self) -> Self {
        tracing::trace!(
            code = self.code(),
            "Error {self:?} set on {}",
            core::panic::Location::caller()
        );
        self
    }
}
