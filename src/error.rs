use std::collections::TryReserveError;
use std::sync::PoisonError;

use libc::c_int;
use thiserror::Error;

/// A result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// All errors `mt_random` can produce.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The handle was never issued or has already been released.
    #[error("invalid handle {0:#x}")]
    InvalidHandle(usize),

    /// Storage for a new generator could not be obtained.
    #[error("failed to allocate generator: {0}")]
    AllocationFailure(#[from] TryReserveError),

    /// Another thread panicked while holding the handle registry.
    #[error("handle registry lock poisoned")]
    LockPoisoned,

    /// An output pointer passed across the C boundary was null.
    #[error("null output pointer")]
    NullPointer,

    /// A uniform range that is empty or not finite.
    #[error("invalid range [{low}, {high})")]
    InvalidRange { low: f64, high: f64 },

    /// A seed string that is neither decimal nor `0x` hexadecimal.
    #[error("invalid seed `{0}`")]
    InvalidSeed(String),
}

// Convert all poisoned lock errors to a simplified `LockPoisoned`
impl<T> From<PoisonError<T>> for Error {
    fn from(_: PoisonError<T>) -> Self {
        Self::LockPoisoned
    }
}

/// Status codes returned across the C boundary.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Ok = 0,
    InvalidHandle = 1,
    AllocationFailure = 2,
    LockPoisoned = 3,
    InvalidArgument = 4,
}

impl Status {
    pub fn code(self) -> c_int {
        self as c_int
    }

    pub fn from_code(code: c_int) -> Option<Self> {
        match code {
            0 => Some(Self::Ok),
            1 => Some(Self::InvalidHandle),
            2 => Some(Self::AllocationFailure),
            3 => Some(Self::LockPoisoned),
            4 => Some(Self::InvalidArgument),
            _ => None,
        }
    }

    /// Static NUL-terminated description, suitable for handing to C.
    pub fn message(self) -> &'static std::ffi::CStr {
        match self {
            Self::Ok => c"ok",
            Self::InvalidHandle => c"invalid handle",
            Self::AllocationFailure => c"allocation failure",
            Self::LockPoisoned => c"handle registry lock poisoned",
            Self::InvalidArgument => c"invalid argument",
        }
    }
}

impl From<&Error> for Status {
    fn from(err: &Error) -> Self {
        match err {
            Error::InvalidHandle(_) => Self::InvalidHandle,
            Error::AllocationFailure(_) => Self::AllocationFailure,
            Error::LockPoisoned => Self::LockPoisoned,
            Error::NullPointer | Error::InvalidRange { .. } | Error::InvalidSeed(_) => {
                Self::InvalidArgument
            }
        }
    }
}
