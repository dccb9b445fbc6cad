// Copyright 2021-2026 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

use crate::mode::SeekMode;

/// Central result type of simseek.
pub type Result<T, E = SeekError> = core::result::Result<T, E>;

/// Central error type of simseek.
///
/// Every variant leaves the cursor of the [`Positioner`](crate::Positioner) untouched.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum SeekError {
    /// Adding `offset` to `cursor` does not fit into a signed 64-bit position.
    #[error("adding offset {offset} to cursor {cursor} overflows a signed 64-bit position")]
    Overflow { cursor: i64, offset: i64 },
    /// The seek would end up before the first byte of the file.
    #[error("seeking to the negative position {position} is invalid")]
    NegativePosition { position: i64 },
    /// The raw `whence` argument does not denote any [`SeekMode`].
    #[error("whence value {whence} does not denote a seek mode")]
    InvalidWhence { whence: i32 },
    /// The seek mode is recognized, but not implemented.
    #[error("seek mode {mode} is not supported")]
    Unsupported { mode: SeekMode },
}

/// Coarse classification of a [`SeekError`], mirroring the error codes of `lseek`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SeekErrorKind {
    /// Arithmetic wraparound was detected while adding to the cursor.
    Overflow,
    /// A negative resulting position or an unknown mode.
    InvalidArgument,
    /// A mode that is recognized, but not implemented.
    Unsupported,
}

impl SeekError {
    /// Returns the [`SeekErrorKind`] of this error.
    pub fn kind(&self) -> SeekErrorKind {
        match self {
            Self::Overflow { .. } => SeekErrorKind::Overflow,
            Self::NegativePosition { .. } | Self::InvalidWhence { .. } => {
                SeekErrorKind::InvalidArgument
            }
            Self::Unsupported { .. } => SeekErrorKind::Unsupported,
        }
    }

    /// Returns the `errno` value `lseek` would report for this error.
    ///
    /// An unsupported mode yields `EINVAL`, just like an `lseek` without `SEEK_END` support.
    pub fn errno(&self) -> i32 {
        match self.kind() {
            SeekErrorKind::Overflow => libc::EOVERFLOW,
            SeekErrorKind::InvalidArgument | SeekErrorKind::Unsupported => libc::EINVAL,
        }
    }
}

// To stay compatible with io::Seek, we need to convert from SeekError to io::Error.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl From<SeekError> for std::io::Error {
    fn from(error: SeekError) -> Self {
        let kind = match error.kind() {
            SeekErrorKind::Overflow | SeekErrorKind::InvalidArgument => {
                std::io::ErrorKind::InvalidInput
            }
            SeekErrorKind::Unsupported => std::io::ErrorKind::Unsupported,
        };

        std::io::Error::new(kind, error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_and_errno() {
        let overflow = SeekError::Overflow {
            cursor: i64::MAX,
            offset: 1,
        };
        assert_eq!(overflow.kind(), SeekErrorKind::Overflow);
        assert_eq!(overflow.errno(), libc::EOVERFLOW);

        let negative = SeekError::NegativePosition { position: -1 };
        assert_eq!(negative.kind(), SeekErrorKind::InvalidArgument);
        assert_eq!(negative.errno(), libc::EINVAL);

        let whence = SeekError::InvalidWhence { whence: 42 };
        assert_eq!(whence.kind(), SeekErrorKind::InvalidArgument);
        assert_eq!(whence.errno(), libc::EINVAL);

        let unsupported = SeekError::Unsupported {
            mode: SeekMode::FromEnd,
        };
        assert_eq!(unsupported.kind(), SeekErrorKind::Unsupported);
        assert_eq!(unsupported.errno(), libc::EINVAL);
    }

    #[test]
    fn test_display() {
        let overflow = SeekError::Overflow {
            cursor: i64::MAX,
            offset: 1,
        };
        assert_eq!(
            overflow.to_string(),
            "adding offset 1 to cursor 9223372036854775807 overflows a signed 64-bit position"
        );

        let unsupported = SeekError::Unsupported {
            mode: SeekMode::FromEnd,
        };
        assert_eq!(unsupported.to_string(), "seek mode FromEnd is not supported");
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_into_io_error() {
        let io_error = std::io::Error::from(SeekError::Overflow {
            cursor: 10,
            offset: i64::MAX,
        });
        assert_eq!(io_error.kind(), std::io::ErrorKind::InvalidInput);

        let inner = io_error
            .get_ref()
            .and_then(|e| e.downcast_ref::<SeekError>())
            .unwrap();
        assert_eq!(inner.kind(), SeekErrorKind::Overflow);

        let io_error = std::io::Error::from(SeekError::Unsupported {
            mode: SeekMode::FromEnd,
        });
        assert_eq!(io_error.kind(), std::io::ErrorKind::Unsupported);
    }
}
