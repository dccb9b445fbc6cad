// Copyright 2021-2026 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0
//
//! An `lseek`-style file position calculator that detects signed overflow instead of relying on it.
//!
//! A [`Positioner`] owns the cursor of a simulated file.
//! [`Positioner::seek`] moves it to an absolute position or by a relative offset.
//! A relative seek that would leave the range of `i64` fails with [`SeekError::Overflow`]
//! and leaves the cursor untouched:
//!
//! ```
//! use simseek::{Positioner, SeekErrorKind, SeekMode};
//!
//! let mut positioner = Positioner::new();
//! assert_eq!(positioner.seek(i64::MAX, SeekMode::Absolute), Ok(i64::MAX));
//!
//! let error = positioner.seek(1, SeekMode::Relative).unwrap_err();
//! assert_eq!(error.kind(), SeekErrorKind::Overflow);
//! assert_eq!(positioner.position(), i64::MAX);
//! ```
//!
//! With the `std` feature (enabled by default), [`Positioner`] also implements [`std::io::Seek`]
//! and `SharedPositioner` puts a [`Positioner`] behind a mutex.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

mod error;
#[cfg(feature = "std")]
mod io;
mod mode;
mod positioner;
#[cfg(feature = "std")]
mod shared;

pub use crate::error::*;
pub use crate::mode::*;
pub use crate::positioner::*;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub use crate::shared::*;
