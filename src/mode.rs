// Copyright 2021-2026 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use enumn::N;
use strum_macros::Display;

/// Reference point of a seek, as passed to [`Positioner::seek`](crate::Positioner::seek).
///
/// The discriminants are the `whence` values of `lseek`.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, N, PartialEq)]
#[repr(i32)]
pub enum SeekMode {
    /// Sets the position to the offset itself (`SEEK_SET`).
    Absolute = 0,
    /// Sets the position to the current cursor plus the offset (`SEEK_CUR`).
    Relative = 1,
    /// Sets the position relative to the end of the file (`SEEK_END`).
    /// There is no file length to refer to, so every seek in this mode is rejected.
    FromEnd = 2,
}

impl SeekMode {
    /// Returns the [`SeekMode`] for a raw `whence` value, or `None` if there is none.
    pub fn from_whence(whence: i32) -> Option<Self> {
        Self::n(whence)
    }

    /// Returns the raw `whence` value of this mode.
    pub fn whence(self) -> i32 {
        self as i32
    }
}
