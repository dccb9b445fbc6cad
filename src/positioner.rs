// Copyright 2021-2026 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0
//
//! This module implements the position calculation of `lseek` for `SEEK_SET` and `SEEK_CUR`.
//! A relative seek adds a signed offset to a signed cursor. Testing `new_pos < old_pos` after an
//! unchecked signed addition cannot detect the overflow, because the overflow itself is already
//! undefined. Every addition here is checked and an overflow is reported before the cursor is touched.

use tracing::{debug, trace};

use crate::error::{Result, SeekError};
use crate::mode::SeekMode;

/// Tracks the current position of a simulated file and moves it like `lseek` does.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Positioner {
    /// Current position in bytes. Never negative.
    cursor: i64,
}

impl Positioner {
    /// Creates a new [`Positioner`] whose cursor is at the start of the file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new [`Positioner`] whose cursor is at `position`.
    pub fn with_position(position: i64) -> Result<Self> {
        if position < 0 {
            return Err(SeekError::NegativePosition { position });
        }

        Ok(Self { cursor: position })
    }

    /// Returns the current position, in bytes.
    pub fn position(&self) -> i64 {
        self.cursor
    }

    /// Moves the cursor back to the start of the file.
    pub fn rewind(&mut self) {
        trace!(cursor = self.cursor, "rewind");
        self.cursor = 0;
    }

    /// Moves the cursor by `offset` bytes according to `mode` and returns the new position.
    ///
    /// On error, the cursor keeps its previous value.
    ///
    /// # Errors
    ///
    /// - [`SeekError::Overflow`] if a [`SeekMode::Relative`] seek leaves the range of `i64`.
    /// - [`SeekError::NegativePosition`] if the resulting position would be negative.
    /// - [`SeekError::Unsupported`] for [`SeekMode::FromEnd`].
    pub fn seek(&mut self, offset: i64, mode: SeekMode) -> Result<i64> {
        trace!(cursor = self.cursor, offset, %mode, "seek");

        let result = self.new_position(offset, mode);
        match result {
            Ok(position) => {
                self.cursor = position;
                trace!(cursor = self.cursor, "seek done");
            }
            Err(ref e) => debug!(cursor = self.cursor, offset, %mode, "seek rejected: {e}"),
        }

        result
    }

    /// Like [`seek`](Self::seek), but takes the raw `whence` value of `lseek`.
    ///
    /// # Errors
    ///
    /// [`SeekError::InvalidWhence`] if `whence` is none of `SEEK_SET`, `SEEK_CUR` or `SEEK_END`,
    /// plus everything [`seek`](Self::seek) may return.
    pub fn seek_whence(&mut self, offset: i64, whence: i32) -> Result<i64> {
        let mode = SeekMode::from_whence(whence).ok_or_else(|| {
            debug!(cursor = self.cursor, offset, whence, "unknown whence");
            SeekError::InvalidWhence { whence }
        })?;

        self.seek(offset, mode)
    }

    fn new_position(&self, offset: i64, mode: SeekMode) -> Result<i64> {
        let position = match mode {
            SeekMode::Absolute => offset,
            SeekMode::Relative => {
                // The cursor is never negative, so only a positive offset can overflow.
                self.cursor
                    .checked_add(offset)
                    .ok_or(SeekError::Overflow {
                        cursor: self.cursor,
                        offset,
                    })?
            }
            SeekMode::FromEnd => return Err(SeekError::Unsupported { mode }),
        };

        if position < 0 {
            return Err(SeekError::NegativePosition { position });
        }

        Ok(position)
    }
}
