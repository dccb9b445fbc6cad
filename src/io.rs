// Copyright 2026 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0
//
//! [`std::io::Seek`] support for [`Positioner`].

use std::io::{Result, Seek, SeekFrom};

use crate::error::SeekError;
use crate::mode::SeekMode;
use crate::positioner::Positioner;

impl Seek for Positioner {
    fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        let (offset, mode) = match pos {
            SeekFrom::Start(n) => {
                // A start offset beyond i64::MAX wraps to a negative position in lseek.
                let offset = i64::try_from(n).map_err(|_| SeekError::NegativePosition {
                    position: n as i64,
                })?;
                (offset, SeekMode::Absolute)
            }
            SeekFrom::Current(n) => (n, SeekMode::Relative),
            SeekFrom::End(n) => (n, SeekMode::FromEnd),
        };

        let position = Positioner::seek(self, offset, mode)?;
        Ok(position as u64)
    }

    fn stream_position(&mut self) -> Result<u64> {
        Ok(self.position() as u64)
    }
}
