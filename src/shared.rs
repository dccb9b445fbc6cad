// Copyright 2026 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::Result;
use crate::mode::SeekMode;
use crate::positioner::Positioner;

/// A [`Positioner`] that can be shared between threads.
///
/// Cloning a [`SharedPositioner`] yields another handle to the same cursor.
/// Every seek holds the lock for the whole read-modify-write of the cursor, so concurrent
/// relative seeks never lose an update.
#[derive(Clone, Debug, Default)]
pub struct SharedPositioner {
    inner: Arc<Mutex<Positioner>>,
}

impl SharedPositioner {
    pub fn new(positioner: Positioner) -> Self {
        Self {
            inner: Arc::new(Mutex::new(positioner)),
        }
    }

    /// Returns the current position, in bytes.
    pub fn position(&self) -> i64 {
        self.lock().position()
    }

    /// See [`Positioner::seek`].
    pub fn seek(&self, offset: i64, mode: SeekMode) -> Result<i64> {
        self.lock().seek(offset, mode)
    }

    /// See [`Positioner::seek_whence`].
    pub fn seek_whence(&self, offset: i64, whence: i32) -> Result<i64> {
        self.lock().seek_whence(offset, whence)
    }

    fn lock(&self) -> MutexGuard<'_, Positioner> {
        // A seek commits the cursor in a single assignment, so a poisoned lock still guards a valid value.
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl From<Positioner> for SharedPositioner {
    fn from(positioner: Positioner) -> Self {
        Self::new(positioner)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::error::SeekErrorKind;

    #[test]
    fn test_concurrent_relative_seeks() {
        let shared = SharedPositioner::default();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for _ in 0..1000 {
                        shared.seek(3, SeekMode::Relative).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.position(), 8 * 1000 * 3);
    }

    #[test]
    fn test_shared_overflow() {
        let shared = SharedPositioner::from(Positioner::with_position(i64::MAX - 1).unwrap());
        let other = shared.clone();

        assert_eq!(shared.seek(1, SeekMode::Relative), Ok(i64::MAX));
        assert_eq!(
            other.seek(1, SeekMode::Relative).unwrap_err().kind(),
            SeekErrorKind::Overflow
        );
        assert_eq!(
            other.seek_whence(0, 7).unwrap_err().kind(),
            SeekErrorKind::InvalidArgument
        );
        assert_eq!(shared.position(), i64::MAX);
    }
}
