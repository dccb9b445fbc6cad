#![no_main]
use libfuzzer_sys::fuzz_target;
use simseek::{Positioner, SeekErrorKind};

// Every 12 bytes form one seek: an 8-byte offset followed by a 4-byte whence, both little-endian.
fuzz_target!(|data: &[u8]| {
    let mut positioner = Positioner::new();

    for chunk in data.chunks_exact(12) {
        let offset = i64::from_le_bytes(chunk[..8].try_into().unwrap());
        let whence = i32::from_le_bytes(chunk[8..].try_into().unwrap());
        let before = positioner.position();

        match positioner.seek_whence(offset, whence) {
            Ok(position) => {
                assert!(position >= 0);
                assert_eq!(position, positioner.position());
            }
            Err(e) => {
                assert_eq!(before, positioner.position());
                if e.kind() == SeekErrorKind::Overflow {
                    assert!(offset > 0);
                    assert!(before.checked_add(offset).is_none());
                }
            }
        }
    }
});
