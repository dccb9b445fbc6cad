// Copyright 2021-2026 Colin Finck <colin@reactos.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use anyhow::{bail, Result};
use simseek::{Positioner, SeekErrorKind, SeekMode};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Library traces go to stderr, filtered by RUST_LOG (e.g. RUST_LOG=simseek=trace).
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut positioner = Positioner::new();

    println!("overflow-demo: try to seek to i64::MAX ({})", i64::MAX);
    match positioner.seek(i64::MAX, SeekMode::Absolute) {
        Ok(position) if position == i64::MAX => {
            println!("overflow-demo: cursor is now at {position}");
        }
        Ok(position) => bail!("seek to i64::MAX ended up at {position}"),
        Err(e) => bail!("failed to seek to i64::MAX: {e}"),
    }

    println!();
    println!("overflow-demo: try to seek to i64::MAX + 1 (which overflows a signed 64-bit position)");
    match positioner.seek(1, SeekMode::Relative) {
        Err(e) if e.kind() == SeekErrorKind::Overflow => {
            println!("overflow-demo: seek overflow detected: {e}");
            println!(
                "overflow-demo: cursor stays at {} (errno {})",
                positioner.position(),
                e.errno()
            );
        }
        Err(e) => bail!("seek failed, but not with an overflow: {e}"),
        Ok(position) => bail!("seek did not overflow, cursor is at {position}"),
    }

    Ok(())
}
