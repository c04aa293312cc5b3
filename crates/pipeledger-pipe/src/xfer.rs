use std::io::{ErrorKind, Read, Write};

use crate::error::{PipeError, Result};

/// Write all of `bytes` to `writer`, retrying interrupted syscalls.
///
/// Returns the number of bytes written (always `bytes.len()` on success).
/// A write that makes zero progress means the read end is gone and is
/// reported as [`PipeError::Closed`].
pub fn write_exact<W: Write>(writer: &mut W, bytes: &[u8]) -> Result<usize> {
    let mut offset = 0usize;
    while offset < bytes.len() {
        match writer.write(&bytes[offset..]) {
            Ok(0) => return Err(PipeError::Closed),
            Ok(n) => offset += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(PipeError::Io(err)),
        }
    }

    loop {
        match writer.flush() {
            Ok(()) => return Ok(bytes.len()),
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(PipeError::Io(err)),
        }
    }
}

/// Fill `buf` completely from `reader`, retrying interrupted syscalls.
///
/// A zero-length read before `buf` is full means the peer closed the
/// channel; this surfaces as [`PipeError::ShortRead`] carrying how many
/// bytes actually arrived. Never reads past `buf.len()`.
pub fn read_exact<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<()> {
    let wanted = buf.len();
    let mut got = 0usize;
    while got < wanted {
        match reader.read(&mut buf[got..]) {
            Ok(0) => return Err(PipeError::ShortRead { wanted, got }),
            Ok(n) => got += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(PipeError::Io(err)),
        }
    }
    Ok(())
}
