use std::fs::File;
use std::io::{Read, Write};
use std::os::fd::{AsRawFd, FromRawFd, OwnedFd, RawFd};

use crate::error::{PipeError, Result};

/// The read end of an anonymous pipe.
///
/// Owns its file descriptor; dropping the value closes the end, which is
/// what lets the peer observe end-of-stream.
pub struct PipeReader {
    inner: File,
}

/// The write end of an anonymous pipe.
pub struct PipeWriter {
    inner: File,
}

/// Create an anonymous pipe and return its two ends.
pub fn pipe() -> Result<(PipeReader, PipeWriter)> {
    let mut fds: [libc::c_int; 2] = [-1, -1];

    // SAFETY: `fds` is a valid writable array of two C ints, which is
    // exactly what pipe(2) expects.
    let rc = unsafe { libc::pipe(fds.as_mut_ptr()) };
    if rc != 0 {
        return Err(PipeError::Create(std::io::Error::last_os_error()));
    }

    // SAFETY: on success pipe(2) returns two freshly opened descriptors
    // that nothing else owns yet.
    let (read_fd, write_fd) = unsafe {
        (
            OwnedFd::from_raw_fd(fds[0]),
            OwnedFd::from_raw_fd(fds[1]),
        )
    };

    tracing::debug!(
        read_fd = read_fd.as_raw_fd(),
        write_fd = write_fd.as_raw_fd(),
        "created pipe"
    );

    Ok((
        PipeReader {
            inner: File::from(read_fd),
        },
        PipeWriter {
            inner: File::from(write_fd),
        },
    ))
}

impl Read for PipeReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.inner.read(buf)
    }
}

impl Write for PipeWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

impl AsRawFd for PipeReader {
    fn as_raw_fd(&self) -> RawFd {
        self.inner.as_raw_fd()
    }
}

impl AsRawFd for PipeWriter {
    fn as_raw_fd(&self) -> RawFd {
        self.inner.as_raw_fd()
    }
}

impl std::fmt::Debug for PipeReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipeReader")
            .field("fd", &self.inner.as_raw_fd())
            .finish()
    }
}

impl std::fmt::Debug for PipeWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipeWriter")
            .field("fd", &self.inner.as_raw_fd())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipe_moves_bytes() {
        let (mut rx, mut tx) = pipe().unwrap();

        tx.write_all(b"hola").unwrap();
        drop(tx);

        let mut buf = Vec::new();
        rx.read_to_end(&mut buf).unwrap();
        assert_eq!(buf, b"hola");
    }

    #[test]
    fn dropping_writer_signals_eof() {
        let (mut rx, tx) = pipe().unwrap();
        drop(tx);

        let mut buf = [0u8; 8];
        let n = rx.read(&mut buf).unwrap();
        assert_eq!(n, 0);
    }

    #[test]
    fn debug_includes_fd() {
        let (rx, tx) = pipe().unwrap();
        assert!(format!("{rx:?}").contains("fd"));
        assert!(format!("{tx:?}").contains("fd"));
    }
}
