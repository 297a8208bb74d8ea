//! Kernel entropy on Linux.
//!
//! `getrandom(2)` without flags blocks only until the entropy pool has been
//! initialised once at boot, then never again.

use std::io;

use libc::{c_void, getrandom};

/// Fills `buf` with random bytes from the kernel.
///
/// Short reads are continued and `EINTR` is retried; any other failure is
/// returned to the caller with `buf` in an unspecified state.
pub(crate) fn fill_random(buf: &mut [u8]) -> io::Result<()> {
    let mut filled = 0;

    while filled < buf.len() {
        let remaining = &mut buf[filled..];
        let ret = unsafe { getrandom(remaining.as_mut_ptr() as *mut c_void, remaining.len(), 0) };

        if ret < 0 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::Interrupted {
                continue;
            }
            return Err(err);
        }

        filled += ret as usize;
    }

    Ok(())
}
