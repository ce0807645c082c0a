use crate::error::{DbgError, Result};
use nix::errno::Errno;

/// Marker the V4L2 core prints at the start of a `VIDIOC_LOG_STATUS` dump.
pub const STATUS_MARKER: &str = "START STATUS CARD #";

/// Size of the buffer handed to `klogctl`.
const KLOG_BUF_SIZE: usize = 40960;

/// `SYSLOG_ACTION_READ_ALL`
const SYSLOG_ACTION_READ_ALL: libc::c_int = 3;

/// Reads the kernel ring buffer without consuming it.
pub fn read_kernel_log() -> Result<String> {
    let mut buf = vec![0u8; KLOG_BUF_SIZE];
    // SAFETY: buf is valid for KLOG_BUF_SIZE - 1 bytes.
    let len = unsafe {
        libc::klogctl(
            SYSLOG_ACTION_READ_ALL,
            buf.as_mut_ptr() as *mut libc::c_char,
            (KLOG_BUF_SIZE - 1) as libc::c_int,
        )
    };
    if len < 0 {
        return Err(DbgError::KernelLog(Errno::last()));
    }
    buf.truncate(len as usize);
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Cuts the most recent status dump out of a kernel log.
///
/// The result starts at the log line holding the last [`STATUS_MARKER`] and
/// has every `<6>` priority tag blanked out. Without a marker the whole log
/// is returned.
pub fn extract_status_log(log: &str) -> String {
    let start = match log.rfind(STATUS_MARKER) {
        Some(pos) => log[..pos].rfind('<').unwrap_or(0),
        None => 0,
    };
    log[start..].replace("<6>", "   ")
}
