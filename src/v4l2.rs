//! Legacy V4L2 debug ioctl interface.
//!
//! Only the pre-2.6.29 `VIDIOC_DBG_*_REGISTER` / `VIDIOC_G_CHIP_IDENT` ABI is
//! covered; that is what the boards in [`crate::boards`] expose.

use crate::chip::ChipMatch;
use crate::error::{DbgError, Result};
use nix::errno::Errno;
use serde::Serialize;
use std::ffi::CStr;
use std::fs::{File, OpenOptions};
use std::os::unix::io::AsRawFd;
use std::path::Path;
use tracing::debug;

/// Capability bits reported by `VIDIOC_QUERYCAP`.
pub mod caps {
    pub const VIDEO_CAPTURE: u32 = 0x0000_0001;
    pub const VIDEO_OUTPUT: u32 = 0x0000_0002;
    pub const VIDEO_OVERLAY: u32 = 0x0000_0004;
    pub const VBI_CAPTURE: u32 = 0x0000_0010;
    pub const VBI_OUTPUT: u32 = 0x0000_0020;
    pub const SLICED_VBI_CAPTURE: u32 = 0x0000_0040;
    pub const SLICED_VBI_OUTPUT: u32 = 0x0000_0080;
    pub const RDS_CAPTURE: u32 = 0x0000_0100;
    pub const VIDEO_OUTPUT_OVERLAY: u32 = 0x0000_0200;
    pub const TUNER: u32 = 0x0001_0000;
    pub const AUDIO: u32 = 0x0002_0000;
    pub const RADIO: u32 = 0x0004_0000;
    pub const READWRITE: u32 = 0x0100_0000;
    pub const ASYNCIO: u32 = 0x0200_0000;
    pub const STREAMING: u32 = 0x0400_0000;
}

pub const CHIP_MATCH_HOST: u32 = 0;
pub const CHIP_MATCH_I2C_DRIVER: u32 = 1;
pub const CHIP_MATCH_I2C_ADDR: u32 = 2;

#[allow(non_camel_case_types)]
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct v4l2_capability {
    pub driver: [u8; 16],
    pub card: [u8; 32],
    pub bus_info: [u8; 32],
    pub version: u32,
    pub capabilities: u32,
    pub reserved: [u32; 4],
}

#[allow(non_camel_case_types)]
#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct v4l2_register {
    pub match_type: u32,
    pub match_chip: u32,
    pub reg: u64,
    pub val: u64,
}

#[allow(non_camel_case_types)]
#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct v4l2_chip_ident {
    pub match_type: u32,
    pub match_chip: u32,
    pub ident: u32,
    pub revision: u32,
}

mod ioctl {
    use super::{v4l2_capability, v4l2_chip_ident, v4l2_register};

    nix::ioctl_read!(vidioc_querycap, b'V', 0, v4l2_capability);
    nix::ioctl_none!(vidioc_log_status, b'V', 70);
    nix::ioctl_write_ptr!(vidioc_dbg_s_register, b'V', 79, v4l2_register);
    nix::ioctl_readwrite!(vidioc_dbg_g_register, b'V', 80, v4l2_register);
    nix::ioctl_readwrite!(vidioc_g_chip_ident, b'V', 81, v4l2_chip_ident);
}

/// Driver identification returned by `VIDIOC_QUERYCAP`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Capability {
    pub driver: String,
    pub card: String,
    pub bus_info: String,
    pub version: u32,
    pub capabilities: u32,
}

impl From<&v4l2_capability> for Capability {
    fn from(raw: &v4l2_capability) -> Self {
        Capability {
            driver: c_field(&raw.driver),
            card: c_field(&raw.card),
            bus_info: c_field(&raw.bus_info),
            version: raw.version,
            capabilities: raw.capabilities,
        }
    }
}

fn c_field(bytes: &[u8]) -> String {
    match CStr::from_bytes_until_nul(bytes) {
        Ok(s) => s.to_string_lossy().into_owned(),
        Err(_) => String::from_utf8_lossy(bytes).into_owned(),
    }
}

/// The C library's message for `errno`.
pub fn strerror(errno: Errno) -> String {
    // SAFETY: strerror returns a valid NUL terminated string for any errno.
    unsafe { CStr::from_ptr(libc::strerror(errno as libc::c_int)) }
        .to_string_lossy()
        .into_owned()
}

/// Chip identifier and revision as reported by the driver.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChipIdent {
    pub ident: u32,
    pub revision: u32,
}

/// Register level access to a video device.
pub trait RegisterAccess {
    fn query_cap(&self) -> Result<Capability>;
    fn get_register(&self, chip: ChipMatch, reg: u64) -> Result<u64>;
    fn set_register(&self, chip: ChipMatch, reg: u64, val: u64) -> Result<()>;
    fn chip_ident(&self, chip: ChipMatch) -> Result<ChipIdent>;
    fn log_status(&self) -> Result<()>;
}

/// An opened `/dev/videoN` node.
pub struct V4l2Device {
    file: File,
    verbose: bool,
}

impl V4l2Device {
    /// Opens `path` read/write. With `verbose` set, the outcome of every
    /// ioctl except register reads is echoed to stdout.
    pub fn open(path: impl AsRef<Path>, verbose: bool) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|source| DbgError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(device = %path.display(), "opened video device");
        Ok(V4l2Device { file, verbose })
    }

    fn report<T>(&self, name: &'static str, res: nix::Result<T>) -> Result<T> {
        if self.verbose {
            match &res {
                Ok(_) => println!("{}: ok", name),
                Err(errno) => println!("{}: failed: {}", name, strerror(*errno)),
            }
        }
        debug!(ioctl = name, ok = res.is_ok(), "ioctl");
        res.map_err(|errno| DbgError::Ioctl { name, errno })
    }
}

impl RegisterAccess for V4l2Device {
    fn query_cap(&self) -> Result<Capability> {
        // SAFETY: all-zero is a valid v4l2_capability.
        let mut raw: v4l2_capability = unsafe { std::mem::zeroed() };
        // SAFETY: raw is a live, correctly laid out v4l2_capability.
        let res = unsafe { ioctl::vidioc_querycap(self.file.as_raw_fd(), &mut raw) };
        self.report("VIDIOC_QUERYCAP", res)?;
        Ok(Capability::from(&raw))
    }

    fn get_register(&self, chip: ChipMatch, reg: u64) -> Result<u64> {
        let mut raw = v4l2_register {
            match_type: chip.match_type(),
            match_chip: chip.match_chip(),
            reg,
            val: 0,
        };
        // SAFETY: raw is a live, correctly laid out v4l2_register.
        let res = unsafe { ioctl::vidioc_dbg_g_register(self.file.as_raw_fd(), &mut raw) };
        res.map_err(|errno| DbgError::Ioctl {
            name: "VIDIOC_DBG_G_REGISTER",
            errno,
        })?;
        Ok(raw.val)
    }

    fn set_register(&self, chip: ChipMatch, reg: u64, val: u64) -> Result<()> {
        let raw = v4l2_register {
            match_type: chip.match_type(),
            match_chip: chip.match_chip(),
            reg,
            val,
        };
        // SAFETY: the kernel only reads from raw.
        let res = unsafe { ioctl::vidioc_dbg_s_register(self.file.as_raw_fd(), &raw) };
        self.report("VIDIOC_DBG_S_REGISTER", res).map(|_| ())
    }

    fn chip_ident(&self, chip: ChipMatch) -> Result<ChipIdent> {
        let mut raw = v4l2_chip_ident {
            match_type: chip.match_type(),
            match_chip: chip.match_chip(),
            ..Default::default()
        };
        // SAFETY: raw is a live, correctly laid out v4l2_chip_ident.
        let res = unsafe { ioctl::vidioc_g_chip_ident(self.file.as_raw_fd(), &mut raw) };
        self.report("VIDIOC_G_CHIP_IDENT", res)?;
        Ok(ChipIdent {
            ident: raw.ident,
            revision: raw.revision,
        })
    }

    fn log_status(&self) -> Result<()> {
        // SAFETY: VIDIOC_LOG_STATUS takes no argument.
        let res = unsafe { ioctl::vidioc_log_status(self.file.as_raw_fd()) };
        self.report("VIDIOC_LOG_STATUS", res).map(|_| ())
    }
}
