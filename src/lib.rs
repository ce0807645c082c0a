//! Register level debugging of V4L2 video capture drivers.
//!
//! Talks to the driver through the `VIDIOC_DBG_*_REGISTER`,
//! `VIDIOC_G_CHIP_IDENT` and `VIDIOC_LOG_STATUS` ioctls and translates
//! symbolic register names of known boards.

pub mod boards;
pub mod chip;
pub mod cli;
pub mod commands;
pub mod device;
pub mod dump;
pub mod error;
pub mod format;
pub mod log_status;
pub mod v4l2;
