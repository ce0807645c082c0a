use nix::errno::Errno;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while talking to a V4L2 device or interpreting user input.
#[derive(Debug, Error)]
pub enum DbgError {
    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("ioctl: {name} failed: {errno}")]
    Ioctl { name: &'static str, errno: Errno },

    #[error("unknown driver ID {0}")]
    UnknownDriver(String),

    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error("invalid register width {0}, expected 1, 2, 4 or 8")]
    InvalidStride(u64),

    #[error("Invalid suboptions specified: '{0}'")]
    InvalidSubopt(String),

    #[error("No value given to suboption <{0}>")]
    MissingSubopt(String),

    #[error("reading kernel log failed: {0}")]
    KernelLog(Errno),
}

pub type Result<T> = std::result::Result<T, DbgError>;
