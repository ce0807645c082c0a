//! Command line options for v4l2-dbg

use crate::chip::ChipMatch;
use crate::device::DEFAULT_DEVICE;
use crate::dump::{RangeArgs, Stride, parse_stride};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "v4l2-dbg")]
#[command(author, version)]
#[command(about = "Reads and writes chip registers through the V4L2 debug ioctls", long_about = None)]
pub struct Cli {
    /// Show driver info [VIDIOC_QUERYCAP]
    #[arg(short = 'D', long)]
    pub info: bool,

    /// Use device <dev>; a bare number N means /dev/videoN
    #[arg(short, long, value_name = "dev", default_value = DEFAULT_DEVICE)]
    pub device: String,

    /// Turn on verbose ioctl status reporting
    #[arg(long)]
    pub verbose: bool,

    /// Chip to address: I2C driver name (see --list-driverids), I2C 7-bit
    /// address, or host<num> (default: host0)
    #[arg(short, long, value_name = "chip", value_parser = parse_chip)]
    pub chip: Option<ChipMatch>,

    /// Dump registers from <min> to <max> [VIDIOC_DBG_G_REGISTER]
    #[arg(
        short = 'l',
        long = "list-registers",
        value_name = "min=<addr>[,max=<addr>]",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "",
        value_parser = parse_range
    )]
    pub list_registers: Option<RangeArgs>,

    /// Get the specified register [VIDIOC_DBG_G_REGISTER]
    #[arg(short = 'g', long = "get-register", value_name = "addr")]
    pub get_register: Vec<String>,

    /// Set the register with the trailing values, auto-incrementing the
    /// address [VIDIOC_DBG_S_REGISTER]
    #[arg(short = 's', long = "set-register", value_name = "addr", requires = "values")]
    pub set_register: Option<String>,

    /// Scan the available host and i2c chips [VIDIOC_G_CHIP_IDENT]
    #[arg(short = 'S', long = "scan-chip-idents")]
    pub scan_chip_idents: bool,

    /// Get the chip identifier [VIDIOC_G_CHIP_IDENT]
    #[arg(short = 'i', long = "get-chip-ident")]
    pub get_chip_ident: bool,

    /// Register width in bytes used by --list-registers (1, 2, 4 or 8)
    #[arg(short = 'w', long = "wide", value_name = "reg length", value_parser = parse_wide)]
    pub wide: Option<Stride>,

    /// List the symbolic register names you can use, if any
    #[arg(long = "list-symbols")]
    pub list_symbols: bool,

    /// Log the board status in the kernel log [VIDIOC_LOG_STATUS]
    #[arg(long = "log-status")]
    pub log_status: bool,

    /// List the known I2C driver IDs for use with --chip
    #[arg(long = "list-driverids")]
    pub list_driverids: bool,

    /// List the video4linux device nodes on this system
    #[arg(long = "list-devices")]
    pub list_devices: bool,

    /// Print info, chip idents and register reads as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub debug: bool,

    /// Values written by --set-register
    #[arg(value_name = "values")]
    pub values: Vec<String>,
}

impl Cli {
    /// True when any requested operation needs an open device.
    pub fn needs_device(&self) -> bool {
        self.info
            || self.list_registers.is_some()
            || !self.get_register.is_empty()
            || self.set_register.is_some()
            || self.scan_chip_idents
            || self.get_chip_ident
            || self.list_symbols
            || self.log_status
    }
}

fn parse_chip(s: &str) -> Result<ChipMatch, String> {
    s.parse().map_err(|e: crate::error::DbgError| e.to_string())
}

fn parse_range(s: &str) -> Result<RangeArgs, String> {
    RangeArgs::parse(s).map_err(|e| e.to_string())
}

fn parse_wide(s: &str) -> Result<Stride, String> {
    parse_stride(s).map_err(|e| e.to_string())
}
