use crate::boards::{Board, parse_reg};
use crate::chip::{ChipMatch, driver, ident};
use crate::error::{DbgError, Result};
use crate::format::parse_number;
use crate::v4l2::RegisterAccess;
use std::io::Write;
use std::ops::RangeInclusive;
use std::time::Duration;
use tracing::warn;

/// Rows between repeated column headers.
const ROWS_PER_HEADER: usize = 32;

/// Register width in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stride(u8);

impl Stride {
    pub fn new(bytes: u64) -> Result<Self> {
        match bytes {
            1 | 2 | 4 | 8 => Ok(Stride(bytes as u8)),
            other => Err(DbgError::InvalidStride(other)),
        }
    }

    /// Host bridges are read a dword at a time, I2C clients a byte at a time.
    pub fn for_chip(chip: ChipMatch) -> Self {
        if chip.is_host() { Stride(4) } else { Stride(1) }
    }

    pub fn bytes(&self) -> u64 {
        u64::from(self.0)
    }

    fn digits(&self) -> usize {
        2 * usize::from(self.0)
    }

    fn row_mask(&self) -> u64 {
        if self.0 > 1 { 0x1f } else { 0x0f }
    }

    /// Column offsets, right aligned over each cell of a row.
    pub fn header(&self) -> String {
        let width = self.digits();
        let cells: Vec<String> = (0..=self.row_mask())
            .step_by(usize::from(self.0))
            .map(|off| format!("{:>width$}", format!("{:02X}", off), width = width))
            .collect();
        format!("{:10}{}", "", cells.join(" "))
    }
}

/// Parses `--wide` values.
pub fn parse_stride(s: &str) -> Result<Stride> {
    Stride::new(parse_number(s)?)
}

/// Explicit `--list-registers=min=<reg>[,max=<reg>]` bounds, still unresolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeArgs {
    pub min: Option<String>,
    pub max: Option<String>,
}

impl RangeArgs {
    /// Parses a comma separated list of `min=` / `max=` suboptions.
    pub fn parse(s: &str) -> Result<Self> {
        let mut args = RangeArgs::default();
        for sub in s.split(',').filter(|sub| !sub.is_empty()) {
            let (key, value) = match sub.split_once('=') {
                Some((k, v)) => (k, Some(v)),
                None => (sub, None),
            };
            let slot = match key {
                "min" => &mut args.min,
                "max" => &mut args.max,
                _ => return Err(DbgError::InvalidSubopt(sub.to_string())),
            };
            match value {
                Some(v) if !v.is_empty() => *slot = Some(v.to_string()),
                _ => return Err(DbgError::MissingSubopt(key.to_string())),
            }
        }
        Ok(args)
    }

    /// Resolves the bounds against `board`. Returns `None` when no `min`
    /// was given; a missing `max` covers 0x100 registers from `min`.
    pub fn resolve(&self, board: Option<&Board>) -> Result<Option<RangeInclusive<u64>>> {
        let Some(min) = &self.min else {
            return Ok(None);
        };
        let min = parse_reg(board, min)?;
        let max = match &self.max {
            Some(max) => parse_reg(board, max)?,
            None => min.saturating_add(0xff),
        };
        Ok(Some(min..=max))
    }
}

/// Dumps registers `range` of `chip` in rows of 16 or 32 bytes.
///
/// Failed reads are reported on stderr and left blank.
pub fn print_regs<D: RegisterAccess, W: Write>(
    dev: &D,
    chip: ChipMatch,
    range: RangeInclusive<u64>,
    stride: Stride,
    out: &mut W,
) -> std::io::Result<()> {
    let (min, max) = (*range.start(), *range.end());
    let mask = stride.row_mask();
    let width = stride.digits();
    let mut line = 0usize;
    let mut i = min & !mask;

    while i <= max {
        if i & mask == 0 {
            if line % ROWS_PER_HEADER == 0 {
                write!(out, "\n{}", stride.header())?;
            }
            write!(out, "\n{:08x}: ", i)?;
            line += 1;
        }
        if i < min {
            write!(out, "{:width$} ", "", width = width)?;
        } else {
            match dev.get_register(chip, i) {
                Ok(val) => write!(out, "{:0width$x} ", val, width = width)?,
                Err(err) => {
                    eprintln!("ioctl: VIDIOC_DBG_G_REGISTER failed for 0x{:x}", i);
                    warn!(reg = i, error = %err, "register read failed");
                    write!(out, "{:width$} ", "", width = width)?;
                }
            }
            std::thread::sleep(Duration::from_micros(1));
        }
        match i.checked_add(stride.bytes()) {
            Some(next) => i = next,
            None => break,
        }
    }
    writeln!(out)
}

/// Register ranges worth dumping for `chip` when none were given.
///
/// For host chips `host_ident` is the bridge ident, or `None` if it could
/// not be queried.
pub fn default_ranges(chip: ChipMatch, host_ident: Option<u32>) -> Vec<RangeInclusive<u64>> {
    match chip {
        ChipMatch::I2cDriver(id) => match id {
            driver::SAA711X | driver::SAA717X => vec![0..=0xff],
            driver::SAA7127 => vec![0..=0x7f],
            driver::CX25840 => vec![
                0..=2,
                0x100..=0x15f,
                0x200..=0x23f,
                0x400..=0x4bf,
                0x800..=0x9af,
            ],
            driver::CS5345 => vec![1..=0x10],
            _ => vec![0..=0xff],
        },
        ChipMatch::I2cAddr(_) => vec![0..=0xff],
        ChipMatch::Host(_) => match host_ident {
            Some(ident::CX23415 | ident::CX23416) => vec![0x0200_0000..=0x0200_00ff],
            Some(ident::CX23418) => vec![0x02c4_0000..=0x02c4_09c7],
            _ => vec![0..=0xff],
        },
    }
}
