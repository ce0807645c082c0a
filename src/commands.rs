use crate::boards::{Board, find_board, parse_reg};
use crate::chip::{ChipMatch, DRIVER_IDS, chip_name, describe_chip};
use crate::device::discover_video_devices;
use crate::dump::{RangeArgs, Stride, default_ranges, print_regs};
use crate::format::{binary, capability_lines, capability_names, parse_number};
use crate::log_status::{extract_status_log, read_kernel_log};
use crate::v4l2::{Capability, ChipIdent, RegisterAccess};
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use tracing::warn;

/// Highest I2C 7-bit address probed by the chip scan, exclusive.
const I2C_ADDR_LIMIT: u32 = 128;

#[derive(Debug, Serialize)]
struct DriverInfo<'a> {
    #[serde(flatten)]
    cap: &'a Capability,
    capability_names: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct ChipReport {
    pub chip: String,
    pub name: Option<&'static str>,
    pub ident: u32,
    pub revision: u32,
}

impl ChipReport {
    fn new(chip: ChipMatch, id: ChipIdent) -> Self {
        ChipReport {
            chip: chip.to_string(),
            name: chip_name(id.ident),
            ident: id.ident,
            revision: id.revision,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RegisterReport {
    pub reg: u64,
    pub val: u64,
}

/// A device opened for debugging, with the board tables matching its driver.
pub struct Session<'a, D: RegisterAccess> {
    dev: &'a D,
    cap: Capability,
    board: Option<&'static Board>,
    chip: ChipMatch,
    json: bool,
}

impl<'a, D: RegisterAccess> Session<'a, D> {
    /// Queries the driver capabilities and picks the board tables.
    ///
    /// A failed query is tolerated: the session continues without symbols.
    pub fn new(dev: &'a D, chip: ChipMatch, json: bool) -> Self {
        let cap = dev.query_cap().unwrap_or_else(|e| {
            warn!(error = %e, "VIDIOC_QUERYCAP failed");
            Capability::default()
        });
        let board = find_board(&cap.driver);
        Session {
            dev,
            cap,
            board,
            chip,
            json,
        }
    }

    pub fn capability(&self) -> &Capability {
        &self.cap
    }

    pub fn board(&self) -> Option<&'static Board> {
        self.board
    }

    pub fn show_info<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.json {
            let info = DriverInfo {
                cap: &self.cap,
                capability_names: capability_names(self.cap.capabilities),
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&info)?)?;
            return Ok(());
        }
        writeln!(out, "Driver info:")?;
        writeln!(out, "\tDriver name   : {}", self.cap.driver)?;
        writeln!(out, "\tCard type     : {}", self.cap.card)?;
        writeln!(out, "\tBus info      : {}", self.cap.bus_info)?;
        writeln!(out, "\tDriver version: {}", self.cap.version)?;
        writeln!(out, "\tCapabilities  : 0x{:08X}", self.cap.capabilities)?;
        write!(out, "{}", capability_lines(self.cap.capabilities))?;
        Ok(())
    }

    /// Writes `values` to consecutive registers starting at `reg`.
    pub fn set_registers<W: Write>(&self, reg: &str, values: &[String], out: &mut W) -> Result<()> {
        if values.is_empty() {
            anyhow::bail!("--set-register needs at least one value");
        }
        let mut reg = parse_reg(self.board, reg)?;
        let values = values
            .iter()
            .map(|v| parse_number(v))
            .collect::<crate::error::Result<Vec<u64>>>()?;
        for val in values {
            match self.dev.set_register(self.chip, reg, val) {
                Ok(()) => writeln!(out, "register 0x{:x} set to 0x{:x}", reg, val)?,
                Err(e) => {
                    eprintln!("ioctl: VIDIOC_DBG_S_REGISTER failed for 0x{:x}", reg);
                    warn!(reg, error = %e, "register write failed");
                }
            }
            reg = reg.wrapping_add(1);
        }
        Ok(())
    }

    pub fn get_chip_ident<W: Write>(&self, out: &mut W) -> Result<()> {
        let Ok(id) = self.dev.chip_ident(self.chip) else {
            return Ok(());
        };
        if self.json {
            let report = ChipReport::new(self.chip, id);
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        } else {
            writeln!(out, "{}", describe_chip(id.ident, id.revision))?;
        }
        Ok(())
    }

    /// Host chips answering with a non-zero ident, then every I2C address.
    pub fn scan_chip_idents(&self) -> Vec<ChipReport> {
        let mut found = Vec::new();

        let mut host = 0;
        while let Ok(id) = self.dev.chip_ident(ChipMatch::Host(host)) {
            if id.ident == 0 {
                break;
            }
            found.push(ChipReport::new(ChipMatch::Host(host), id));
            host += 1;
        }

        for addr in 0..I2C_ADDR_LIMIT {
            let chip = ChipMatch::I2cAddr(addr);
            if let Ok(id) = self.dev.chip_ident(chip) {
                if id.ident != 0 {
                    found.push(ChipReport::new(chip, id));
                }
            }
        }
        found
    }

    pub fn print_chip_scan<W: Write>(&self, out: &mut W) -> Result<()> {
        let found = self.scan_chip_idents();
        if self.json {
            writeln!(out, "{}", serde_json::to_string_pretty(&found)?)?;
            return Ok(());
        }
        for report in &found {
            writeln!(out, "{}: {}", report.chip, describe_chip(report.ident, report.revision))?;
        }
        Ok(())
    }

    pub fn get_registers<W: Write>(&self, regs: &[String], out: &mut W) -> Result<()> {
        let mut reports = Vec::new();
        if !self.json {
            writeln!(out, "ioctl: VIDIOC_DBG_G_REGISTER")?;
        }
        for arg in regs {
            let reg = parse_reg(self.board, arg)?;
            match self.dev.get_register(self.chip, reg) {
                Ok(val) if self.json => reports.push(RegisterReport { reg, val }),
                Ok(val) => writeln!(
                    out,
                    "{:x} = {:x}h = {}d = {}b",
                    reg,
                    val,
                    val as i64,
                    binary(val)
                )?,
                Err(_) => eprintln!("ioctl: VIDIOC_DBG_G_REGISTER failed for 0x{:x}", reg),
            }
        }
        if self.json {
            writeln!(out, "{}", serde_json::to_string_pretty(&reports)?)?;
        }
        Ok(())
    }

    /// Dumps an explicit range, or the known ranges of the target chip.
    pub fn list_registers<W: Write>(
        &self,
        range: &RangeArgs,
        forced_stride: Option<Stride>,
        out: &mut W,
    ) -> Result<()> {
        let stride = forced_stride.unwrap_or_else(|| Stride::for_chip(self.chip));
        writeln!(out, "ioctl: VIDIOC_DBG_G_REGISTER")?;

        let ranges = match range.resolve(self.board)? {
            Some(explicit) => vec![explicit],
            None => {
                let host_ident = if self.chip.is_host() {
                    self.dev.chip_ident(self.chip).ok().map(|id| id.ident)
                } else {
                    None
                };
                default_ranges(self.chip, host_ident)
            }
        };
        for r in ranges {
            print_regs(self.dev, self.chip, r, stride, out)?;
        }
        Ok(())
    }

    /// Asks the driver to log its status and prints that part of the kernel log.
    pub fn log_status<W: Write>(&self, out: &mut W) -> Result<()> {
        self.log_status_with(read_kernel_log, out)
    }

    /// Like [`Session::log_status`], with the kernel log supplied by `read_log`.
    pub fn log_status_with<F, W>(&self, read_log: F, out: &mut W) -> Result<()>
    where
        F: FnOnce() -> crate::error::Result<String>,
        W: Write,
    {
        if self.dev.log_status().is_err() {
            return Ok(());
        }
        write!(out, "\nStatus Log:\n\n")?;
        match read_log() {
            Ok(log) => write!(out, "{}", extract_status_log(&log))?,
            Err(e) => warn!(error = %e, "kernel log unavailable"),
        }
        Ok(())
    }

    pub fn list_symbols<W: Write>(&self, out: &mut W) -> Result<()> {
        list_symbols(self.board, &self.cap.driver, out)
    }
}

pub fn list_symbols<W: Write>(board: Option<&Board>, driver: &str, out: &mut W) -> Result<()> {
    let Some(board) = board else {
        writeln!(out, "No symbols found for driver {}", driver)?;
        return Ok(());
    };
    writeln!(out, "Symbols for driver {}:", driver)?;
    for sym in board.symbols() {
        writeln!(out, "0x{:08x}: {}", sym.reg, sym.name)?;
    }
    Ok(())
}

pub fn list_driver_ids<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Known I2C driver IDs:")?;
    for (name, _) in DRIVER_IDS {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}

pub fn list_devices<W: Write>(json: bool, out: &mut W) -> Result<()> {
    let nodes = discover_video_devices()?;
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&nodes)?)?;
        return Ok(());
    }
    writeln!(out, "{:<14} | {:<12} | {}", "Device", "Driver", "Name")?;
    writeln!(out, "{:-<60}", "")?;
    for node in nodes {
        writeln!(
            out,
            "{:<14} | {:<12} | {}",
            node.devnode.display(),
            node.driver.as_deref().unwrap_or("-"),
            node.name.as_deref().unwrap_or("Unidentified")
        )?;
    }
    Ok(())
}
