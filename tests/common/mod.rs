#![allow(dead_code)]

use nix::errno::Errno;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use v4l2_dbg::chip::ChipMatch;
use v4l2_dbg::error::{DbgError, Result};
use v4l2_dbg::v4l2::{Capability, ChipIdent, RegisterAccess};

/// In-memory stand-in for a V4L2 device.
#[derive(Default)]
pub struct FakeDevice {
    pub cap: Option<Capability>,
    pub regs: RefCell<HashMap<u64, u64>>,
    pub failing: HashSet<u64>,
    pub chips: HashMap<ChipMatch, ChipIdent>,
    pub writes: RefCell<Vec<(ChipMatch, u64, u64)>>,
    pub reads: RefCell<Vec<(ChipMatch, u64)>>,
    pub logs_status: bool,
}

impl FakeDevice {
    pub fn with_driver(driver: &str) -> Self {
        FakeDevice {
            cap: Some(Capability {
                driver: driver.to_string(),
                card: "Test Card".to_string(),
                bus_info: "PCI:0000:01:00.0".to_string(),
                version: 0x0002_0618,
                capabilities: 0x0501_0015,
            }),
            ..Default::default()
        }
    }

    pub fn set(&self, reg: u64, val: u64) {
        self.regs.borrow_mut().insert(reg, val);
    }
}

fn einval(name: &'static str) -> DbgError {
    DbgError::Ioctl {
        name,
        errno: Errno::EINVAL,
    }
}

impl RegisterAccess for FakeDevice {
    fn query_cap(&self) -> Result<Capability> {
        self.cap.clone().ok_or_else(|| einval("VIDIOC_QUERYCAP"))
    }

    fn get_register(&self, chip: ChipMatch, reg: u64) -> Result<u64> {
        self.reads.borrow_mut().push((chip, reg));
        if self.failing.contains(&reg) {
            return Err(einval("VIDIOC_DBG_G_REGISTER"));
        }
        Ok(self.regs.borrow().get(&reg).copied().unwrap_or(0))
    }

    fn set_register(&self, chip: ChipMatch, reg: u64, val: u64) -> Result<()> {
        if self.failing.contains(&reg) {
            return Err(einval("VIDIOC_DBG_S_REGISTER"));
        }
        self.writes.borrow_mut().push((chip, reg, val));
        self.regs.borrow_mut().insert(reg, val);
        Ok(())
    }

    fn chip_ident(&self, chip: ChipMatch) -> Result<ChipIdent> {
        self.chips
            .get(&chip)
            .copied()
            .ok_or_else(|| einval("VIDIOC_G_CHIP_IDENT"))
    }

    fn log_status(&self) -> Result<()> {
        if self.logs_status {
            Ok(())
        } else {
            Err(einval("VIDIOC_LOG_STATUS"))
        }
    }
}

pub fn output(buf: Vec<u8>) -> String {
    String::from_utf8(buf).unwrap()
}
