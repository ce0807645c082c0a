//! Symbolic register names for the bridge chips of known boards.

pub mod bttv;
pub mod em28xx;
pub mod saa7134;

use crate::error::Result;
use crate::format::parse_number;

/// One named register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardReg {
    pub name: &'static str,
    pub reg: u64,
}

impl BoardReg {
    pub const fn new(name: &'static str, reg: u64) -> Self {
        BoardReg { name, reg }
    }
}

/// Register tables for a driver, keyed by its `VIDIOC_QUERYCAP` driver name.
#[derive(Debug)]
pub struct Board {
    pub name: &'static str,
    pub prefix: &'static str,
    pub regs: &'static [BoardReg],
    pub alt_regs: &'static [BoardReg],
}

pub const BOARDS: &[Board] = &[
    Board {
        name: bttv::IDENT,
        prefix: bttv::PREFIX,
        regs: bttv::REGS,
        alt_regs: bttv::REGS_OTHER,
    },
    Board {
        name: saa7134::IDENT,
        prefix: saa7134::PREFIX,
        regs: saa7134::REGS,
        alt_regs: &[],
    },
    Board {
        name: em28xx::IDENT,
        prefix: em28xx::PREFIX,
        regs: em28xx::REGS,
        alt_regs: &[],
    },
];

/// Finds the board whose name matches `driver`, ignoring case.
///
/// Later entries win when several match.
pub fn find_board(driver: &str) -> Option<&'static Board> {
    BOARDS
        .iter()
        .rev()
        .find(|b| b.name.eq_ignore_ascii_case(driver))
}

impl Board {
    /// Looks up `name` with or without the board prefix, ignoring case.
    /// The primary table is searched before the alternate one.
    pub fn lookup(&self, name: &str) -> Option<u64> {
        self.symbols()
            .find(|r| {
                r.name.eq_ignore_ascii_case(name)
                    || r.name
                        .get(self.prefix.len()..)
                        .is_some_and(|short| short.eq_ignore_ascii_case(name))
            })
            .map(|r| r.reg)
    }

    /// All named registers, primary table first.
    pub fn symbols(&self) -> impl Iterator<Item = &'static BoardReg> {
        self.regs.iter().chain(self.alt_regs.iter())
    }
}

/// Resolves a register argument: a symbol of `board` if one matches,
/// otherwise a number.
pub fn parse_reg(board: Option<&Board>, text: &str) -> Result<u64> {
    if let Some(reg) = board.and_then(|b| b.lookup(text)) {
        return Ok(reg);
    }
    parse_number(text)
}
