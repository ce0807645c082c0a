use crate::error::{DbgError, Result};
use crate::format::parse_number;
use crate::v4l2::{CHIP_MATCH_HOST, CHIP_MATCH_I2C_ADDR, CHIP_MATCH_I2C_DRIVER};
use std::fmt;
use std::str::FromStr;

/// Which chip on the board an ioctl is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChipMatch {
    /// Bridge chip `n` on the host side.
    Host(u32),
    /// I2C client bound to the driver with this numeric ID.
    I2cDriver(u32),
    /// I2C client at this 7-bit address.
    I2cAddr(u32),
}

impl Default for ChipMatch {
    fn default() -> Self {
        ChipMatch::Host(0)
    }
}

impl ChipMatch {
    pub fn match_type(&self) -> u32 {
        match self {
            ChipMatch::Host(_) => CHIP_MATCH_HOST,
            ChipMatch::I2cDriver(_) => CHIP_MATCH_I2C_DRIVER,
            ChipMatch::I2cAddr(_) => CHIP_MATCH_I2C_ADDR,
        }
    }

    pub fn match_chip(&self) -> u32 {
        match *self {
            ChipMatch::Host(n) | ChipMatch::I2cDriver(n) | ChipMatch::I2cAddr(n) => n,
        }
    }

    pub fn is_host(&self) -> bool {
        matches!(self, ChipMatch::Host(_))
    }
}

impl FromStr for ChipMatch {
    type Err = DbgError;

    /// Accepts an I2C address (`0x21`, `33`), `host`/`host<n>`, or an I2C
    /// driver name from [`DRIVER_IDS`].
    fn from_str(s: &str) -> Result<Self> {
        if s.starts_with(|c: char| c.is_ascii_digit()) {
            let addr = parse_number(s)?;
            let addr = u32::try_from(addr).map_err(|_| DbgError::InvalidNumber(s.to_string()))?;
            return Ok(ChipMatch::I2cAddr(addr));
        }
        if let Some(n) = s.strip_prefix("host") {
            let n = if n.is_empty() { 0 } else { parse_number(n)? };
            let n = u32::try_from(n).map_err(|_| DbgError::InvalidNumber(s.to_string()))?;
            return Ok(ChipMatch::Host(n));
        }
        driver_id(s)
            .map(ChipMatch::I2cDriver)
            .ok_or_else(|| DbgError::UnknownDriver(s.to_string()))
    }
}

impl fmt::Display for ChipMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ChipMatch::Host(n) => write!(f, "host{}", n),
            ChipMatch::I2cDriver(id) => match driver_name(id) {
                Some(name) => write!(f, "{}", name),
                None => write!(f, "i2c driver {}", id),
            },
            ChipMatch::I2cAddr(addr) => write!(f, "i2c 0x{:02x}", addr),
        }
    }
}

pub mod driver {
    pub const MSP3400: u32 = 1;
    pub const TUNER: u32 = 2;
    pub const TDA8425: u32 = 4;
    pub const TEA6420: u32 = 5;
    pub const TEA6415C: u32 = 6;
    pub const TDA9840: u32 = 7;
    pub const SAA7111A: u32 = 8;
    pub const SAA7185B: u32 = 13;
    pub const SAA7110: u32 = 22;
    pub const SAA5249: u32 = 24;
    pub const TDA7432: u32 = 27;
    pub const TVAUDIO: u32 = 29;
    pub const TDA9875: u32 = 32;
    pub const BT819: u32 = 40;
    pub const BT856: u32 = 41;
    pub const VPX3220: u32 = 42;
    pub const ADV7175: u32 = 48;
    pub const SAA7114: u32 = 49;
    pub const ADV7170: u32 = 54;
    pub const SAA7191: u32 = 57;
    pub const INDYCAM: u32 = 58;
    pub const OVCAMCHIP: u32 = 61;
    pub const SAA6752HS: u32 = 67;
    pub const TVEEPROM: u32 = 68;
    pub const WM8775: u32 = 69;
    pub const CS53L32A: u32 = 70;
    pub const CX25840: u32 = 71;
    pub const SAA7127: u32 = 72;
    pub const SAA711X: u32 = 73;
    pub const INFRARED: u32 = 75;
    pub const TVP5150: u32 = 76;
    pub const WM8739: u32 = 77;
    pub const UPD64083: u32 = 78;
    pub const UPD64031A: u32 = 79;
    pub const SAA717X: u32 = 80;
    pub const BT866: u32 = 85;
    pub const KS0127: u32 = 86;
    pub const TLV320AIC23B: u32 = 87;
    pub const VP27SMPX: u32 = 93;
    pub const M52790: u32 = 95;
    pub const CS5345: u32 = 96;
}

/// Known I2C driver IDs, usable as `--chip <name>`.
pub const DRIVER_IDS: &[(&str, u32)] = &[
    ("msp3400", driver::MSP3400),
    ("tuner", driver::TUNER),
    ("tda8425", driver::TDA8425),
    ("tea6420", driver::TEA6420),
    ("tea6415c", driver::TEA6415C),
    ("tda9840", driver::TDA9840),
    ("saa7111a", driver::SAA7111A),
    ("saa7185b", driver::SAA7185B),
    ("saa7110", driver::SAA7110),
    ("saa5249", driver::SAA5249),
    ("tda7432", driver::TDA7432),
    ("tvaudio", driver::TVAUDIO),
    ("tda9875", driver::TDA9875),
    ("bt819", driver::BT819),
    ("bt856", driver::BT856),
    ("vpx3220", driver::VPX3220),
    ("adv7175", driver::ADV7175),
    ("saa7114", driver::SAA7114),
    ("adv7170", driver::ADV7170),
    ("saa7191", driver::SAA7191),
    ("indycam", driver::INDYCAM),
    ("ovcamchip", driver::OVCAMCHIP),
    ("saa6752hs", driver::SAA6752HS),
    ("tveeprom", driver::TVEEPROM),
    ("wm8775", driver::WM8775),
    ("cs53l32a", driver::CS53L32A),
    ("cx25840", driver::CX25840),
    ("saa7127", driver::SAA7127),
    ("saa711x", driver::SAA711X),
    ("infrared", driver::INFRARED),
    ("tvp5150", driver::TVP5150),
    ("wm8739", driver::WM8739),
    ("upd64083", driver::UPD64083),
    ("upd64031a", driver::UPD64031A),
    ("saa717x", driver::SAA717X),
    ("bt866", driver::BT866),
    ("ks0127", driver::KS0127),
    ("tlv320aic23b", driver::TLV320AIC23B),
    ("vp27smpx", driver::VP27SMPX),
    ("m52790", driver::M52790),
    ("cs5345", driver::CS5345),
];

/// Looks up a driver ID by name, ignoring case.
pub fn driver_id(name: &str) -> Option<u32> {
    DRIVER_IDS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, id)| id)
}

pub fn driver_name(id: u32) -> Option<&'static str> {
    DRIVER_IDS.iter().find(|&&(_, i)| i == id).map(|&(n, _)| n)
}

pub mod ident {
    pub const NONE: u32 = 0;
    pub const AMBIGUOUS: u32 = 1;
    pub const UNKNOWN: u32 = 2;
    pub const SAA7111: u32 = 101;
    pub const SAA7113: u32 = 103;
    pub const SAA7114: u32 = 104;
    pub const SAA7115: u32 = 105;
    pub const SAA7118: u32 = 108;
    pub const SAA7127: u32 = 157;
    pub const SAA7129: u32 = 159;
    pub const SAA7171: u32 = 171;
    pub const SAA7173: u32 = 173;
    pub const CX25836: u32 = 236;
    pub const CX25837: u32 = 237;
    pub const CX25840: u32 = 240;
    pub const CX25841: u32 = 241;
    pub const CX25842: u32 = 242;
    pub const CX25843: u32 = 243;
    pub const OV7670: u32 = 250;
    pub const CX23415: u32 = 415;
    pub const CX23416: u32 = 416;
    pub const CX23418: u32 = 418;
    pub const VP27SMPX: u32 = 2700;
    pub const TVP5150: u32 = 5150;
    pub const CS5345: u32 = 5345;
    pub const UPD6408X: u32 = 6408;
    pub const WM8739: u32 = 8739;
    pub const WM8775: u32 = 8775;
    pub const CX23885: u32 = 8850;
    pub const CX23887: u32 = 8870;
    pub const CX23888: u32 = 8880;
    pub const MSP3400B: u32 = 34002;
    pub const MSP3410D: u32 = 34104;
    pub const MSP3415G: u32 = 34157;
    pub const MSP4450K: u32 = 44501;
    pub const CS53L32A: u32 = 53132;
    pub const M52790: u32 = 52790;
    pub const UPD64031A: u32 = 64031;
    pub const UPD64083: u32 = 64083;
}

/// Names of the chip identifiers returned by `VIDIOC_G_CHIP_IDENT`.
pub const CHIP_IDENTS: &[(&str, u32)] = &[
    ("none", ident::NONE),
    ("ambiguous", ident::AMBIGUOUS),
    ("unknown", ident::UNKNOWN),
    ("saa7111", ident::SAA7111),
    ("saa7113", ident::SAA7113),
    ("saa7114", ident::SAA7114),
    ("saa7115", ident::SAA7115),
    ("saa7118", ident::SAA7118),
    ("saa7127", ident::SAA7127),
    ("saa7129", ident::SAA7129),
    ("saa7171", ident::SAA7171),
    ("saa7173", ident::SAA7173),
    ("cx25836", ident::CX25836),
    ("cx25837", ident::CX25837),
    ("cx25840", ident::CX25840),
    ("cx25841", ident::CX25841),
    ("cx25842", ident::CX25842),
    ("cx25843", ident::CX25843),
    ("ov7670", ident::OV7670),
    ("cx23415", ident::CX23415),
    ("cx23416", ident::CX23416),
    ("cx23418", ident::CX23418),
    ("vp27smpx", ident::VP27SMPX),
    ("tvp5150", ident::TVP5150),
    ("cs5345", ident::CS5345),
    ("upd6408x", ident::UPD6408X),
    ("wm8739", ident::WM8739),
    ("wm8775", ident::WM8775),
    ("cx23885", ident::CX23885),
    ("cx23887", ident::CX23887),
    ("cx23888", ident::CX23888),
    ("msp3400b", ident::MSP3400B),
    ("msp3410d", ident::MSP3410D),
    ("msp3415g", ident::MSP3415G),
    ("msp4450k", ident::MSP4450K),
    ("cs53l32a", ident::CS53L32A),
    ("m52790", ident::M52790),
    ("upd64031a", ident::UPD64031A),
    ("upd64083", ident::UPD64083),
];

pub fn chip_name(id: u32) -> Option<&'static str> {
    CHIP_IDENTS.iter().find(|&&(_, i)| i == id).map(|&(n, _)| n)
}

/// Formats a chip ident the way `--get-chip-ident` and the scan print it.
pub fn describe_chip(id: u32, revision: u32) -> String {
    match chip_name(id) {
        Some(name) => format!("{:<10} revision 0x{:08x}", name, revision),
        None => format!("{:<10} revision 0x{:08x}", id, revision),
    }
}
