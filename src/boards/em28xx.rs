//! Empia em2800/em28xx USB bridge registers.

use super::BoardReg;

pub const IDENT: &str = "em28xx";
pub const PREFIX: &str = "EM28XX_";

pub const REGS: &[BoardReg] = &[
    BoardReg::new("EM28XX_R00_CHIPCFG", 0x00),
    BoardReg::new("EM28XX_R01_CHIPCFG2", 0x01),
    BoardReg::new("EM28XX_R04_GPIO", 0x04),
    BoardReg::new("EM28XX_R06_I2C_CLK", 0x06),
    BoardReg::new("EM28XX_R08_GPIO", 0x08),
    BoardReg::new("EM28XX_R0A_CHIPID", 0x0a),
    BoardReg::new("EM28XX_R0C_USBSUSP", 0x0c),
    BoardReg::new("EM28XX_R0E_AUDIOSRC", 0x0e),
    BoardReg::new("EM28XX_R0F_XCLK", 0x0f),
    BoardReg::new("EM28XX_R10_VINMODE", 0x10),
    BoardReg::new("EM28XX_R11_VINCTRL", 0x11),
    BoardReg::new("EM28XX_R12_VINENABLE", 0x12),
    BoardReg::new("EM28XX_R14_GAMMA", 0x14),
    BoardReg::new("EM28XX_R15_RGAIN", 0x15),
    BoardReg::new("EM28XX_R16_GGAIN", 0x16),
    BoardReg::new("EM28XX_R17_BGAIN", 0x17),
    BoardReg::new("EM28XX_R18_ROFFSET", 0x18),
    BoardReg::new("EM28XX_R19_GOFFSET", 0x19),
    BoardReg::new("EM28XX_R1A_BOFFSET", 0x1a),
    BoardReg::new("EM28XX_R1B_OFLOW", 0x1b),
    BoardReg::new("EM28XX_R1C_HSTART", 0x1c),
    BoardReg::new("EM28XX_R1D_VSTART", 0x1d),
    BoardReg::new("EM28XX_R1E_CWIDTH", 0x1e),
    BoardReg::new("EM28XX_R1F_CHEIGHT", 0x1f),
    BoardReg::new("EM28XX_R20_YGAIN", 0x20),
    BoardReg::new("EM28XX_R21_YOFFSET", 0x21),
    BoardReg::new("EM28XX_R22_UVGAIN", 0x22),
    BoardReg::new("EM28XX_R23_UOFFSET", 0x23),
    BoardReg::new("EM28XX_R24_VOFFSET", 0x24),
    BoardReg::new("EM28XX_R25_SHARPNESS", 0x25),
    BoardReg::new("EM28XX_R26_COMPR", 0x26),
    BoardReg::new("EM28XX_R27_OUTFMT", 0x27),
    BoardReg::new("EM28XX_R28_XMIN", 0x28),
    BoardReg::new("EM28XX_R29_XMAX", 0x29),
    BoardReg::new("EM28XX_R2A_YMIN", 0x2a),
    BoardReg::new("EM28XX_R2B_YMAX", 0x2b),
    BoardReg::new("EM28XX_R30_HSCALELOW", 0x30),
    BoardReg::new("EM28XX_R31_HSCALEHIGH", 0x31),
    BoardReg::new("EM28XX_R32_VSCALELOW", 0x32),
    BoardReg::new("EM28XX_R33_VSCALEHIGH", 0x33),
    BoardReg::new("EM28XX_R40_AC97LSB", 0x40),
    BoardReg::new("EM28XX_R41_AC97MSB", 0x41),
    BoardReg::new("EM28XX_R42_AC97ADDR", 0x42),
    BoardReg::new("EM28XX_R43_AC97BUSY", 0x43),
];
