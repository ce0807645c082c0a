//! Philips SAA7130/SAA7134/SAA7135 register map, `saa7134` driver.

use super::BoardReg;

pub const IDENT: &str = "saa7134";
pub const PREFIX: &str = "SAA7134_";

pub const REGS: &[BoardReg] = &[
    BoardReg::new("SAA7134_INCR_DELAY", 0x101),
    BoardReg::new("SAA7134_ANALOG_IN_CTRL1", 0x102),
    BoardReg::new("SAA7134_ANALOG_IN_CTRL2", 0x103),
    BoardReg::new("SAA7134_ANALOG_IN_CTRL3", 0x104),
    BoardReg::new("SAA7134_ANALOG_IN_CTRL4", 0x105),
    BoardReg::new("SAA7134_HSYNC_START", 0x106),
    BoardReg::new("SAA7134_HSYNC_STOP", 0x107),
    BoardReg::new("SAA7134_SYNC_CTRL", 0x108),
    BoardReg::new("SAA7134_LUMA_CTRL", 0x109),
    BoardReg::new("SAA7134_DEC_LUMA_BRIGHT", 0x10a),
    BoardReg::new("SAA7134_DEC_LUMA_CONTRAST", 0x10b),
    BoardReg::new("SAA7134_DEC_CHROMA_SATURATION", 0x10c),
    BoardReg::new("SAA7134_DEC_CHROMA_HUE", 0x10d),
    BoardReg::new("SAA7134_CHROMA_CTRL1", 0x10e),
    BoardReg::new("SAA7134_CHROMA_GAIN", 0x10f),
    BoardReg::new("SAA7134_CHROMA_CTRL2", 0x110),
    BoardReg::new("SAA7134_MODE_DELAY_CTRL", 0x111),
    BoardReg::new("SAA7134_ANALOG_ADC", 0x114),
    BoardReg::new("SAA7134_VGATE_START", 0x115),
    BoardReg::new("SAA7134_VGATE_STOP", 0x116),
    BoardReg::new("SAA7134_MISC_VGATE_MSB", 0x117),
    BoardReg::new("SAA7134_RAW_DATA_GAIN", 0x118),
    BoardReg::new("SAA7134_RAW_DATA_OFFSET", 0x119),
    BoardReg::new("SAA7134_STATUS_VIDEO1", 0x11e),
    BoardReg::new("SAA7134_STATUS_VIDEO2", 0x11f),
    BoardReg::new("SAA7134_VIDEO_PORT_CTRL0", 0x190),
    BoardReg::new("SAA7134_VIDEO_PORT_CTRL1", 0x191),
    BoardReg::new("SAA7134_I2S_OUTPUT_SELECT", 0x1c0),
    BoardReg::new("SAA7134_I2S_OUTPUT_FORMAT", 0x1c1),
    BoardReg::new("SAA7134_I2S_OUTPUT_LEVEL", 0x1c2),
    BoardReg::new("SAA7134_I2S_AUDIO_OUTPUT", 0x1c4),
    BoardReg::new("SAA7134_TS_PARALLEL", 0x1c5),
    BoardReg::new("SAA7134_TS_PARALLEL_SERIAL", 0x1c6),
    BoardReg::new("SAA7134_TS_SERIAL0", 0x1c7),
    BoardReg::new("SAA7134_TS_SERIAL1", 0x1c8),
    BoardReg::new("SAA7134_TS_DMA0", 0x1c9),
    BoardReg::new("SAA7134_TS_DMA1", 0x1ca),
    BoardReg::new("SAA7134_TS_DMA2", 0x1cb),
    BoardReg::new("SAA7134_SPECIAL_MODE", 0x1d0),
    BoardReg::new("SAA7134_PRODUCTION_TEST_MODE", 0x1d1),
    BoardReg::new("SAA7134_AUDIO_PLL_CTRL", 0x16c),
    BoardReg::new("SAA7134_AUDIO_CLOCK0", 0x170),
    BoardReg::new("SAA7134_AUDIO_CLOCK1", 0x171),
    BoardReg::new("SAA7134_AUDIO_CLOCK2", 0x172),
    BoardReg::new("SAA7134_AUDIO_FORMAT_CTRL", 0x16d),
    BoardReg::new("SAA7134_DEMODULATOR", 0x141),
    BoardReg::new("SAA7134_DCXO_IDENT_CTRL", 0x142),
    BoardReg::new("SAA7134_FM_DEEMPHASIS", 0x143),
    BoardReg::new("SAA7134_FM_DEMATRIX", 0x144),
    BoardReg::new("SAA7134_CHANNEL1_LEVEL", 0x145),
    BoardReg::new("SAA7134_CHANNEL2_LEVEL", 0x146),
    BoardReg::new("SAA7134_NICAM_CONFIG", 0x147),
    BoardReg::new("SAA7134_NICAM_LEVEL_ADJUST", 0x148),
    BoardReg::new("SAA7134_STEREO_DAC_OUTPUT_SELECT", 0x149),
    BoardReg::new("SAA7134_IDENT_SIF", 0x14a),
    BoardReg::new("SAA7134_ANALOG_IO_SELECT", 0x188),
];
