//! Bt848/Bt878 register map, as exposed by the `bttv` driver.

use super::BoardReg;

pub const IDENT: &str = "bttv";
pub const PREFIX: &str = "BT848_";

pub const REGS: &[BoardReg] = &[
    BoardReg::new("BT848_DSTATUS", 0x000),
    BoardReg::new("BT848_IFORM", 0x004),
    BoardReg::new("BT848_TDEC", 0x008),
    BoardReg::new("BT848_E_CROP", 0x00c),
    BoardReg::new("BT848_O_CROP", 0x08c),
    BoardReg::new("BT848_E_VDELAY_LO", 0x010),
    BoardReg::new("BT848_O_VDELAY_LO", 0x090),
    BoardReg::new("BT848_E_VACTIVE_LO", 0x014),
    BoardReg::new("BT848_O_VACTIVE_LO", 0x094),
    BoardReg::new("BT848_E_HDELAY_LO", 0x018),
    BoardReg::new("BT848_O_HDELAY_LO", 0x098),
    BoardReg::new("BT848_E_HACTIVE_LO", 0x01c),
    BoardReg::new("BT848_O_HACTIVE_LO", 0x09c),
    BoardReg::new("BT848_E_HSCALE_HI", 0x020),
    BoardReg::new("BT848_O_HSCALE_HI", 0x0a0),
    BoardReg::new("BT848_E_HSCALE_LO", 0x024),
    BoardReg::new("BT848_O_HSCALE_LO", 0x0a4),
    BoardReg::new("BT848_BRIGHT", 0x028),
    BoardReg::new("BT848_E_CONTROL", 0x02c),
    BoardReg::new("BT848_O_CONTROL", 0x0ac),
    BoardReg::new("BT848_CONTRAST_LO", 0x030),
    BoardReg::new("BT848_SAT_U_LO", 0x034),
    BoardReg::new("BT848_SAT_V_LO", 0x038),
    BoardReg::new("BT848_HUE", 0x03c),
    BoardReg::new("BT848_E_SCLOOP", 0x040),
    BoardReg::new("BT848_O_SCLOOP", 0x0c0),
    BoardReg::new("BT848_OFORM", 0x048),
    BoardReg::new("BT848_E_VSCALE_HI", 0x04c),
    BoardReg::new("BT848_O_VSCALE_HI", 0x0cc),
    BoardReg::new("BT848_E_VSCALE_LO", 0x050),
    BoardReg::new("BT848_O_VSCALE_LO", 0x0d0),
    BoardReg::new("BT848_TEST", 0x054),
    BoardReg::new("BT848_ADELAY", 0x060),
    BoardReg::new("BT848_BDELAY", 0x064),
    BoardReg::new("BT848_ADC", 0x068),
    BoardReg::new("BT848_E_VTC", 0x06c),
    BoardReg::new("BT848_O_VTC", 0x0ec),
    BoardReg::new("BT848_SRESET", 0x07c),
    BoardReg::new("BT848_COLOR_FMT", 0x0d4),
    BoardReg::new("BT848_COLOR_CTL", 0x0d8),
    BoardReg::new("BT848_CAP_CTL", 0x0dc),
    BoardReg::new("BT848_VBI_PACK_SIZE", 0x0e0),
    BoardReg::new("BT848_VBI_PACK_DEL", 0x0e4),
    BoardReg::new("BT848_FCAP", 0x0e8),
    BoardReg::new("BT848_PLL_F_LO", 0x0f0),
    BoardReg::new("BT848_PLL_F_HI", 0x0f4),
    BoardReg::new("BT848_PLL_XCI", 0x0f8),
    BoardReg::new("BT848_DVSIF", 0x0fc),
    BoardReg::new("BT848_INT_STAT", 0x100),
    BoardReg::new("BT848_INT_MASK", 0x104),
    BoardReg::new("BT848_GPIO_DMA_CTL", 0x10c),
    BoardReg::new("BT848_I2C", 0x110),
    BoardReg::new("BT848_RISC_STRT_ADD", 0x114),
    BoardReg::new("BT848_GPIO_OUT_EN", 0x118),
    BoardReg::new("BT848_GPIO_REG_INP", 0x11c),
    BoardReg::new("BT848_RISC_COUNT", 0x120),
    BoardReg::new("BT848_GPIO_DATA", 0x200),
];

/// Bt878-only and timing generator registers.
pub const REGS_OTHER: &[BoardReg] = &[
    BoardReg::new("BT848_WC_UP", 0x044),
    BoardReg::new("BT848_VTOTAL_LO", 0x0b0),
    BoardReg::new("BT848_VTOTAL_HI", 0x0b4),
    BoardReg::new("BT848_WC_DOWN", 0x078),
    BoardReg::new("BT848_TGLB", 0x080),
    BoardReg::new("BT848_TGCTRL", 0x084),
    BoardReg::new("BT878_AGPIO_DMA_CTL", 0x10c),
    BoardReg::new("BT878_ADC_CTL", 0x068),
];
