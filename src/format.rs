use crate::error::{DbgError, Result};
use crate::v4l2::caps;

/// Parses an unsigned number the way `strtoull(s, NULL, 0)` picks its base:
/// `0x`/`0X` prefix is hex, a leading `0` is octal, anything else decimal.
///
/// A single leading `+` or `-` is accepted, and a negative value wraps
/// around as with `strtoull`. Unlike `strtoull` the whole string must be
/// consumed.
pub fn parse_number(s: &str) -> Result<u64> {
    let invalid = || DbgError::InvalidNumber(s.to_string());
    let t = s.trim();
    let (negative, t) = match t.as_bytes().first() {
        Some(b'-') => (true, &t[1..]),
        Some(b'+') => (false, &t[1..]),
        _ => (false, t),
    };
    let (digits, radix) = if let Some(hex) = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        (hex, 16)
    } else if t.len() > 1 && t.starts_with('0') {
        (&t[1..], 8)
    } else {
        (t, 10)
    };
    // from_str_radix takes a sign of its own; only bare digits get here.
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let val = u64::from_str_radix(digits, radix).map_err(|_| invalid())?;
    Ok(if negative { val.wrapping_neg() } else { val })
}

/// Renders `val` in binary, MSB first, in space separated groups of 8 bits.
///
/// The width is the smallest of 8, 16, 32 or 64 bits that holds the value.
pub fn binary(val: u64) -> String {
    let bits = if val & 0xffff_ffff_0000_0000 != 0 {
        64
    } else if val & 0xffff_0000 != 0 {
        32
    } else if val & 0xff00 != 0 {
        16
    } else {
        8
    };

    let mut groups = Vec::with_capacity(bits / 8);
    for group in (0..bits / 8).rev() {
        let byte = (val >> (group * 8)) & 0xff;
        groups.push(format!("{:08b}", byte));
    }
    groups.join(" ")
}

const CAPABILITY_NAMES: &[(u32, &str)] = &[
    (caps::VIDEO_CAPTURE, "Video Capture"),
    (caps::VIDEO_OUTPUT, "Video Output"),
    (caps::VIDEO_OVERLAY, "Video Overlay"),
    (caps::VIDEO_OUTPUT_OVERLAY, "Video Output Overlay"),
    (caps::VBI_CAPTURE, "VBI Capture"),
    (caps::VBI_OUTPUT, "VBI Output"),
    (caps::SLICED_VBI_CAPTURE, "Sliced VBI Capture"),
    (caps::SLICED_VBI_OUTPUT, "Sliced VBI Output"),
    (caps::RDS_CAPTURE, "RDS Capture"),
    (caps::TUNER, "Tuner"),
    (caps::AUDIO, "Audio"),
    (caps::RADIO, "Radio"),
    (caps::READWRITE, "Read/Write"),
    (caps::ASYNCIO, "Async I/O"),
    (caps::STREAMING, "Streaming"),
];

/// Names of the capability bits set in `cap`, in display order.
pub fn capability_names(cap: u32) -> Vec<&'static str> {
    CAPABILITY_NAMES
        .iter()
        .filter(|(bit, _)| cap & bit != 0)
        .map(|&(_, name)| name)
        .collect()
}

/// One tab-indented line per capability bit, as shown by `--info`.
pub fn capability_lines(cap: u32) -> String {
    capability_names(cap)
        .into_iter()
        .map(|name| format!("\t\t{}\n", name))
        .collect()
}
