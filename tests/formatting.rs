use v4l2_dbg::format::{binary, capability_lines, parse_number};
use v4l2_dbg::v4l2::caps;

#[test]
fn binary_picks_smallest_width() {
    assert_eq!(binary(0), "00000000");
    assert_eq!(binary(0x5a), "01011010");
    assert_eq!(binary(0x1ff), "00000001 11111111");
    assert_eq!(binary(0x1_0000), "00000000 00000001 00000000 00000000");
    assert_eq!(binary(1 << 40).split(' ').count(), 8);
}

#[test]
fn numbers_parse_like_strtoull_base_zero() {
    assert_eq!(parse_number("0x1F").unwrap(), 0x1f);
    assert_eq!(parse_number("0X10").unwrap(), 16);
    assert_eq!(parse_number("017").unwrap(), 0o17);
    assert_eq!(parse_number("42").unwrap(), 42);
    assert_eq!(parse_number("0").unwrap(), 0);
}

#[test]
fn garbage_numbers_are_rejected() {
    assert!(parse_number("").is_err());
    assert!(parse_number("0x").is_err());
    assert!(parse_number("12abc").is_err());
    assert!(parse_number("09").is_err());
    assert!(parse_number("0x+5").is_err());
    assert!(parse_number("0+7").is_err());
    assert!(parse_number("+-1").is_err());
    assert!(parse_number("-").is_err());
}

#[test]
fn signed_numbers_wrap_like_strtoull() {
    assert_eq!(parse_number("+5").unwrap(), 5);
    assert_eq!(parse_number("-1").unwrap(), u64::MAX);
    assert_eq!(parse_number("-0x10").unwrap(), 0u64.wrapping_sub(0x10));
}

#[test]
fn capability_lines_in_fixed_order() {
    let cap = caps::STREAMING | caps::VIDEO_CAPTURE | caps::TUNER;
    assert_eq!(
        capability_lines(cap),
        "\t\tVideo Capture\n\t\tTuner\n\t\tStreaming\n"
    );
    assert_eq!(capability_lines(0), "");
}
