mod common;

use common::{FakeDevice, output};
use nix::errno::Errno;
use v4l2_dbg::chip::{ChipMatch, driver, ident};
use v4l2_dbg::commands::{Session, list_driver_ids};
use v4l2_dbg::dump::{RangeArgs, Stride};
use v4l2_dbg::error::DbgError;
use v4l2_dbg::v4l2::ChipIdent;

#[test]
fn driver_info_block() {
    let dev = FakeDevice::with_driver("bttv");
    let session = Session::new(&dev, ChipMatch::default(), false);
    let mut buf = Vec::new();
    session.show_info(&mut buf).unwrap();

    let text = output(buf);
    assert!(text.starts_with("Driver info:\n\tDriver name   : bttv\n\tCard type     : Test Card\n"));
    assert!(text.contains("\tCapabilities  : 0x05010015\n"));
    assert!(text.contains("\t\tVideo Capture\n"));
    assert!(text.ends_with("\t\tStreaming\n"));
}

#[test]
fn driver_info_as_json() {
    let dev = FakeDevice::with_driver("saa7134");
    let session = Session::new(&dev, ChipMatch::default(), true);
    let mut buf = Vec::new();
    session.show_info(&mut buf).unwrap();

    let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(json["driver"], "saa7134");
    assert_eq!(json["capabilities"], 0x0501_0015);
    assert!(
        json["capability_names"]
            .as_array()
            .unwrap()
            .contains(&serde_json::Value::from("Tuner"))
    );
}

#[test]
fn failed_querycap_leaves_no_board() {
    let dev = FakeDevice::default();
    let session = Session::new(&dev, ChipMatch::default(), false);
    assert!(session.board().is_none());
    assert_eq!(session.capability().driver, "");
}

#[test]
fn set_register_autoincrements() {
    let dev = FakeDevice::with_driver("bttv");
    let chip = ChipMatch::Host(0);
    let session = Session::new(&dev, chip, false);
    let values = vec!["0x12".to_string(), "7".to_string()];
    let mut buf = Vec::new();
    session.set_registers("BRIGHT", &values, &mut buf).unwrap();

    assert_eq!(
        output(buf),
        "register 0x28 set to 0x12\nregister 0x29 set to 0x7\n"
    );
    assert_eq!(*dev.writes.borrow(), vec![(chip, 0x28, 0x12), (chip, 0x29, 7)]);
}

#[test]
fn set_register_skips_failed_writes() {
    let mut dev = FakeDevice::with_driver("em28xx");
    dev.failing.insert(0x11);
    let session = Session::new(&dev, ChipMatch::default(), false);
    let values = vec!["1".to_string(), "2".to_string(), "3".to_string()];
    let mut buf = Vec::new();
    session.set_registers("R10_VINMODE", &values, &mut buf).unwrap();

    assert_eq!(
        output(buf),
        "register 0x10 set to 0x1\nregister 0x12 set to 0x3\n"
    );
}

#[test]
fn set_register_requires_values() {
    let dev = FakeDevice::with_driver("bttv");
    let session = Session::new(&dev, ChipMatch::default(), false);
    let mut buf = Vec::new();
    assert!(session.set_registers("0x28", &[], &mut buf).is_err());
    assert!(dev.writes.borrow().is_empty());
}

#[test]
fn set_register_rejects_bad_value_before_writing() {
    let dev = FakeDevice::with_driver("bttv");
    let session = Session::new(&dev, ChipMatch::default(), false);
    let values = vec!["1".to_string(), "2".to_string(), "bogus".to_string()];
    let mut buf = Vec::new();
    assert!(session.set_registers("0x28", &values, &mut buf).is_err());
    assert!(dev.writes.borrow().is_empty());
    assert!(buf.is_empty());
}

#[test]
fn get_register_formats_all_bases() {
    let dev = FakeDevice::with_driver("bttv");
    dev.set(0x10, 0x1ff);
    let session = Session::new(&dev, ChipMatch::default(), false);
    let mut buf = Vec::new();
    session
        .get_registers(&["E_VDELAY_LO".to_string()], &mut buf)
        .unwrap();

    assert_eq!(
        output(buf),
        "ioctl: VIDIOC_DBG_G_REGISTER\n10 = 1ffh = 511d = 00000001 11111111b\n"
    );
}

#[test]
fn get_register_json() {
    let dev = FakeDevice::with_driver("bttv");
    dev.set(0x200, 0xff);
    let session = Session::new(&dev, ChipMatch::default(), true);
    let mut buf = Vec::new();
    session
        .get_registers(&["GPIO_DATA".to_string(), "0x4".to_string()], &mut buf)
        .unwrap();

    let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(json[0]["reg"], 0x200);
    assert_eq!(json[0]["val"], 0xff);
    assert_eq!(json[1]["reg"], 4);
}

#[test]
fn chip_ident_of_target() {
    let mut dev = FakeDevice::with_driver("cx18");
    let chip = ChipMatch::I2cDriver(driver::CX25840);
    dev.chips.insert(chip, ChipIdent { ident: ident::CX25843, revision: 0x8401 });
    let session = Session::new(&dev, chip, false);
    let mut buf = Vec::new();
    session.get_chip_ident(&mut buf).unwrap();

    assert_eq!(output(buf), "cx25843    revision 0x00008401\n");
}

#[test]
fn scan_lists_hosts_then_i2c() {
    let mut dev = FakeDevice::with_driver("cx18");
    dev.chips.insert(ChipMatch::Host(0), ChipIdent { ident: ident::CX23418, revision: 1 });
    dev.chips.insert(ChipMatch::Host(1), ChipIdent { ident: 0, revision: 0 });
    dev.chips.insert(ChipMatch::Host(2), ChipIdent { ident: ident::CX23416, revision: 0 });
    dev.chips.insert(ChipMatch::I2cAddr(0x44), ChipIdent { ident: ident::CX25840, revision: 0x1234 });
    dev.chips.insert(ChipMatch::I2cAddr(0x1b), ChipIdent { ident: 0, revision: 0 });
    dev.chips.insert(ChipMatch::I2cAddr(0x4c), ChipIdent { ident: 61000, revision: 2 });
    let session = Session::new(&dev, ChipMatch::default(), false);
    let mut buf = Vec::new();
    session.print_chip_scan(&mut buf).unwrap();

    assert_eq!(
        output(buf),
        "host0: cx23418    revision 0x00000001\n\
         i2c 0x44: cx25840    revision 0x00001234\n\
         i2c 0x4c: 61000      revision 0x00000002\n"
    );
}

#[test]
fn explicit_range_uses_symbols() {
    let dev = FakeDevice::with_driver("em28xx");
    let chip = ChipMatch::I2cAddr(0x50);
    let session = Session::new(&dev, chip, false);
    let range = RangeArgs::parse("min=R10_VINMODE,max=R12_VINENABLE").unwrap();
    let mut buf = Vec::new();
    session.list_registers(&range, None, &mut buf).unwrap();

    let reads: Vec<u64> = dev.reads.borrow().iter().map(|&(_, r)| r).collect();
    assert_eq!(reads, vec![0x10, 0x11, 0x12]);
    assert!(output(buf).starts_with("ioctl: VIDIOC_DBG_G_REGISTER\n"));
}

#[test]
fn host_dump_uses_bridge_range_and_dwords() {
    let mut dev = FakeDevice::with_driver("ivtv");
    dev.chips.insert(ChipMatch::Host(0), ChipIdent { ident: ident::CX23415, revision: 0 });
    let session = Session::new(&dev, ChipMatch::Host(0), false);
    let mut buf = Vec::new();
    session.list_registers(&RangeArgs::default(), None, &mut buf).unwrap();

    let reads = dev.reads.borrow();
    assert_eq!(reads.len(), 0x100 / 4);
    assert_eq!(reads[0].1, 0x0200_0000);
    assert_eq!(reads.last().unwrap().1, 0x0200_00fc);
}

#[test]
fn forced_stride_overrides_default() {
    let dev = FakeDevice::with_driver("bttv");
    let session = Session::new(&dev, ChipMatch::I2cDriver(driver::CS5345), false);
    let mut buf = Vec::new();
    session
        .list_registers(&RangeArgs::default(), Some(Stride::new(2).unwrap()), &mut buf)
        .unwrap();

    let reads: Vec<u64> = dev.reads.borrow().iter().map(|&(_, r)| r).collect();
    assert_eq!(reads, vec![2, 4, 6, 8, 10, 12, 14, 16]);
}

#[test]
fn log_status_failure_prints_nothing() {
    let dev = FakeDevice::with_driver("bttv");
    let session = Session::new(&dev, ChipMatch::default(), false);
    let mut buf = Vec::new();
    session.log_status(&mut buf).unwrap();
    assert!(buf.is_empty());
}

#[test]
fn log_status_prints_last_status_block() {
    let dev = FakeDevice {
        logs_status: true,
        ..FakeDevice::with_driver("bttv")
    };
    let session = Session::new(&dev, ChipMatch::default(), false);
    let log = "<6>boot\n<6>bttv0: START STATUS CARD #0\n<6>bttv0: tuner ok\n";
    let mut buf = Vec::new();
    session
        .log_status_with(|| Ok(log.to_string()), &mut buf)
        .unwrap();
    assert_eq!(
        output(buf),
        "\nStatus Log:\n\n   bttv0: START STATUS CARD #0\n   bttv0: tuner ok\n"
    );
}

#[test]
fn log_status_without_kernel_log_prints_header() {
    let dev = FakeDevice {
        logs_status: true,
        ..FakeDevice::with_driver("bttv")
    };
    let session = Session::new(&dev, ChipMatch::default(), false);
    let mut buf = Vec::new();
    session
        .log_status_with(|| Err(DbgError::KernelLog(Errno::EPERM)), &mut buf)
        .unwrap();
    assert_eq!(output(buf), "\nStatus Log:\n\n");
}

#[test]
fn driver_id_listing() {
    let mut buf = Vec::new();
    list_driver_ids(&mut buf).unwrap();
    let text = output(buf);
    assert!(text.starts_with("Known I2C driver IDs:\nmsp3400\ntuner\n"));
    assert!(text.contains("\ncx25840\n"));
}
