use v4l2_dbg::chip::{ChipMatch, DRIVER_IDS, describe_chip, driver, driver_id};
use v4l2_dbg::error::DbgError;

#[test]
fn numeric_chip_is_an_i2c_address() {
    assert_eq!("0x44".parse::<ChipMatch>().unwrap(), ChipMatch::I2cAddr(0x44));
    assert_eq!("68".parse::<ChipMatch>().unwrap(), ChipMatch::I2cAddr(68));
    assert_eq!("0".parse::<ChipMatch>().unwrap(), ChipMatch::I2cAddr(0));
}

#[test]
fn host_chip_defaults_to_zero() {
    assert_eq!("host".parse::<ChipMatch>().unwrap(), ChipMatch::Host(0));
    assert_eq!("host2".parse::<ChipMatch>().unwrap(), ChipMatch::Host(2));
    assert_eq!(ChipMatch::default(), ChipMatch::Host(0));
}

#[test]
fn driver_names_ignore_case() {
    assert_eq!(
        "CX25840".parse::<ChipMatch>().unwrap(),
        ChipMatch::I2cDriver(driver::CX25840)
    );
    assert_eq!(driver_id("saa711x"), Some(driver::SAA711X));
}

#[test]
fn unknown_driver_is_rejected() {
    let err = "nosuchchip".parse::<ChipMatch>().unwrap_err();
    assert!(matches!(err, DbgError::UnknownDriver(ref name) if name == "nosuchchip"));
    assert_eq!(err.to_string(), "unknown driver ID nosuchchip");
}

#[test]
fn match_fields_follow_abi() {
    let chip = ChipMatch::I2cDriver(driver::CS5345);
    assert_eq!(chip.match_type(), 1);
    assert_eq!(chip.match_chip(), 96);
    assert_eq!(ChipMatch::I2cAddr(0x21).match_type(), 2);
    assert_eq!(ChipMatch::Host(3).match_type(), 0);
}

#[test]
fn driver_ids_are_unique() {
    for (i, (name, id)) in DRIVER_IDS.iter().enumerate() {
        assert!(
            DRIVER_IDS[i + 1..].iter().all(|(n, d)| n != name && d != id),
            "duplicate entry for {}",
            name
        );
    }
}

#[test]
fn chip_description_pads_name() {
    assert_eq!(describe_chip(418, 0x10), "cx23418    revision 0x00000010");
    assert_eq!(describe_chip(12345, 0), "12345      revision 0x00000000");
}

#[test]
fn chip_display_names_target() {
    assert_eq!(ChipMatch::Host(1).to_string(), "host1");
    assert_eq!(ChipMatch::I2cAddr(0x4c).to_string(), "i2c 0x4c");
    assert_eq!(ChipMatch::I2cDriver(driver::WM8775).to_string(), "wm8775");
}
