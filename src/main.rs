use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::io::Write;
use tracing_subscriber::EnvFilter;
use v4l2_dbg::cli::Cli;
use v4l2_dbg::commands::{self, Session};
use v4l2_dbg::device::resolve_device_path;
use v4l2_dbg::v4l2::V4l2Device;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    if std::env::args_os().len() <= 1 {
        Cli::command().print_help()?;
        return Ok(());
    }
    let args = Cli::parse();
    init_tracing(args.debug);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.needs_device() {
        let path = resolve_device_path(&args.device);
        let dev = V4l2Device::open(&path, args.verbose)?;
        let session = Session::new(&dev, args.chip.unwrap_or_default(), args.json);

        if args.info {
            session.show_info(&mut out)?;
        }
        if let Some(reg) = &args.set_register {
            session.set_registers(reg, &args.values, &mut out)?;
        }
        if args.get_chip_ident {
            session.get_chip_ident(&mut out)?;
        }
        if args.scan_chip_idents {
            session.print_chip_scan(&mut out)?;
        }
        if !args.get_register.is_empty() {
            session.get_registers(&args.get_register, &mut out)?;
        }
        if let Some(range) = &args.list_registers {
            session.list_registers(range, args.wide, &mut out)?;
        }
        if args.log_status {
            session.log_status(&mut out)?;
        }
        if args.list_driverids {
            commands::list_driver_ids(&mut out)?;
        }
        if args.list_symbols {
            session.list_symbols(&mut out)?;
        }
    } else if args.list_driverids {
        commands::list_driver_ids(&mut out)?;
    }

    if args.list_devices {
        commands::list_devices(args.json, &mut out)?;
    }
    out.flush()?;
    Ok(())
}
