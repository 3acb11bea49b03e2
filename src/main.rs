mod cli;
mod logging;

use crate::logging::{setup_logging, verbosity};
use clap::{Arg, Command};
use std::process::exit;
use yansi::Condition;

pub fn main() {
    yansi::whenever(Condition::TTY_AND_COLOR);

    let matches = Command::new("firmware-type")
        .about("Determine whether this system booted through UEFI or legacy BIOS firmware")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("mode")
                .help(
                    "detection strategy: Auto, SetupLog, GetFirmwareEnvironmentVariable \
                     (LegacyProbe), GetFirmwareType (DirectQuery), or Sysfs",
                )
                .short('m')
                .long("mode")
                .value_name("MODE")
                .takes_value(true)
                .default_value("Auto"),
        )
        .arg(
            Arg::new("setup-log")
                .help("read the Windows Setup log from PATH instead of the system's copy")
                .long("setup-log")
                .value_name("PATH")
                .takes_value(true),
        )
        .arg(
            Arg::new("format")
                .help("output format")
                .short('f')
                .long("format")
                .takes_value(true)
                .possible_values(["text", "json"])
                .default_value("text"),
        )
        .arg(
            Arg::new("exit-code")
                .help("exit with status 2 if the firmware type could not be determined")
                .long("exit-code"),
        )
        .arg(
            Arg::new("verbose")
                .help("log the chosen strategy and raw probe results; repeat for more detail")
                .short('v')
                .long("verbose")
                .multiple_occurrences(true),
        )
        .get_matches();

    let _ = setup_logging(verbosity(matches.occurrences_of("verbose")));

    match cli::run(&matches) {
        Ok(status) => exit(status),
        Err(why) => {
            cli::print_error(&why);
            exit(1);
        }
    }
}
