mod colors;

use self::colors::*;
use anyhow::Context;
use clap::ArgMatches;
use firmware_type::{Detection, Detector, FirmwareType, Mode};
use std::io::{self, Write};

/// Exit status for an undetermined result when `--exit-code` is given.
pub const EXIT_UNDETERMINED: i32 = 2;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Format {
    Text,
    Json,
}

impl Format {
    fn from_matches(matches: &ArgMatches) -> Self {
        match matches.value_of("format") {
            Some("json") => Format::Json,
            _ => Format::Text,
        }
    }
}

/// Runs a detection as described by the command line, and returns the exit status.
pub fn run(matches: &ArgMatches) -> anyhow::Result<i32> {
    let mode = matches.value_of("mode").unwrap_or("Auto").parse::<Mode>()?;
    let format = Format::from_matches(matches);
    let verbose = matches.occurrences_of("verbose") != 0;

    let mut detector = Detector::new(firmware_type::native());
    if let Some(path) = matches.value_of("setup-log") {
        detector = detector.with_setup_log(path);
    }

    let detection = detector
        .detect(mode)
        .with_context(|| format!("failed to detect the firmware type in {} mode", mode))?;

    let stdout = io::stdout();
    render(&mut stdout.lock(), &detection, format, verbose)
        .context("failed to write the detection result")?;

    Ok(exit_status(detection.firmware, matches.is_present("exit-code")))
}

pub fn render<W: Write>(
    out: &mut W,
    detection: &Detection,
    format: Format,
    verbose: bool,
) -> anyhow::Result<()> {
    match format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, &detection.report())?;
            writeln!(out)?;
        }
        Format::Text => {
            let firmware = detection.firmware.to_string();
            if detection.firmware.undetermined() {
                write!(out, "{}", color_warn(firmware))?;
            } else {
                write!(out, "{}", color_info(firmware))?;
            }

            if verbose {
                write!(out, " (via {})", color_secondary(detection.strategy))?;
            }

            writeln!(out)?;
        }
    }

    Ok(())
}

pub fn exit_status(firmware: FirmwareType, exit_code: bool) -> i32 {
    if exit_code && firmware.undetermined() {
        EXIT_UNDETERMINED
    } else {
        0
    }
}

pub fn print_error(error: &anyhow::Error) {
    eprintln!("{}: {}", color_error("firmware-type"), firmware_type::misc::format_error(&**error));
}
