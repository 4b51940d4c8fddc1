//! Starting point for a new command-line module
//!
//! Copy this file, rename the placeholder work function and the anticipated
//! error, and keep the shape: parse arguments, configure logging, do the
//! work, handle the one anticipated failure narrowly and anything else
//! through the fallback, and log the exit marker on every path.
//!
//! `--tes` and `--teu` trigger the anticipated and the fallback error so
//! both handlers can be checked before the real work is written.
//!
//! Run with: cargo run --example module_template -- --tes --lfpn module.log

use channel_logger::config::{ChannelsBuilder, Destination};
use channel_logger::demo::{ExitMarker, GENERAL_REMEDIATION};
use channel_logger::{critical, debug, error, exception, info, registry, warning, Logger};
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};

const PROGRAM: &str = "module-template";

#[derive(Parser, Debug)]
#[command(
    name = "module-template",
    about = "Describe what this module does.",
    after_help = "For questions or concerns, please contact your support team."
)]
struct Args {
    /// Test handling of the anticipated (empty input) error
    #[arg(long = "tes", visible_alias = "testexceptionspecified")]
    test_exception_specified: bool,

    /// Test handling of an unanticipated error
    #[arg(long = "teu", visible_alias = "testexceptionunspecified")]
    test_exception_unspecified: bool,

    /// Log file path and name; logs go to stderr when omitted
    #[arg(long = "lfpn", visible_alias = "logfilepathname", value_name = "PATH")]
    logfile_path_name: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
enum ModuleError {
    /// Replace with the failure this module expects and knows how to explain
    #[error("input file {0} is empty")]
    EmptyInput(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

const EMPTY_INPUT_REMEDIATION: &str = "The input file has no records. Check that the export \
finished before running this module again.

Technical Error Details to Share with Our Help Desk Team:";

/// Placeholder for the module's real work
fn placeholder(input: &Path, records: usize) -> Result<usize, ModuleError> {
    if records == 0 {
        return Err(ModuleError::EmptyInput(input.to_path_buf()));
    }
    Ok(records * 2)
}

fn execute(args: &Args, logger: &Logger) -> Result<(), ModuleError> {
    let mut out = std::io::stdout();
    writeln!(out, "\n\n----- STARTING EXECUTION -----\nOne moment please.")?;

    if args.test_exception_specified {
        placeholder(Path::new("input.csv"), 0)?;
    }
    if args.test_exception_unspecified {
        return Err(ModuleError::Io(std::io::Error::other(
            "Oh, golly. Something really bad unexpectedly happened.",
        )));
    }

    let processed = placeholder(Path::new("input.csv"), 21)?;

    info!(logger, "TEST INFO: processed {} records.", processed);
    debug!(logger, "TEST DEBUG: details that help identify and resolve problems.");
    warning!(logger, "TEST WARNING: a minor problem happened, or likely will soon.");
    error!(logger, "TEST ERROR: a serious problem kept some work from finishing.");
    critical!(logger, "TEST CRITICAL: a problem that will very likely stop execution.");

    match args.logfile_path_name {
        None => writeln!(
            out,
            "\n\nSUCCESSFUL EXECUTION: {}. See output displayed above.",
            PROGRAM
        )?,
        Some(ref path) => writeln!(
            out,
            "\n\nSUCCESSFUL EXECUTION: {}. See output in {} .",
            PROGRAM,
            path.display()
        )?,
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    let logger = match ChannelsBuilder::new()
        .destination(Destination::from_path(args.logfile_path_name.clone()))
        .build(registry::global(), PROGRAM)
    {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("{}: cannot configure logging: {}", PROGRAM, e);
            std::process::exit(1);
        }
    };

    {
        let _exit = ExitMarker::new(&logger, PROGRAM);
        match execute(&args, &logger) {
            Ok(()) => {}
            Err(e @ ModuleError::EmptyInput(_)) => {
                exception!(logger, &e, "{}", EMPTY_INPUT_REMEDIATION);
            }
            Err(e) => {
                exception!(logger, &e, "{}", GENERAL_REMEDIATION);
            }
        }
    }

    if let Err(e) = registry::global().shutdown() {
        eprintln!("{}: failed to flush logs: {}", PROGRAM, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use channel_logger::{LoggerRegistry, SharedBuffer};

    fn buffered() -> (std::sync::Arc<Logger>, SharedBuffer) {
        let buffer = SharedBuffer::new();
        let logger = ChannelsBuilder::new()
            .destination(Destination::Buffer(buffer.clone()))
            .build(&LoggerRegistry::new(), PROGRAM)
            .unwrap();
        (logger, buffer)
    }

    #[test]
    fn test_flags_trigger_each_error_path() {
        let (logger, _) = buffered();

        let args = Args::try_parse_from([PROGRAM, "--testexceptionspecified"]).unwrap();
        assert!(matches!(execute(&args, &logger), Err(ModuleError::EmptyInput(_))));

        let args = Args::try_parse_from([PROGRAM, "--teu"]).unwrap();
        assert!(matches!(execute(&args, &logger), Err(ModuleError::Io(_))));
    }

    #[test]
    fn test_success_logs_every_level() {
        let (logger, buffer) = buffered();
        let args = Args::try_parse_from([PROGRAM]).unwrap();

        execute(&args, &logger).unwrap();

        let output = buffer.contents();
        for prefix in ["TEST INFO", "TEST DEBUG", "TEST WARNING", "TEST ERROR", "TEST CRITICAL"] {
            assert!(output.contains(prefix), "missing {}", prefix);
        }
    }
}
