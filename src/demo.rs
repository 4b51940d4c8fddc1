//! Demonstration run exercising both channels
//!
//! Shows the intended usage pattern for new modules: parse arguments,
//! configure the logger, do the work, handle the one anticipated failure
//! narrowly and everything else through a fallback, and log an exit marker
//! on every path out.

use crate::config::Destination;
use crate::core::Logger;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

/// Logged with the captured error when the run divides by zero
pub const DIVISION_BY_ZERO_REMEDIATION: &str = "Oops! Something went wrong. The application tried to do a \
math problem where it tried to divide a number by zero, but that is impossible to do. So the program \
stopped to make sure it doesn't give you any wrong or unreliable information.

But, don't worry! Let's figure out what went wrong and get you back on track. First, please double-check \
the information you entered. Make sure everything is correct and matches what you intended. If there's \
anything that needs to be changed, go ahead and fix it.

If you're still having trouble, we're here to help! You can reach out to our support team in a way that's \
most convenient for you.

If you like chatting online, you can connect with a support team member on our website at \
support-chat.domain.tld. They're available all the time to assist you.

If you prefer talking on the phone, you can call us at 800-555-1234 on weekdays between 9 AM and 5 PM \
Central Time.

If you want to send us a message and get a response by email, you can use our online support request \
form at support-form.domain.tld. We'll make sure to get back to you within 1 to 2 business days.

We're here to make sure everything runs smoothly for you, so don't hesitate to get in touch.

Technical Error Details to Share with Our Help Desk Team:";

/// Logged with the captured error for any other failure
pub const GENERAL_REMEDIATION: &str = "Oops! Something went wrong. The application stopped to make sure \
it doesn't give you any wrong or unreliable information.

But, don't worry! Let's figure out what went wrong and get you back on track. First, please double-check \
the information you entered. Make sure everything is correct and matches what you intended. If there's \
anything that needs to be changed, go ahead and fix it.

If you're still having trouble, we're here to help! You can reach out to our support team in a way that's \
most convenient for you.

If you like chatting online, you can connect with a support team member on our website at \
support-chat.domain.tld. They're available all the time to assist you.

If you prefer talking on the phone, you can call us at 800-555-1234 on weekdays between 9 AM and 5 PM \
Central Time.

If you want to send us a message and get a response by email, you can use our online support request \
form at support-form.domain.tld. We'll make sure to get back to you within 1 to 2 business days.

We're here to make sure everything runs smoothly for you, so don't hesitate to get in touch.

Technical Error Details to Share with Our Help Desk Team:";

/// Command line arguments of the demonstration run
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(
    name = "channel-demo",
    version = env!("CARGO_PKG_VERSION"),
    about = "Create logging configuration to a file or stderr for messaging (debug, info, warning, error, critical).",
    after_help = "For questions or concerns, please contact your support team."
)]
pub struct DemoArgs {
    /// Test handling of the anticipated (division by zero) error
    #[arg(long = "tes", visible_alias = "testexceptionspecified")]
    pub test_exception_specified: bool,

    /// Test handling of an unanticipated error
    #[arg(long = "teu", visible_alias = "testexceptionunspecified")]
    pub test_exception_unspecified: bool,

    /// Log file path and name; logs go to stderr when omitted
    #[arg(long = "lfpn", visible_alias = "logfilepathname", value_name = "PATH")]
    pub logfile_path_name: Option<PathBuf>,
}

impl DemoArgs {
    pub fn destination(&self) -> Destination {
        Destination::from_path(self.logfile_path_name.clone())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("attempted to divide {dividend} by zero")]
    DivisionByZero { dividend: i64 },

    #[error("{0}")]
    Unexpected(String),

    #[error("could not write progress output: {0}")]
    Output(#[from] std::io::Error),
}

/// How a run ended; every variant has already been logged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoOutcome {
    Completed,
    RecoveredSpecific,
    RecoveredUnspecified,
}

/// Logs `EXITING: <program>` when dropped, whichever way the scope is left
pub struct ExitMarker<'a> {
    logger: &'a Logger,
    program: &'a str,
}

impl<'a> ExitMarker<'a> {
    pub fn new(logger: &'a Logger, program: &'a str) -> Self {
        Self { logger, program }
    }
}

impl Drop for ExitMarker<'_> {
    fn drop(&mut self) {
        self.logger.info(format!("EXITING: {}", self.program));
    }
}

fn divide(dividend: i64, divisor: i64) -> Result<i64, DemoError> {
    dividend
        .checked_div(divisor)
        .ok_or(DemoError::DivisionByZero { dividend })
}

fn exercise(args: &DemoArgs, logger: &Logger, out: &mut dyn Write) -> Result<(), DemoError> {
    writeln!(out, "\n\n----- STARTING EXECUTION -----\nOne moment please.")?;

    if args.test_exception_specified {
        divide(1, 0)?;
    }
    if args.test_exception_unspecified {
        return Err(DemoError::Unexpected(
            "Oh, golly. Something really bad unexpectedly happened.".to_string(),
        ));
    }

    crate::info!(
        logger,
        "TEST INFO: Message to confirm execution is working as expected. Generally, displayed \
         only in DEVELOPMENT environment; typically, suppressed in TEST and PRODUCTION environments."
    );
    crate::debug!(
        logger,
        "TEST DEBUG: Message with critical details to help identify and resolve problems. \
         Generally, displayed only in DEVELOPMENT environment; typically, suppressed in TEST and \
         PRODUCTION environments."
    );
    crate::warning!(
        logger,
        "TEST WARNING: Message indicating that an unexpected minor problem happened, or will \
         likely happen in the near future (e.g. disk space low), even though execution is \
         currently working as expected."
    );
    crate::error!(
        logger,
        "TEST ERROR: Message indicating that an unexpected serious problem has occurred, which \
         prevented some code or function to finish executing as expected. State that results \
         are likely invalid or unreliable. Suggest 2 or 3 of the most common causes and related \
         corrective actions. Refer to a specific, credible help article title and URL. Recommend \
         contacting the help desk if errors continue. Offer several contact response levels \
         depending on the user's urgency. Provide help desk contact information; e.g. online \
         form, email address, chat URL, phone number."
    );
    crate::critical!(
        logger,
        "TEST CRITICAL: Message indicating that an unexpected near-fatal or fatal problem has \
         occurred, which will very likely prevent any further execution to occur. State that \
         results are very likely invalid or unreliable. Suggest 2 or 3 of the most common causes \
         and related corrective actions. Refer to a specific, credible help article title and URL. \
         Recommend contacting the help desk if errors continue. Offer several contact response \
         levels depending on the user's urgency. Provide help desk contact information; e.g. \
         online form, email address, chat URL, phone number."
    );

    match args.logfile_path_name {
        None => writeln!(out, "\n\nSUCCESSFUL EXECUTION: See output displayed above.")?,
        Some(ref path) => writeln!(
            out,
            "\n\nSUCCESSFUL EXECUTION: See output in {} .",
            path.display()
        )?,
    }
    Ok(())
}

/// Run the demonstration against a configured logger.
///
/// User-facing progress goes to `out`; failures are logged through the
/// alert channel and never returned. `EXITING: <program>` is logged last on
/// every path.
pub fn run(args: &DemoArgs, logger: &Logger, program: &str, out: &mut dyn Write) -> DemoOutcome {
    let _exit = ExitMarker::new(logger, program);

    match exercise(args, logger, out) {
        Ok(()) => DemoOutcome::Completed,
        Err(e @ DemoError::DivisionByZero { .. }) => {
            crate::exception!(logger, &e, "{}", DIVISION_BY_ZERO_REMEDIATION);
            DemoOutcome::RecoveredSpecific
        }
        Err(e) => {
            crate::exception!(logger, &e, "{}", GENERAL_REMEDIATION);
            DemoOutcome::RecoveredUnspecified
        }
    }
}
