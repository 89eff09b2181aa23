// SPDX-License-Identifier: MIT

//! Command-line option scanning and validation.
//!
//! The grammar is getopt-style short options, consumed in a single
//! left-to-right pass. The scan is an explicit state machine with one exit
//! point rather than a declarative parser: the early-exit rules are order
//! dependent (`-V` pre-empts deferred failures, `-U` fires only when the
//! address and firmware were seen earlier in the scan), which a declarative
//! grammar cannot express.

use std::io::{self, Write};

use thiserror::Error;

use crate::config::Config;

/// Options that take a value, either attached (`-ieth0`) or as the next
/// token (`-i eth0`).
const VALUE_OPTS: &[char] = &['a', 'c', 'f', 'F', 'i', 'm', 'M', 'p', 'R', 't', 'T'];

/// A validated invocation, ready for the privilege gate and dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub config: Config,
    /// Number of `-v` flags given.
    pub verbosity: u8,
    /// List network interfaces instead of running a recovery.
    pub list: bool,
}

/// Terminal outcome of a successful scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// `-V`: print the version string and exit successfully.
    Version,
    /// `-h`: print the usage text to stdout and exit successfully.
    Help,
    /// `-U` scanned after both the address and the firmware file: exercise
    /// the transfer client directly, bypassing the privilege gate and the
    /// dispatcher.
    #[cfg(feature = "tftp-test")]
    TransferTest { config: Config, verbosity: u8 },
    /// Validation passed; run the privilege gate, then dispatch.
    Run(Invocation),
}

/// Scan failures. All are terminal; the process exits with status 1.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown option -{0}")]
    UnknownOption(char),
    #[error("option -{0} requires a value")]
    MissingValue(char),
    #[error("unexpected operand {0:?}")]
    BadOperand(String),
    #[error("Invalid numeric value for -{0}.")]
    InvalidNumber(char),
    #[error("mandatory options missing (-a, -i and -f and/or -c)")]
    MissingRequired,
}

impl ParseError {
    /// Whether the failure is reported through the full usage text rather
    /// than its own one-line message.
    pub fn wants_usage(&self) -> bool {
        !matches!(self, ParseError::InvalidNumber(_))
    }
}

/// Scan the invocation tokens (everything after the program name).
///
/// Failures discovered mid-scan are deferred until the end of the token
/// sequence so that a later `-V` can still turn the run into a successful
/// version display. The first failure is the one reported.
pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Outcome, ParseError> {
    let mut config = Config::default();
    let mut verbosity: u8 = 0;
    let mut list = false;
    let mut deferred: Option<ParseError> = None;

    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_ref();
        i += 1;

        let flags = match token.strip_prefix('-') {
            Some(rest) if !rest.is_empty() => rest,
            _ => {
                defer(&mut deferred, ParseError::BadOperand(token.to_string()));
                continue;
            }
        };

        let mut chars = flags.char_indices();
        while let Some((pos, opt)) = chars.next() {
            if VALUE_OPTS.contains(&opt) {
                let attached = &flags[pos + opt.len_utf8()..];
                let value = if !attached.is_empty() {
                    attached
                } else if i < tokens.len() {
                    i += 1;
                    tokens[i - 1].as_ref()
                } else {
                    defer(&mut deferred, ParseError::MissingValue(opt));
                    break;
                };
                if let Err(err) = apply_value(&mut config, opt, value) {
                    defer(&mut deferred, err);
                }
                break;
            }

            match opt {
                'v' => verbosity = verbosity.saturating_add(1),
                'L' => list = true,
                'V' => return Ok(Outcome::Version),
                'h' if deferred.is_none() => return Ok(Outcome::Help),
                'h' => {}
                #[cfg(feature = "tftp-test")]
                'U' if deferred.is_none()
                    && config.addr.is_some()
                    && config.firmware.is_some() =>
                {
                    return Ok(Outcome::TransferTest { config, verbosity });
                }
                other => defer(&mut deferred, ParseError::UnknownOption(other)),
            }
        }
    }

    if let Some(err) = deferred {
        return Err(err);
    }

    let file_or_cmd = config.firmware.is_some() || config.pre_upload_cmd.is_some();
    if !list && !(config.interface.is_some() && config.addr.is_some() && file_or_cmd) {
        return Err(ParseError::MissingRequired);
    }

    Ok(Outcome::Run(Invocation {
        config,
        verbosity,
        list,
    }))
}

/// Record the first scan failure; later ones are dropped so the original
/// cause is the one reported.
fn defer(slot: &mut Option<ParseError>, err: ParseError) {
    if slot.is_none() {
        *slot = Some(err);
    }
}

/// Store a value option. String values are copied verbatim; numeric values
/// are range checked.
fn apply_value(config: &mut Config, opt: char, value: &str) -> Result<(), ParseError> {
    match opt {
        'a' => config.addr = Some(value.to_string()),
        'c' => config.pre_upload_cmd = Some(value.to_string()),
        'f' => config.firmware = Some(value.to_string()),
        'F' => config.remote_name = Some(value.to_string()),
        'i' => config.interface = Some(value.to_string()),
        'm' => config.mac = value.to_string(),
        'M' => config.netmask = value.to_string(),
        #[cfg(feature = "set-region")]
        'R' => config.region = Some(value.to_string()),
        'p' => config.port = parse_bounded(value, 'p', u16::MAX as i64)? as u16,
        't' => config.rx_timeout_ms = parse_bounded(value, 't', i32::MAX as i64)? as u64,
        'T' => {
            // Given in whole seconds, stored in milliseconds.
            config.post_upload_wait_ms = parse_bounded(value, 'T', i32::MAX as i64)? as u64 * 1000;
        }
        // `-R` still consumes its value in builds without region support,
        // but the option itself is rejected.
        other => return Err(ParseError::UnknownOption(other)),
    }
    Ok(())
}

/// Parse a strictly positive integer no greater than `max`.
fn parse_bounded(value: &str, opt: char, max: i64) -> Result<i64, ParseError> {
    match value.parse::<i64>() {
        Ok(v) if v > 0 && v <= max => Ok(v),
        _ => Err(ParseError::InvalidNumber(opt)),
    }
}

const USAGE_HEAD: &str = "\
Usage: netrescue [OPTIONS...]

Options (-a, -i and -f and/or -c are mandatory):
 -a <ipaddr>     IP address to assign to the target device
 -c <command>    Command to run before (or instead of) the upload
 -f <firmware>   Firmware file to send
 -F <filename>   Remote filename to use during the upload
 -i <interface>  Network interface directly connected to the device
 -m <mac>        MAC address of the target device (xx:xx:xx:xx:xx:xx)
 -M <netmask>    Subnet mask to assign to the target device
 -t <ms>         Timeout (in milliseconds) for recovery messages
 -T <seconds>    Time to wait after a successful upload
 -p <port>       Port to use for the firmware transfer
";

#[cfg(feature = "set-region")]
const USAGE_REGION: &str =
    " -R <region>     Set device region (NA, WW, GR, PR, RU, BZ, IN, KO, JP)\n";

#[cfg(feature = "tftp-test")]
const USAGE_TFTP_TEST: &str = " -U              Test the firmware transfer client\n";

const USAGE_TAIL: &str = " -v              Be verbose (repeatable)
 -V              Print version and exit
 -L              List network interfaces
 -h              Show this screen

Example: netrescue -i eth0 -a 192.168.1.254 -f firmware.bin
";

/// Render the full usage text.
pub fn usage(w: &mut dyn Write) -> io::Result<()> {
    w.write_all(USAGE_HEAD.as_bytes())?;
    #[cfg(feature = "set-region")]
    w.write_all(USAGE_REGION.as_bytes())?;
    #[cfg(feature = "tftp-test")]
    w.write_all(USAGE_TFTP_TEST.as_bytes())?;
    w.write_all(USAGE_TAIL.as_bytes())
}
