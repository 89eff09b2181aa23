// SPDX-License-Identifier: MIT

//! Recovery tool for misconfigured or bricked embedded network devices.
//!
//! Usage:
//!   netrescue -i eth0 -a 192.168.1.254 -f firmware.bin
//!   netrescue -L

mod logging;
mod netif;
mod ops;

use std::env;
use std::io;

use netrescue_core::cli::{self, Outcome};
use netrescue_core::{dispatch, privilege};

#[cfg(feature = "tftp-test")]
use netrescue_core::Operations;

use crate::ops::SystemOps;

fn main() {
    let tokens: Vec<String> = env::args().skip(1).collect();
    std::process::exit(run(&tokens));
}

/// Single exit point: compute the process status for one invocation.
fn run(tokens: &[String]) -> i32 {
    let mut ops = SystemOps;

    match cli::parse(tokens) {
        Ok(Outcome::Version) => {
            println!("netrescue {}", env!("CARGO_PKG_VERSION"));
            0
        }
        Ok(Outcome::Help) => {
            let _ = cli::usage(&mut io::stdout());
            0
        }
        #[cfg(feature = "tftp-test")]
        Ok(Outcome::TransferTest { config, verbosity }) => {
            logging::init(verbosity);
            ops.run_transfer_test(&config)
        }
        Ok(Outcome::Run(invocation)) => {
            logging::init(invocation.verbosity);
            if let Err(err) = privilege::ensure_elevated() {
                eprintln!("Error: {}", err);
                return 1;
            }
            dispatch::dispatch(&invocation, &mut ops)
        }
        Err(err) => {
            if err.wants_usage() {
                let _ = cli::usage(&mut io::stderr());
            } else {
                eprintln!("{}", err);
            }
            1
        }
    }
}
