// SPDX-License-Identifier: MIT

//! Selection of the single external operation for a validated invocation.

use log::debug;

use crate::cli::Invocation;
use crate::config::Config;

/// Calling contracts of the external operations this layer drives.
///
/// Each method returns the process exit status for the run: 0 on success,
/// non-zero on failure. Non-zero meanings belong to the operation itself;
/// the dispatcher forwards them verbatim and never retries.
pub trait Operations {
    /// Force the device into recovery mode and upload the firmware image.
    fn run_device_recovery(&mut self, config: &Config) -> i32;

    /// Enumerate and print the usable network interfaces.
    fn list_network_interfaces(&mut self) -> i32;

    /// Exercise the transfer client on its own, without the recovery
    /// handshake.
    #[cfg(feature = "tftp-test")]
    fn run_transfer_test(&mut self, config: &Config) -> i32;
}

/// Run exactly one operation for a validated, privilege-cleared invocation.
pub fn dispatch(invocation: &Invocation, ops: &mut dyn Operations) -> i32 {
    if invocation.list {
        debug!("dispatching interface enumeration");
        ops.list_network_interfaces()
    } else {
        debug!("dispatching device recovery");
        ops.run_device_recovery(&invocation.config)
    }
}
