// SPDX-License-Identifier: MIT

//! Production wiring of the external operations.
//!
//! Interface enumeration is served in-process. The recovery session and
//! the transfer client live in the recovery engine, which ships separately
//! from this front end; their entry points run the local checks and report
//! a delegated failure while the engine is absent.

use std::fs;

use anyhow::{bail, Context, Result};
use log::{error, info};

use netrescue_core::config::Config;
use netrescue_core::dispatch::Operations;

use crate::netif;

/// Operations wiring used by the shipped binary.
pub struct SystemOps;

impl Operations for SystemOps {
    fn run_device_recovery(&mut self, config: &Config) -> i32 {
        status_of(recovery(config))
    }

    fn list_network_interfaces(&mut self) -> i32 {
        status_of(netif::list_all())
    }

    #[cfg(feature = "tftp-test")]
    fn run_transfer_test(&mut self, config: &Config) -> i32 {
        status_of(transfer_test(config))
    }
}

/// Collapse an operation result into a process exit status.
fn status_of(result: Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            error!("{:#}", err);
            1
        }
    }
}

/// Entry point of the recovery session.
fn recovery(config: &Config) -> Result<()> {
    check_firmware(config)?;
    info!(
        "recovering device {} via {} (assigning {}/{})",
        config.mac,
        config.interface.as_deref().unwrap_or("?"),
        config.addr.as_deref().unwrap_or("?"),
        config.netmask
    );
    bail!("the raw-Ethernet recovery engine is not included in this build")
}

/// Entry point of the standalone transfer-client exercise.
#[cfg(feature = "tftp-test")]
fn transfer_test(config: &Config) -> Result<()> {
    check_firmware(config)?;
    info!(
        "transfer test: {} -> {}:{}",
        config.firmware.as_deref().unwrap_or("?"),
        config.addr.as_deref().unwrap_or("?"),
        config.port
    );
    bail!("the transfer client is part of the recovery engine, which is not included in this build")
}

/// Verify the local firmware image is readable before involving the
/// engine. A pre-upload command may stand in for the image, in which case
/// there is nothing to check here.
fn check_firmware(config: &Config) -> Result<()> {
    if let Some(firmware) = &config.firmware {
        let meta = fs::metadata(firmware)
            .with_context(|| format!("cannot read firmware file {}", firmware))?;
        info!("firmware image {} ({} bytes)", firmware, meta.len());
    }
    Ok(())
}
