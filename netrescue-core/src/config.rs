// SPDX-License-Identifier: MIT

//! Invocation-derived settings for a recovery run.
//!
//! The record is built once by the option scanner and handed read-only to
//! whichever operation gets dispatched. It carries no behavior of its own.

/// Hardware address used when the target MAC is unknown.
pub const BROADCAST_MAC: &str = "ff:ff:ff:ff:ff:ff";

/// Subnet mask assigned to the target device unless overridden.
pub const DEFAULT_NETMASK: &str = "255.255.255.0";

/// Default port for the firmware transfer.
pub const DEFAULT_PORT: u16 = 69;

/// Default receive timeout for recovery messages, in milliseconds.
pub const DEFAULT_RX_TIMEOUT_MS: u64 = 200;

/// Default time to wait after a completed upload, in milliseconds.
pub const DEFAULT_POST_UPLOAD_WAIT_MS: u64 = 120_000;

/// Operation requested from the recovery engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Op {
    /// Force the device into recovery mode and upload a firmware image.
    #[default]
    UploadFirmware,
}

/// Everything derived from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// IP address to assign to the target device.
    pub addr: Option<String>,
    /// Subnet mask to assign to the target device.
    pub netmask: String,
    /// Network interface directly connected to the device.
    pub interface: Option<String>,
    /// MAC address of the target device.
    pub mac: String,
    /// Local firmware image to send.
    pub firmware: Option<String>,
    /// Remote filename to use during the upload.
    pub remote_name: Option<String>,
    /// Command to run before (or instead of) the upload.
    pub pre_upload_cmd: Option<String>,
    /// Region code to program into the device.
    #[cfg(feature = "set-region")]
    pub region: Option<String>,
    /// Receive timeout for recovery messages, in milliseconds.
    pub rx_timeout_ms: u64,
    /// Time to wait after a completed upload, in milliseconds. Supplied on
    /// the command line in whole seconds.
    pub post_upload_wait_ms: u64,
    /// Port used for the firmware transfer.
    pub port: u16,
    /// Operation requested from the recovery engine.
    pub op: Op,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: None,
            netmask: DEFAULT_NETMASK.to_string(),
            interface: None,
            mac: BROADCAST_MAC.to_string(),
            firmware: None,
            remote_name: None,
            pre_upload_cmd: None,
            #[cfg(feature = "set-region")]
            region: None,
            rx_timeout_ms: DEFAULT_RX_TIMEOUT_MS,
            post_upload_wait_ms: DEFAULT_POST_UPLOAD_WAIT_MS,
            port: DEFAULT_PORT,
            op: Op::UploadFirmware,
        }
    }
}
