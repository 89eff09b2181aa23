// SPDX-License-Identifier: MIT

//! Dispatcher selection tests using a recording Operations mock.

use netrescue_core::cli::{parse, Invocation, Outcome};
use netrescue_core::config::Config;
use netrescue_core::dispatch::{dispatch, Operations};

#[derive(Default)]
struct RecordingOps {
    recovered: Vec<Config>,
    listed: u32,
    status: i32,
}

impl Operations for RecordingOps {
    fn run_device_recovery(&mut self, config: &Config) -> i32 {
        self.recovered.push(config.clone());
        self.status
    }

    fn list_network_interfaces(&mut self) -> i32 {
        self.listed += 1;
        self.status
    }

    #[cfg(feature = "tftp-test")]
    fn run_transfer_test(&mut self, _config: &Config) -> i32 {
        self.status
    }
}

fn invocation(args: &[&str]) -> Invocation {
    match parse(args) {
        Ok(Outcome::Run(invocation)) => invocation,
        other => panic!("expected Outcome::Run, got {:?}", other),
    }
}

#[test]
fn test_recovery_invocation_dispatches_device_recovery() {
    let inv = invocation(&["-i", "eth0", "-a", "192.168.1.254", "-f", "firmware.bin"]);
    let mut ops = RecordingOps::default();

    assert_eq!(dispatch(&inv, &mut ops), 0);
    assert_eq!(ops.listed, 0);
    assert_eq!(ops.recovered.len(), 1);

    // The record reaching the operation carries the documented defaults.
    let config = &ops.recovered[0];
    assert_eq!(config.netmask, "255.255.255.0");
    assert_eq!(config.mac, "ff:ff:ff:ff:ff:ff");
    assert_eq!(config.port, 69);
    assert_eq!(config.rx_timeout_ms, 200);
    assert_eq!(config.post_upload_wait_ms, 120_000);
}

#[test]
fn test_list_invocation_dispatches_enumeration_only() {
    let inv = invocation(&["-L"]);
    let mut ops = RecordingOps::default();

    assert_eq!(dispatch(&inv, &mut ops), 0);
    assert_eq!(ops.listed, 1);
    assert!(ops.recovered.is_empty());
}

#[test]
fn test_list_wins_over_recovery_fields() {
    let inv = invocation(&["-i", "eth0", "-a", "10.0.0.1", "-f", "fw.bin", "-L"]);
    let mut ops = RecordingOps::default();

    dispatch(&inv, &mut ops);
    assert_eq!(ops.listed, 1);
    assert!(ops.recovered.is_empty());
}

#[test]
fn test_operation_status_is_forwarded_verbatim() {
    let inv = invocation(&["-i", "eth0", "-a", "10.0.0.1", "-f", "fw.bin"]);
    let mut ops = RecordingOps {
        status: 7,
        ..RecordingOps::default()
    };

    assert_eq!(dispatch(&inv, &mut ops), 7);
}
