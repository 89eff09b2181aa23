// SPDX-License-Identifier: MIT

//! Enumeration of network interfaces usable for device recovery.

use anyhow::{bail, Result};
use pnet_datalink::NetworkInterface;

/// Print the usable interfaces, one per line: name, first IPv4 address,
/// MAC. Loopback and MAC-less interfaces cannot carry the recovery
/// exchange and are skipped.
pub fn list_all() -> Result<()> {
    let mut shown = 0usize;

    for iface in pnet_datalink::interfaces() {
        if iface.is_loopback() {
            continue;
        }
        let mac = match iface.mac {
            Some(mac) => mac,
            None => continue,
        };
        println!("{:<16} {:<15} {}", iface.name, first_ipv4(&iface), mac);
        shown += 1;
    }

    if shown == 0 {
        bail!("no usable network interfaces found");
    }
    Ok(())
}

fn first_ipv4(iface: &NetworkInterface) -> String {
    iface
        .ips
        .iter()
        .find(|net| net.is_ipv4())
        .map(|net| net.ip().to_string())
        .unwrap_or_else(|| "0.0.0.0".to_string())
}
