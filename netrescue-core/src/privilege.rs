// SPDX-License-Identifier: MIT

//! Elevated-privilege gate run before any recovery operation.
//!
//! Forcing a device into recovery mode needs raw network access, which in
//! turn needs root (or administrator) rights. The gate answers pass/fail
//! only; how to obtain elevation is the operator's problem.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PrivilegeError {
    #[error("must be run as root")]
    NotRoot,
    #[error("must be run as administrator")]
    NotAdministrator,
}

/// Verify the process holds the rights needed for raw network access.
#[cfg(unix)]
pub fn ensure_elevated() -> Result<(), PrivilegeError> {
    if unsafe { libc::geteuid() } == 0 {
        Ok(())
    } else {
        Err(PrivilegeError::NotRoot)
    }
}

/// Verify the process holds the rights needed for raw network access.
///
/// Probes membership in BUILTIN\Administrators (S-1-5-32-544) on the
/// current token. When the probe itself fails the run is allowed to
/// continue with a warning; the capture layer will surface the real
/// failure if rights are actually missing.
#[cfg(windows)]
pub fn ensure_elevated() -> Result<(), PrivilegeError> {
    use std::process::Command;

    let probe = Command::new("powershell")
        .args([
            "-NoProfile",
            "-Command",
            "[bool](([System.Security.Principal.WindowsIdentity]::GetCurrent()).groups -match 'S-1-5-32-544')",
        ])
        .output();

    match probe {
        Ok(output) => {
            let verdict = String::from_utf8_lossy(&output.stdout);
            if verdict.trim() == "True" {
                Ok(())
            } else {
                Err(PrivilegeError::NotAdministrator)
            }
        }
        Err(err) => {
            log::warn!("failed to check administrator privileges: {}", err);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn test_verdict_matches_effective_uid() {
        let elevated = unsafe { libc::geteuid() } == 0;
        assert_eq!(ensure_elevated().is_ok(), elevated);
        if !elevated {
            assert_eq!(ensure_elevated(), Err(PrivilegeError::NotRoot));
        }
    }
}
