// SPDX-License-Identifier: MIT

//! Front door of the netrescue recovery tool.
//!
//! This crate owns everything between the raw command line and the recovery
//! engine: the configuration record, the option scanner and validator, the
//! privilege gate and the dispatcher. The recovery session, the transfer
//! client and interface enumeration are reached through the
//! [`dispatch::Operations`] contract and are provided by the binary.

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod privilege;

pub use cli::{Invocation, Outcome, ParseError};
pub use config::Config;
pub use dispatch::Operations;
