// SPDX-License-Identifier: MIT

//! Logger setup driven by the `-v` count.

use std::io::Write;

use env_logger::Builder;
use log::LevelFilter;

/// Map the `-v` count to a log level. The command line is the only
/// verbosity control; `RUST_LOG` is deliberately not consulted.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize the process-wide logger.
pub fn init(verbosity: u8) {
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, level_for(verbosity))
        .init();
}
