// src/log.rs
//
// Process-wide logging. Everything goes through `tracing`; the binaries pick
// a sink once at startup. The GUI has no console on Windows, so it logs to
// `.store/debug.log`; the CLI tools log to stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::consts::{LOG_FILE, STORE_DIR};

// Re-exported so the macros below resolve from any crate that uses them.
pub use tracing;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to `.store/debug.log`.
    File,
    Stderr,
}

pub fn log_path() -> PathBuf {
    Path::new(STORE_DIR).join(LOG_FILE)
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored. If the log file can't be opened we fall back to stderr.
pub fn init(target: LogTarget) {
    match target {
        LogTarget::File => {
            let path = log_path();
            let opened = fs::create_dir_all(STORE_DIR).and_then(|_| {
                OpenOptions::new().create(true).append(true).open(&path)
            });
            match opened {
                Ok(file) => {
                    let _ = tracing_subscriber::fmt()
                        .with_env_filter(filter())
                        .with_ansi(false)
                        .with_target(false)
                        .with_writer(Mutex::new(file))
                        .try_init();
                }
                Err(e) => {
                    init(LogTarget::Stderr);
                    tracing::warn!("Log: cannot open {} ({e}), using stderr", path.display());
                }
            }
        }
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_target(false)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::tracing::error!($($arg)*)
    };
}
