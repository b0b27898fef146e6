//! Logging utilities
//!
//! Forwards to the `log` facade under `std`; no-ops otherwise so the
//! crate stays usable from no_std hosts.

#![allow(unused)]

/// Log an info message
#[inline(always)]
pub fn info(msg: &str) {
    #[cfg(feature = "std")]
    log::info!("{msg}");
}

/// Log a warning message
#[inline(always)]
pub fn warn(msg: &str) {
    #[cfg(feature = "std")]
    log::warn!("{msg}");
}

/// Log an error message
#[inline(always)]
pub fn error(msg: &str) {
    #[cfg(feature = "std")]
    log::error!("{msg}");
}

/// Log a debug message with a label
#[inline(always)]
pub fn debug(label: &str, msg: &str) {
    #[cfg(feature = "std")]
    log::debug!("[{label}] {msg}");
}

/// Log an action being performed
#[inline(always)]
pub fn action(name: &str, details: &str) {
    #[cfg(feature = "std")]
    log::debug!("ACTION {name}: {details}");
}
