//! Logging macros gated on a module-level `ENABLE_LOGS` flag, so chatty
//! modules can be silenced wholesale without touching call sites.
//!
//! Each module using them declares its own flag:
//! ```rust,ignore
//! const ENABLE_LOGS: bool = true;
//! use crate::{log_error, log_info};
//! ```

/// Info-level logging, skipped in modules whose `ENABLE_LOGS` is false.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::info!($($arg)*);
        }
    };
}

/// Warn-level counterpart of [`log_info!`].
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::warn!($($arg)*);
        }
    };
}

/// Error-level counterpart of [`log_info!`].
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::error!($($arg)*);
        }
    };
}
