//! Unified logging macro for the crate.
//!
//! `knx_log!` forwards to the `log` crate by default, so any `log`
//! compatible logger installed by the application (env_logger, tracing-log,
//! ...) receives parser diagnostics. With the `defmt` feature the same call
//! sites go through `defmt` instead.
//!
//! # Usage
//!
//! ```rust,ignore
//! knx_log!(trace, "consumed frame of {} bytes", len);
//! knx_log!(warn, "skipping malformed telegram");
//! ```

/// Unified logging macro - selects `log::` or `defmt::` based on features
#[macro_export]
#[cfg(not(feature = "defmt"))]
macro_rules! knx_log {
    (info, $($arg:tt)*) => { log::info!($($arg)*) };
    (debug, $($arg:tt)*) => { log::debug!($($arg)*) };
    (warn, $($arg:tt)*) => { log::warn!($($arg)*) };
    (error, $($arg:tt)*) => { log::error!($($arg)*) };
    (trace, $($arg:tt)*) => { log::trace!($($arg)*) };
}

#[macro_export]
#[cfg(feature = "defmt")]
macro_rules! knx_log {
    (info, $($arg:tt)*) => { defmt::info!($($arg)*) };
    (debug, $($arg:tt)*) => { defmt::debug!($($arg)*) };
    (warn, $($arg:tt)*) => { defmt::warn!($($arg)*) };
    (error, $($arg:tt)*) => { defmt::error!($($arg)*) };
    (trace, $($arg:tt)*) => { defmt::trace!($($arg)*) };
}
