//! Crate-internal logging macros.
//!
//! With the `defmt` feature these forward to the matching `defmt` macro and the
//! messages go out over whatever transport the firmware links (RTT, UART).
//! Without it they expand to nothing, so host builds and tests carry no
//! logging dependency.
//!
//! ```ignore
//! log_debug!("CGRAM slot {} loaded", slot.index());
//! log_warn!("CGRAM load failed at slot {}", slot.index());
//! ```

/// Log a message at Debug level.
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::debug!($($arg)*);
    }};
}

/// Log a message at Info level.
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::info!($($arg)*);
    }};
}

/// Log a message at Warn level.
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::warn!($($arg)*);
    }};
}

pub(crate) use {log_debug, log_info, log_warn};
