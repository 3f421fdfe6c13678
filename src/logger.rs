//! Structured logging with visual formatting.
//!
//! Log output uses Unicode box-drawing characters to group related messages
//! into vertical blocks. Logging can be disabled at runtime so the live
//! countdown screen is never interleaved with log lines.
//!
//! Conventions:
//! - `log_version!` prints the startup header once, `log_end!` the final
//!   terminator.
//! - `log_block_start!` opens a new conceptual block (loading config,
//!   fetching times, a phase change). Related follow-up lines use
//!   `log_decorated!` or `log_indented!`.
//! - `log_pipe!` inserts a single spacer line, typically before a leveled
//!   message (`log_warning!`, `log_error!`, ...) that starts its own block.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

static LOGGING_ENABLED: AtomicBool = AtomicBool::new(true);

/// Main logging interface.
pub struct Log;

impl Log {
    /// Enable or disable log output. The interactive countdown screen
    /// disables logging while it owns the terminal.
    pub fn set_enabled(enabled: bool) {
        LOGGING_ENABLED.store(enabled, Ordering::SeqCst);
    }

    /// Check if logging is currently enabled.
    pub fn is_enabled() -> bool {
        LOGGING_ENABLED.load(Ordering::SeqCst)
    }
}

/// Write a pre-formatted line to stdout. Needed by the macros.
pub fn write_output(text: &str) {
    print!("{text}");
    let _ = std::io::stdout().flush();
}

/// Log the application version header.
#[macro_export]
macro_rules! log_version {
    () => {{
        if $crate::logger::Log::is_enabled() {
            let version = env!("CARGO_PKG_VERSION");
            $crate::logger::write_output(&format!("┏ iftarr v{version} ━━╸\n"));
        }
    }};
}

/// Log the final termination marker.
#[macro_export]
macro_rules! log_end {
    () => {{
        if $crate::logger::Log::is_enabled() {
            $crate::logger::write_output("╹\n");
        }
    }};
}

/// Log a single empty pipe line for vertical spacing.
#[macro_export]
macro_rules! log_pipe {
    () => {{
        if $crate::logger::Log::is_enabled() {
            $crate::logger::write_output("┃\n");
        }
    }};
}

/// Log a block start message, initiating a new conceptual block.
#[macro_export]
macro_rules! log_block_start {
    ($($arg:tt)+) => {{
        if $crate::logger::Log::is_enabled() {
            let message = format!($($arg)+);
            $crate::logger::write_output(&format!("┃\n┣ {message}\n"));
        }
    }};
}

/// Log a decorated message within an existing block.
#[macro_export]
macro_rules! log_decorated {
    ($($arg:tt)+) => {{
        if $crate::logger::Log::is_enabled() {
            let message = format!($($arg)+);
            $crate::logger::write_output(&format!("┣ {message}\n"));
        }
    }};
}

/// Log an indented sub-item belonging to a parent message.
#[macro_export]
macro_rules! log_indented {
    ($($arg:tt)+) => {{
        if $crate::logger::Log::is_enabled() {
            let message = format!($($arg)+);
            $crate::logger::write_output(&format!("┃   {message}\n"));
        }
    }};
}

/// Log a warning message with yellow-colored level prefix.
#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)+) => {{
        if $crate::logger::Log::is_enabled() {
            let message = format!($($arg)+);
            $crate::logger::write_output(&format!("┣[\x1b[33mWARNING\x1b[0m] {message}\n"));
        }
    }};
}

/// Log an error message with red-colored level prefix.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)+) => {{
        if $crate::logger::Log::is_enabled() {
            let message = format!($($arg)+);
            $crate::logger::write_output(&format!("┣[\x1b[31mERROR\x1b[0m] {message}\n"));
        }
    }};
}

/// Log a terminal error that ends the flow, with closing corner.
#[macro_export]
macro_rules! log_error_exit {
    ($($arg:tt)+) => {{
        if $crate::logger::Log::is_enabled() {
            let message = format!($($arg)+);
            $crate::logger::write_output(&format!("┃\n┗[\x1b[31mERROR\x1b[0m] {message}\n"));
        }
    }};
}

/// Log an informational message with green-colored level prefix.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)+) => {{
        if $crate::logger::Log::is_enabled() {
            let message = format!($($arg)+);
            $crate::logger::write_output(&format!("┣[\x1b[32mINFO\x1b[0m] {message}\n"));
        }
    }};
}

/// Log a debug/operational message.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)+) => {{
        if $crate::logger::Log::is_enabled() {
            let message = format!($($arg)+);
            $crate::logger::write_output(&format!("┣[\x1b[32mDEBUG\x1b[0m] {message}\n"));
        }
    }};
}
