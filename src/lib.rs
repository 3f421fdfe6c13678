//! # iftarr Library
//!
//! Internal library for the iftarr binary. The split exists to enable
//! testing of the internals and to keep CLI dispatch (main.rs) separate
//! from application logic.
//!
//! ## Architecture
//!
//! - **Core model**: `window` (the three fasting boundaries), `phase`
//!   (classification and countdown derivation), `session` (stateful
//!   transition detection), `wallclock` (timezone-aware parsing)
//! - **Upstream clients**: `api` for the prayer-times and geocoding
//!   endpoints, `methods` for the calculation-method registry
//! - **Shell**: `core` runs the 1 Hz countdown loop, `display` renders it,
//!   `commands` implements the one-shot subcommands
//! - **Infrastructure**: `config` (TOML preferences), `logger`, `io` (lock
//!   file), `args` (CLI parsing)

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

pub mod api;
pub mod args;
pub mod commands;
pub mod config;
pub mod constants;
pub mod core;
pub mod display;
pub mod error;
pub mod io;
pub mod location;
pub mod methods;
pub mod phase;
pub mod session;
pub mod wallclock;
pub mod window;
