//! Command-line front end for the `fizzbuzz` library.
//!
//! Orchestration lives in [`cli`]; [`config`] holds presentation settings,
//! [`logging`] sets up diagnostics and [`exit_codes`] maps failures to stable
//! process exit codes.

pub mod cli;
pub mod config;
pub mod exit_codes;
pub mod logging;
