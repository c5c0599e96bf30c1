//! Console output module.
//!
//! The user-facing output channel for the demo drivers. Diagnostics go
//! through `tracing`; anything the demo wants the user to read goes here.

/// Print a single message line to stdout.
pub fn print_message(message: &str) {
    println!("{message}");
}
