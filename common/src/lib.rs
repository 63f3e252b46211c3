//! Types shared between the roster crates.
//!
//! * [`config`]: runtime options gathered from the command line.
//! * [`error`]: failures raised by the department domain.

pub mod config;
pub mod error;
