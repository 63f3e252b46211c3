//! Cross-crate scenarios for the roster workspace.

mod departments;
mod greeting;
