//! # Roster Core
//!
//! Domain types for the roster demos.
//!
//! * **[`greeting`]**: the [`greeting::Greetable`] capability and its [`greeting::Person`] variant.
//! * **[`department`]**: the [`department::Department`] contract, the IT variant and the
//!   single-instance accounting department.
//! * **[`calculator`]**: a callable contract, [`calculator::AddFunction`].

pub mod calculator;
pub mod department;
pub mod greeting;
