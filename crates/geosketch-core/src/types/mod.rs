//! Type system utilities and aliases.
//!
//! This module provides type aliases and utilities for the shared,
//! single-threaded handles passed between the host and its drawing modes.
//!
//! ## Modules
//!
//! - [`aliases`]: Type aliases for `Rc<RefCell<T>>`, collaborator handles, listener lists.

pub mod aliases;

pub use aliases::*;
