//! Input events and change notification
//!
//! - [`event`]: pointer and keyboard events delivered by the host map engine
//! - [`listener`]: the callback a mode invokes after every store mutation

pub mod event;
pub mod listener;
