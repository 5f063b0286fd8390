//! # GeoSketch Modes
//!
//! Interchangeable drawing modes driven by pointer and keyboard events from a
//! host map engine.
//!
//! ## Core Components
//!
//! - **Lifecycle**: the register/start/stop state machine gating every mode
//! - **Line string mode**: click-and-preview line drawing with a closing
//!   click and an optional self-intersection guard
//! - **Static mode**: a mode that ignores all input
//! - **Sketcher**: the host facade that owns the store and routes events to
//!   the active mode
//!
//! ## Architecture
//!
//! ```text
//! Sketcher (host facade)
//!   ├── GeoJsonStore (shared feature store)
//!   ├── Projector (shared, injected)
//!   └── Modes (DrawMode trait objects)
//!         ├── Lifecycle
//!         ├── ClosingDetector / SelfIntersectionGuard (pure)
//!         └── Styles
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use geosketch_core::{LinearProjector, PointerEvent};
//! use geosketch_modes::{LineStringMode, Sketcher};
//!
//! let mut sketcher = Sketcher::new(LinearProjector::new(50.0));
//! sketcher.add_mode(LineStringMode::new()).unwrap();
//! sketcher.start().unwrap();
//! sketcher.set_mode("linestring").unwrap();
//!
//! sketcher.on_click(PointerEvent::new(0.0, 0.0, 0.0, 0.0)).unwrap();
//! assert_eq!(sketcher.snapshot().len(), 1);
//! ```

pub mod closing;
pub mod intersection;
pub mod lifecycle;
pub mod linestring;
pub mod mode;
pub mod sketcher;
pub mod static_mode;
pub mod styling;

pub use closing::is_closing_click;
pub use intersection::{segments_intersect, self_intersects};
pub use lifecycle::{Lifecycle, ModeState};
pub use linestring::{KeyEvents, LineStringMode, LineStringOptions, LINE_STRING_MODE};
pub use mode::{DrawMode, ModeConfig};
pub use sketcher::Sketcher;
pub use static_mode::{StaticMode, STATIC_MODE};
pub use styling::{LineStringStyles, StyleError};
