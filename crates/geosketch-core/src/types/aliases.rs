//! Type aliases for commonly used shared handles.
//!
//! Every mode runs on the host's event thread, so collaborators are shared
//! through `Rc<RefCell<T>>` rather than locks. The aliases give those nested
//! types a name that says what they hold.
//!
//! ## Usage
//!
//! ```rust
//! use geosketch_core::types::{shared, SharedStore};
//! use geosketch_core::{GeoJsonStore, GeometryStore};
//!
//! let store = shared(GeoJsonStore::new());
//! let handle: SharedStore = store.clone();
//! assert_eq!(handle.borrow().len(), 0);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::listener::ChangeListener;
use crate::projection::Projector;
use crate::store::GeometryStore;

// =============================================================================
// SINGLE-THREADED SHARED TYPES (Rc<RefCell<T>>)
// =============================================================================

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
///
/// # Example
/// ```rust
/// use geosketch_core::types::{shared, Shared};
///
/// let counter: Shared<u32> = shared(0);
/// *counter.borrow_mut() += 1;
/// assert_eq!(*counter.borrow(), 1);
/// ```
pub type Shared<T> = Rc<RefCell<T>>;

/// A shared vector for single-threaded collection management.
pub type SharedVec<T> = Rc<RefCell<Vec<T>>>;

// =============================================================================
// COLLABORATOR HANDLES
// =============================================================================

/// The geometry store as seen by a mode: shared with the host and other modes.
pub type SharedStore = Shared<dyn GeometryStore>;

/// A projector shared by every mode of a host.
pub type SharedProjector = Rc<dyn Projector>;

/// Host-side change listeners fanned out from each mode's notifications.
pub type ListenerList = SharedVec<Box<dyn ChangeListener>>;

// =============================================================================
// CONSTRUCTORS
// =============================================================================

/// Wraps a value in `Rc<RefCell<_>>`.
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// Creates an empty shared vector.
pub fn shared_vec<T>() -> SharedVec<T> {
    Rc::new(RefCell::new(Vec::new()))
}
