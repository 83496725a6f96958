//! Type aliases for commonly used shared-state types.
//!
//! The engine is single-threaded: everything that is shared between the
//! controller and its collaborators (listeners, renderers, the replay tool)
//! lives on the thread that delivers pointer events, so `Rc<RefCell<T>>` is
//! all that is needed.
//!
//! ## Usage
//!
//! ```rust
//! use stickerkit_core::types::{shared, Shared};
//!
//! let log: Shared<Vec<String>> = shared(Vec::new());
//! log.borrow_mut().push("added".to_string());
//! assert_eq!(log.borrow().len(), 1);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
pub type Shared<T> = Rc<RefCell<T>>;

/// A shared vector for single-threaded collection management.
pub type SharedVec<T> = Rc<RefCell<Vec<T>>>;

/// Create a new `Shared<T>` from a value.
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}
