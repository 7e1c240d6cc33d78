//! The presentation shell: what the drag-and-drop UI does around the
//! ordering core. Holds the displayed lists, routes gestures and dialog
//! saves to host persistence.

pub mod dialog;
pub mod manager;
pub mod persistence;

pub use dialog::{GroupDialog, TypeDialog};
pub use manager::{DeleteOutcome, DragOutcome, Manager, Section, ShellError};
pub use persistence::{MemoryStore, PersistError, Persistence};
