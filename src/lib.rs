//! Task types and task groups with drag-and-drop ordering.
//!
//! [`ops::reorder`] is the ordering core; [`shell`] wraps it with the state
//! and persistence hooks of a manager UI; [`io`] stores a board on disk.

pub mod cli;
pub mod io;
pub mod model;
pub mod ops;
pub mod shell;
