pub mod catalog;
pub mod color;
pub mod config;
pub mod group;
pub mod project;
pub mod task_type;

pub use catalog::*;
pub use color::*;
pub use config::*;
pub use group::*;
pub use project::*;
pub use task_type::*;
