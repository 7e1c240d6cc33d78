pub mod config_io;
pub mod failure_log;
pub mod project_io;
pub mod store;
