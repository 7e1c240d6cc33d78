use std::path::PathBuf;

use super::catalog::Catalog;
use super::config::BoardConfig;

/// A fully loaded board project
#[derive(Debug)]
pub struct Project {
    /// Root directory of the project (parent of `.typeboard/`)
    pub root: PathBuf,
    /// Path to the `.typeboard/` directory
    pub board_dir: PathBuf,
    /// Parsed board.toml (defaults when absent)
    pub config: BoardConfig,
    /// Parsed catalog.toml
    pub catalog: Catalog,
}
