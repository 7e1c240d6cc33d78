use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::catalog::Catalog;
use crate::model::config::BoardConfig;
use crate::model::project::Project;

/// Name of the per-project directory
pub const BOARD_DIR: &str = ".typeboard";
pub const CATALOG_FILE: &str = "catalog.toml";
pub const CONFIG_FILE: &str = "board.toml";

/// Error type for project I/O operations
#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("not a typeboard project: no .typeboard/ directory found")]
    NotAProject,
    #[error("could not read {path}: {source}")]
    ReadError { path: PathBuf, source: io::Error },
    #[error("could not write {path}: {source}")]
    WriteError { path: PathBuf, source: io::Error },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("could not serialize catalog: {0}")]
    SerializeError(#[from] toml::ser::Error),
    #[error("io error: {0}")]
    IoError(#[from] io::Error),
}

/// Discover the project by walking up from the given directory, looking
/// for a `.typeboard/` subdirectory.
pub fn discover_project(start: &Path) -> Result<PathBuf, ProjectError> {
    let mut current = start.to_path_buf();
    loop {
        let board_dir = current.join(BOARD_DIR);
        if board_dir.is_dir() && board_dir.join(CATALOG_FILE).exists() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(ProjectError::NotAProject);
        }
    }
}

/// Load the catalog and configuration under `root`.
pub fn load_project(root: &Path) -> Result<Project, ProjectError> {
    let board_dir = root.join(BOARD_DIR);
    if !board_dir.is_dir() {
        return Err(ProjectError::NotAProject);
    }
    let catalog = read_catalog(&board_dir)?;
    let config = read_config(&board_dir)?;
    Ok(Project {
        root: root.to_path_buf(),
        board_dir,
        config,
        catalog,
    })
}

pub fn read_catalog(board_dir: &Path) -> Result<Catalog, ProjectError> {
    let path = board_dir.join(CATALOG_FILE);
    let text = fs::read_to_string(&path).map_err(|e| ProjectError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ProjectError::ParseError { path, source: e })
}

/// Write the catalog back to disk atomically.
pub fn save_catalog(board_dir: &Path, catalog: &Catalog) -> Result<(), ProjectError> {
    let path = board_dir.join(CATALOG_FILE);
    let text = toml::to_string(catalog)?;
    atomic_write(&path, text.as_bytes())
        .map_err(|e| ProjectError::WriteError { path, source: e })
}

/// Read board.toml. A missing file means all defaults.
pub fn read_config(board_dir: &Path) -> Result<BoardConfig, ProjectError> {
    let path = board_dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(BoardConfig::default());
    }
    let text = fs::read_to_string(&path).map_err(|e| ProjectError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ProjectError::ParseError { path, source: e })
}

/// Write `content` to `path` atomically using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
