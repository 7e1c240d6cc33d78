use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

/// Self-documenting header written at the top of a new failure log.
const FILE_HEADER: &str = "\
<!-- typeboard failure log: append-only record of changes that could not be saved
     View with: tb failures
     Safe to delete. -->

---
";

/// What the user was doing when persistence failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCategory {
    Reorder,
    Save,
    Delete,
    Config,
}

impl fmt::Display for FailureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureCategory::Reorder => write!(f, "reorder"),
            FailureCategory::Save => write!(f, "save"),
            FailureCategory::Delete => write!(f, "delete"),
            FailureCategory::Config => write!(f, "config"),
        }
    }
}

/// A single entry in the failure log.
#[derive(Debug, Clone)]
pub struct FailureEntry {
    pub timestamp: DateTime<Utc>,
    pub category: FailureCategory,
    pub description: String,
    pub fields: Vec<(String, String)>,
    pub body: String,
}

impl FailureEntry {
    pub fn new(category: FailureCategory, description: impl Into<String>) -> Self {
        FailureEntry {
            timestamp: Utc::now(),
            category,
            description: description.into(),
            fields: Vec::new(),
            body: String::new(),
        }
    }

    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields.push((key.to_string(), value.into()));
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Format this entry as a markdown block for the log.
    fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "## {} {}: {}\n",
            self.timestamp
                .to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            self.category,
            self.description,
        ));
        out.push('\n');

        for (key, value) in &self.fields {
            out.push_str(&format!("{}: {}\n", key, value));
        }

        if !self.body.is_empty() {
            out.push('\n');
            out.push_str("```text\n");
            out.push_str(&self.body);
            if !self.body.ends_with('\n') {
                out.push('\n');
            }
            out.push_str("```\n");
        }

        out.push('\n');
        out.push_str("---\n");
        out
    }
}

/// Return the path to the failure log file.
pub fn failure_log_path(board_dir: &Path) -> PathBuf {
    board_dir.join("failures.log")
}

/// Append an entry to the log. Errors are swallowed and printed to stderr.
pub fn log_failure(board_dir: &Path, entry: FailureEntry) {
    if let Err(e) = log_failure_inner(board_dir, &entry) {
        eprintln!("warning: could not write to failure log: {}", e);
    }
}

fn log_failure_inner(board_dir: &Path, entry: &FailureEntry) -> io::Result<()> {
    let path = failure_log_path(board_dir);
    let needs_header = fs::metadata(&path).map_or(true, |m| m.len() == 0);

    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
    if needs_header {
        file.write_all(FILE_HEADER.as_bytes())?;
    }
    file.write_all(entry.to_markdown().as_bytes())?;
    Ok(())
}

/// Read the whole log, or `None` if nothing has been logged yet.
pub fn read_log(board_dir: &Path) -> io::Result<Option<String>> {
    let path = failure_log_path(board_dir);
    match fs::read_to_string(&path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Number of entries in a log's text.
pub fn count_entries(log: &str) -> usize {
    log.lines().filter(|l| l.starts_with("## ")).count()
}
