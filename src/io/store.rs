use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::io::recovery::{self, RecoveryCategory, RecoveryEntry};
use crate::model::Task;

/// Task file used when no other path is given
pub const DEFAULT_PATH: &str = "todo.json";

/// Error type for task file operations.
///
/// Every variant is fatal to the session: the caller is expected to stop
/// and report it, not retry.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not encode task list: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("{path} is not a valid task file: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// How `save` replaces the file contents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SaveMode {
    /// Truncate and rewrite the file in place. A crash mid-write can leave a
    /// partial file behind.
    #[default]
    InPlace,
    /// Write a sibling temp file, then rename it over the task file
    Atomic,
}

/// What `load` does with a non-empty file that does not parse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Start with an empty list, keep the raw bytes in the recovery log and
    /// report a notice
    #[default]
    Lenient,
    /// Fail with [`StoreError::Malformed`]
    Strict,
}

/// On-disk document: `{"todos": [...]}`
#[derive(Serialize)]
struct DocumentRef<'a> {
    todos: &'a [Task],
}

#[derive(Deserialize)]
struct Document {
    // `null` and a missing field both mean "no tasks"
    #[serde(default)]
    todos: Option<Vec<Task>>,
}

/// Encode tasks in the task file format (compact JSON).
pub fn encode(tasks: &[Task]) -> Result<String, serde_json::Error> {
    serde_json::to_string(&DocumentRef { todos: tasks })
}

/// Decode a task file. Blank input is an empty list, not an error.
/// Bytes that are not UTF-8 are a decode error like any other bad JSON.
pub fn decode(bytes: &[u8]) -> Result<Vec<Task>, serde_json::Error> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    let doc: Document = serde_json::from_slice(bytes)?;
    Ok(doc.todos.unwrap_or_default())
}

/// Result of loading the task file
#[derive(Debug, Default)]
pub struct Loaded {
    pub tasks: Vec<Task>,
    /// Set when the file was unreadable and the list started empty
    pub notice: Option<String>,
}

/// The backing file for a task list.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
    save_mode: SaveMode,
    load_policy: LoadPolicy,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Store {
            path: path.into(),
            save_mode: SaveMode::default(),
            load_policy: LoadPolicy::default(),
        }
    }

    pub fn with_save_mode(mut self, save_mode: SaveMode) -> Self {
        self.save_mode = save_mode;
        self
    }

    pub fn with_load_policy(mut self, load_policy: LoadPolicy) -> Self {
        self.load_policy = load_policy;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save_mode(&self) -> SaveMode {
        self.save_mode
    }

    pub fn load_policy(&self) -> LoadPolicy {
        self.load_policy
    }

    /// Read the task file, creating it empty if it does not exist.
    pub fn load(&self) -> Result<Loaded, StoreError> {
        let mut file = self.open()?;
        let mut content = Vec::new();
        file.read_to_end(&mut content)
            .map_err(|e| StoreError::Read {
                path: self.path.clone(),
                source: e,
            })?;

        match decode(&content) {
            Ok(tasks) => Ok(Loaded {
                tasks,
                notice: None,
            }),
            Err(e) if self.load_policy == LoadPolicy::Strict => Err(StoreError::Malformed {
                path: self.path.clone(),
                source: e,
            }),
            Err(e) => {
                let logged = recovery::log_recovery(
                    &self.path,
                    RecoveryEntry::new(RecoveryCategory::Parser, "unreadable task file")
                        .field("Source", self.path.display().to_string())
                        .field("Error", e.to_string())
                        .body(String::from_utf8_lossy(&content)),
                );
                let mut notice = format!(
                    "{} could not be parsed ({}); starting with an empty list",
                    self.path.display(),
                    e
                );
                if let Some(log) = logged {
                    notice.push_str(&format!(", original kept in {}", log.display()));
                }
                eprintln!("warning: {}", notice);
                Ok(Loaded {
                    tasks: Vec::new(),
                    notice: Some(notice),
                })
            }
        }
    }

    /// Replace the task file contents with `tasks`.
    pub fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let payload = encode(tasks).map_err(StoreError::Encode)?;
        let result = match self.save_mode {
            SaveMode::InPlace => self.write_in_place(payload.as_bytes()),
            SaveMode::Atomic => atomic_write(&self.path, payload.as_bytes()).map_err(|e| {
                StoreError::Write {
                    path: self.path.clone(),
                    source: e,
                }
            }),
        };
        if result.is_err() {
            recovery::log_recovery(
                &self.path,
                RecoveryEntry::new(RecoveryCategory::Write, "failed save")
                    .field("Target", self.path.display().to_string())
                    .body(payload),
            );
        }
        result
    }

    fn open(&self) -> Result<File, StoreError> {
        OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)
            .map_err(|e| StoreError::Open {
                path: self.path.clone(),
                source: e,
            })
    }

    fn write_in_place(&self, content: &[u8]) -> Result<(), StoreError> {
        let mut file = self.open()?;
        let write_err = |e| StoreError::Write {
            path: self.path.clone(),
            source: e,
        };
        file.set_len(0).map_err(write_err)?;
        file.write_all(content).map_err(write_err)?;
        file.flush().map_err(write_err)?;
        Ok(())
    }
}

/// Write `content` to `path` atomically using a temp file + rename.
fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
