//! The reorganizer: one linear pass over the base directory.
//!
//! ```text
//! content/blog/                      content/blog/
//! ├── _index.md                      ├── _index.md               (untouched)
//! ├── 2023-05-01-hello.md     →      └── 2023/
//! └── 2023-05-09-again.md                ├── _index.md           (placeholder)
//!                                        └── 05/
//!                                            ├── _index.md       (placeholder)
//!                                            ├── 01/
//!                                            │   ├── _index.md
//!                                            │   └── 2023-05-01-hello.md
//!                                            └── 09/
//!                                                ├── _index.md
//!                                                └── 2023-05-09-again.md
//! ```
//!
//! Each entry is processed to completion (directories, index files, move)
//! before the next one. The first error aborts the pass; whatever was already
//! moved stays moved.

use crate::config::NestConfig;
use crate::front_matter;
use crate::naming::{DatePrefix, NamingError};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NestError {
    #[error("Cannot read base directory {path}: {source}")]
    ReadBase {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot write index file {path}: {source}")]
    WriteIndex {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot move {from} to {to}: {source}")]
    Move {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
    #[error("Move target already exists: {0}")]
    TargetExists(PathBuf),
    #[error("Filename is not valid UTF-8: {0:?}")]
    NonUtf8(OsString),
    #[error(transparent)]
    Naming(#[from] NamingError),
}

/// Progress events, sent as they happen.
#[derive(Debug, Clone, PartialEq)]
pub enum NestEvent {
    /// Entry left in place (the reserved index, or not a regular file).
    Skipped { name: String, reason: SkipReason },
    /// Placeholder written; path is relative to the base directory.
    IndexWritten { path: PathBuf },
    /// Entry relocated; `to` is relative to the base directory.
    Moved { name: String, to: PathBuf },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Reserved,
    NotAFile,
}

/// A relocated entry.
#[derive(Debug, Clone, PartialEq)]
pub struct MovedEntry {
    pub name: String,
    /// Destination relative to the base directory.
    pub to: PathBuf,
}

/// Summary of a completed pass.
#[derive(Debug, Default, PartialEq)]
pub struct NestReport {
    pub moved: Vec<MovedEntry>,
    pub skipped: usize,
    pub index_writes: usize,
}

/// Nest every flat entry of `base` under its date prefix.
///
/// `events`, when given, receives a [`NestEvent`] for each step. A closed
/// receiver is ignored.
pub fn run(
    base: &Path,
    config: &NestConfig,
    events: Option<Sender<NestEvent>>,
) -> Result<NestReport, NestError> {
    let emit = |event: NestEvent| {
        if let Some(tx) = &events {
            tx.send(event).ok();
        }
    };

    let placeholder = front_matter::placeholder(&config.redirect_to);
    let mut report = NestReport::default();

    for (name, path) in list_entries(base)? {
        if name == config.reserved.as_str() {
            report.skipped += 1;
            emit(NestEvent::Skipped {
                name: name.to_string_lossy().into_owned(),
                reason: SkipReason::Reserved,
            });
            continue;
        }
        // Directories from a previous pass (2023/) are not entries.
        if !path.is_file() {
            report.skipped += 1;
            emit(NestEvent::Skipped {
                name: name.to_string_lossy().into_owned(),
                reason: SkipReason::NotAFile,
            });
            continue;
        }

        let name = name.into_string().map_err(NestError::NonUtf8)?;
        let prefix = DatePrefix::parse(&name, config.max_depth)?;

        let mut source = path;
        if prefix.relative_dir() == Path::new(&name) {
            // `2023` has to become the directory `2023/`; park the file first.
            let parked = base.join(format!(".{name}.nesting"));
            move_entry(&source, &parked)?;
            source = parked;
        }

        let target_dir = base.join(prefix.relative_dir());
        fs::create_dir_all(&target_dir).map_err(|source| NestError::CreateDir {
            path: target_dir.clone(),
            source,
        })?;

        for level in prefix.levels() {
            let rel = level.join(&config.index_file);
            let index_path = base.join(&rel);
            fs::write(&index_path, &placeholder).map_err(|source| NestError::WriteIndex {
                path: index_path.clone(),
                source,
            })?;
            report.index_writes += 1;
            emit(NestEvent::IndexWritten { path: rel });
        }

        let rel_target = prefix.relative_dir().join(&name);
        move_entry(&source, &base.join(&rel_target))?;
        emit(NestEvent::Moved {
            name: name.clone(),
            to: rel_target.clone(),
        });
        report.moved.push(MovedEntry {
            name,
            to: rel_target,
        });
    }

    Ok(report)
}

/// Immediate entries of `base`, sorted by name.
fn list_entries(base: &Path) -> Result<Vec<(OsString, PathBuf)>, NestError> {
    let read_err = |source: std::io::Error| NestError::ReadBase {
        path: base.to_path_buf(),
        source,
    };
    let mut entries = Vec::new();
    for entry in fs::read_dir(base).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        entries.push((entry.file_name(), entry.path()));
    }
    entries.sort();
    Ok(entries)
}

/// Move a file, refusing to replace anything already at `to`.
fn move_entry(from: &Path, to: &Path) -> Result<(), NestError> {
    if to.symlink_metadata().is_ok() {
        return Err(NestError::TargetExists(to.to_path_buf()));
    }
    fs::rename(from, to).map_err(|source| NestError::Move {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}
