// crates/engine/src/cleanup.rs
use std::fs;
use std::io;
use std::path::Path;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::options::Operation;
use crate::report::{PathAction, RunReport};

/// Clean pass: delete the template's files, then unwind the directories
/// they emptied, deepest first.
///
/// Directories are removed with non-recursive `remove_dir` and only when
/// empty, so anything the user placed under a template directory survives
/// along with its ancestor path.
pub(crate) fn remove_layout(config: &Config) -> Result<RunReport> {
    let mut report = RunReport::new(Operation::Clean);
    tracing::info!("Starting cleanup under {}", config.root.display());

    for rel in config.layout.entries() {
        match remove_file_entry(&config.root, &rel) {
            Ok(action) => {
                if action == PathAction::FileRemoved {
                    tracing::info!("Deleted file: {}", rel.display());
                }
                report.record(rel, action);
            }
            Err(e) => {
                tracing::error!("{e}");
                if config.strict {
                    return Err(e);
                }
                report.record_failure(rel, &e);
            }
        }
    }

    for rel in config.layout.ancestor_dirs() {
        match remove_dir_entry(&config.root, &rel) {
            Ok(Some(action)) => {
                match action {
                    PathAction::DirRemoved => tracing::info!("Deleted directory: {}", rel.display()),
                    _ => tracing::info!("Directory kept (not empty): {}", rel.display()),
                }
                report.record(rel, action);
            }
            Ok(None) => {}
            Err(e) => {
                tracing::error!("{e}");
                if config.strict {
                    return Err(e);
                }
                report.record_failure(rel, &e);
            }
        }
    }

    tracing::info!(
        "Cleanup completed ({} files removed, {} directories removed, {} failed)",
        report.count(PathAction::FileRemoved),
        report.count(PathAction::DirRemoved),
        report.failures.len()
    );
    Ok(report)
}

fn remove_file_entry(root: &Path, rel: &Path) -> Result<PathAction> {
    let path = root.join(rel);
    match path.symlink_metadata() {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(PathAction::FileAbsent),
        Err(source) => Err(EngineError::Inspect {
            path: rel.to_path_buf(),
            source,
        }),
        Ok(meta) if meta.is_file() => {
            fs::remove_file(&path).map_err(|source| EngineError::FileRemove {
                path: rel.to_path_buf(),
                source,
            })?;
            Ok(PathAction::FileRemoved)
        }
        // Something else occupies the entry's name; not ours to delete.
        Ok(_) => Ok(PathAction::FileAbsent),
    }
}

/// `None` when the directory does not exist (nothing to report).
fn remove_dir_entry(root: &Path, rel: &Path) -> Result<Option<PathAction>> {
    let dir = root.join(rel);
    if !dir.is_dir() {
        return Ok(None);
    }

    let mut entries = fs::read_dir(&dir).map_err(|source| EngineError::Inspect {
        path: rel.to_path_buf(),
        source,
    })?;
    if entries.next().is_some() {
        return Ok(Some(PathAction::DirKept));
    }

    fs::remove_dir(&dir).map_err(|source| EngineError::DirRemove {
        path: rel.to_path_buf(),
        source,
    })?;
    Ok(Some(PathAction::DirRemoved))
}
