// crates/engine/src/scaffold.rs
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::options::Operation;
use crate::report::{PathAction, RunReport};

/// Create pass: ensure every template entry exists under the root.
///
/// Each entry is handled independently; a failed entry is recorded and the
/// pass moves on, unless `config.strict` is set.
pub(crate) fn create_layout(config: &Config) -> Result<RunReport> {
    let mut report = RunReport::new(Operation::Create);
    tracing::info!("Project structure creation started under {}", config.root.display());

    for rel in config.layout.entries() {
        if let Err(e) = ensure_entry(&config.root, &rel, &mut report) {
            tracing::error!("{e}");
            if config.strict {
                return Err(e);
            }
            report.record_failure(rel, &e);
        }
    }

    tracing::info!(
        "Project structure setup completed ({} created, {} failed)",
        report.count(PathAction::FileCreated),
        report.failures.len()
    );
    Ok(report)
}

fn ensure_entry(root: &Path, rel: &Path, report: &mut RunReport) -> Result<()> {
    let path = root.join(rel);

    let rel_dir = rel.parent().filter(|d| !d.as_os_str().is_empty());
    if let Some(dir) = path.parent()
        && !dir.exists()
    {
        fs::create_dir_all(dir).map_err(|source| EngineError::DirCreate {
            path: rel_dir.unwrap_or(rel).to_path_buf(),
            source,
        })?;
        if let Some(rel_dir) = rel_dir {
            tracing::info!("Directory created: {}", rel_dir.display());
            report.record(rel_dir.to_path_buf(), PathAction::DirCreated);
        }
    }

    let size = match path.metadata() {
        Ok(meta) => Some(meta.len()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(source) => {
            return Err(EngineError::Inspect {
                path: rel.to_path_buf(),
                source,
            });
        }
    };

    match size {
        None => {
            touch(&path, rel)?;
            tracing::info!("File created: {}", rel.display());
            report.record(rel.to_path_buf(), PathAction::FileCreated);
        }
        Some(0) => {
            touch(&path, rel)?;
            tracing::info!("File touched: {}", rel.display());
            report.record(rel.to_path_buf(), PathAction::FileTouched);
        }
        Some(_) => {
            tracing::info!("File already exists: {}", rel.display());
            report.record(rel.to_path_buf(), PathAction::FileKept);
        }
    }

    Ok(())
}

/// Create the file if absent; never truncate existing content.
fn touch(path: &Path, rel: &Path) -> Result<()> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(drop)
        .map_err(|source| EngineError::FileCreate {
            path: rel.to_path_buf(),
            source,
        })
}
