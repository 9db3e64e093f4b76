use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::options::Operation;

/// What happened to a single path during a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PathAction {
    DirCreated,
    FileCreated,
    /// Existed but was empty; re-touched.
    FileTouched,
    /// Existed with content; left untouched.
    FileKept,
    FileRemoved,
    FileAbsent,
    DirRemoved,
    /// Still holds entries not owned by the template; left in place.
    DirKept,
}

impl fmt::Display for PathAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::DirCreated => "dir created",
            Self::FileCreated => "file created",
            Self::FileTouched => "file touched",
            Self::FileKept => "file kept",
            Self::FileRemoved => "file removed",
            Self::FileAbsent => "file absent",
            Self::DirRemoved => "dir removed",
            Self::DirKept => "dir kept",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathOutcome {
    pub path: PathBuf,
    pub action: PathAction,
}

/// A path whose handling failed; the pass recorded it and moved on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Aggregate result of one pass over the layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub operation: Operation,
    pub generated_at: DateTime<Local>,
    pub outcomes: Vec<PathOutcome>,
    pub failures: Vec<PathFailure>,
}

impl RunReport {
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            generated_at: Local::now(),
            outcomes: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn record(&mut self, path: PathBuf, action: PathAction) {
        self.outcomes.push(PathOutcome { path, action });
    }

    pub fn record_failure(&mut self, path: PathBuf, error: &EngineError) {
        self.failures.push(PathFailure {
            path,
            message: error.to_string(),
        });
    }

    pub fn count(&self, action: PathAction) -> usize {
        self.outcomes.iter().filter(|o| o.action == action).count()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
