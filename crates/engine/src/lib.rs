// crates/engine/src/lib.rs
pub mod config;
pub mod error;
pub mod layout;
pub mod options;
pub mod report;

mod cleanup;
mod scaffold;

use crate::config::Config;
use crate::error::Result;
use crate::options::Operation;
use crate::report::RunReport;

/// Run one pass over the template layout.
///
/// Returns a `RunReport` with the per-path outcomes and any failures
/// encountered along the way.
///
/// # Errors
///
/// In the default (non-strict) mode, per-path errors are recorded in
/// `RunReport::failures` and the pass always completes. With
/// `config.strict` set, the first path error aborts the pass and is
/// returned instead.
pub fn run(config: &Config) -> Result<RunReport> {
    if config.root.exists() && !config.root.is_dir() {
        return Err(error::EngineError::Config(format!(
            "Root '{}' is not a directory",
            config.root.display()
        )));
    }

    match config.operation {
        Operation::Create => scaffold::create_layout(config),
        Operation::Clean => cleanup::remove_layout(config),
    }
}
