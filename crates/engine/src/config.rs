use crate::layout::ProjectLayout;
use crate::options::Operation;
use derive_builder::Builder;
use std::path::PathBuf;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Directory the layout is materialized under.
    #[builder(default = "PathBuf::from(\".\")")]
    pub root: PathBuf,

    #[builder(default)]
    pub layout: ProjectLayout,

    pub operation: Operation,

    /// Fail at the first path error instead of recording it and continuing.
    #[builder(default)]
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            layout: ProjectLayout::default(),
            operation: Operation::Create,
            strict: false,
        }
    }
}
