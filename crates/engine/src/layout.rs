// crates/engine/src/layout.rs
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Validated project package name, used for the `src/<name>/...` entries.
///
/// Accepts alphanumerics, `-` and `_`; must not be empty or start/end
/// with `-`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ProjectName {
    fn default() -> Self {
        Self("cnn_classifier".to_string())
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProjectName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let valid = !s.is_empty()
            && s.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_')
            && !s.starts_with('-')
            && !s.ends_with('-');
        if valid {
            Ok(Self(s.to_string()))
        } else {
            Err(format!(
                "Invalid project name '{s}': use alphanumerics, '-' or '_', not starting or ending with '-'"
            ))
        }
    }
}

/// The fixed template layout: an ordered list of relative paths,
/// parameterized by the project package name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    name: ProjectName,
}

impl ProjectLayout {
    pub fn new(name: ProjectName) -> Self {
        Self { name }
    }

    pub fn name(&self) -> &ProjectName {
        &self.name
    }

    /// Relative file paths of the template, in creation order.
    pub fn entries(&self) -> Vec<PathBuf> {
        let name = self.name.as_str();
        [
            ".github/workflows/.gitkeep".to_string(),
            format!("src/{name}/__init__.py"),
            format!("src/{name}/components/__init__.py"),
            format!("src/{name}/utils/__init__.py"),
            format!("src/{name}/config/__init__.py"),
            format!("src/{name}/config/configuration.py"),
            format!("src/{name}/pipeline/__init__.py"),
            format!("src/{name}/entity/__init__.py"),
            format!("src/{name}/constants/__init__.py"),
            "config/config.yaml".to_string(),
            "dvc.yaml".to_string(),
            "params.yaml".to_string(),
            "requirements.txt".to_string(),
            "setup.py".to_string(),
            "research/trials.ipynb".to_string(),
            "templates/index.html".to_string(),
            "test.py".to_string(),
        ]
        .into_iter()
        .map(PathBuf::from)
        .collect()
    }

    /// Distinct ancestor directories of every entry, deepest first.
    ///
    /// Ordering guarantees a directory is visited before any of its
    /// ancestors, so the cleanup pass can unwind the tree bottom-up.
    pub fn ancestor_dirs(&self) -> Vec<PathBuf> {
        let mut dirs: Vec<PathBuf> = Vec::new();
        for entry in self.entries() {
            let mut parent = entry.parent();
            while let Some(dir) = parent {
                if dir != Path::new("") && !dirs.contains(&dir.to_path_buf()) {
                    dirs.push(dir.to_path_buf());
                }
                parent = dir.parent();
            }
        }
        dirs.sort_by(|a, b| {
            let depth = |p: &PathBuf| p.components().count();
            depth(b).cmp(&depth(a)).then_with(|| a.cmp(b))
        });
        dirs
    }
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self::new(ProjectName::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_names() {
        assert!("cnn_classifier".parse::<ProjectName>().is_ok());
        assert!("model-v2".parse::<ProjectName>().is_ok());
        assert!("x".parse::<ProjectName>().is_ok());
    }

    #[test]
    fn rejects_invalid_names() {
        assert!("".parse::<ProjectName>().is_err());
        assert!("-leading".parse::<ProjectName>().is_err());
        assert!("trailing-".parse::<ProjectName>().is_err());
        assert!("has space".parse::<ProjectName>().is_err());
        assert!("a/b".parse::<ProjectName>().is_err());
    }

    #[test]
    fn entries_follow_project_name() {
        let layout = ProjectLayout::new("demo".parse().unwrap());
        let entries = layout.entries();
        assert_eq!(entries.len(), 17);
        assert!(entries.contains(&PathBuf::from("src/demo/__init__.py")));
        assert!(entries.contains(&PathBuf::from("src/demo/pipeline/__init__.py")));
        assert!(entries.contains(&PathBuf::from("test.py")));
    }

    #[test]
    fn ancestors_are_deepest_first_and_distinct() {
        let layout = ProjectLayout::new("demo".parse().unwrap());
        let dirs = layout.ancestor_dirs();

        // No duplicates.
        let mut sorted = dirs.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), dirs.len());

        // Every directory precedes its own ancestors.
        for (i, dir) in dirs.iter().enumerate() {
            for ancestor in dir.ancestors().skip(1) {
                if ancestor == Path::new("") {
                    continue;
                }
                let pos = dirs.iter().position(|d| d == ancestor).unwrap();
                assert!(pos > i, "{} listed before its child {}", ancestor.display(), dir.display());
            }
        }

        // The src root is present and comes after src/demo.
        let src = dirs.iter().position(|d| d == Path::new("src")).unwrap();
        let pkg = dirs.iter().position(|d| d == Path::new("src/demo")).unwrap();
        assert!(pkg < src);
    }
}
