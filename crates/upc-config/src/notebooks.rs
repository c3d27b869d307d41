//! Notebook collection configuration.

use serde::{Deserialize, Serialize};

fn default_root() -> String {
    "notebooks".to_string()
}

fn default_index_file() -> String {
    "README.md".to_string()
}

fn default_pattern() -> String {
    "*.ipynb".to_string()
}

fn default_heading() -> String {
    "Notebooks".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotebooksConfig {
    /// Directory holding the notebooks, relative to the working directory.
    #[serde(default = "default_root")]
    pub root: String,

    /// Index document inside `root`.
    #[serde(default = "default_index_file")]
    pub index_file: String,

    /// Glob selecting notebook files when looking for orphans.
    #[serde(default = "default_pattern")]
    pub pattern: String,

    /// Heading used when rendering the index.
    #[serde(default = "default_heading")]
    pub heading: String,
}

impl Default for NotebooksConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            index_file: default_index_file(),
            pattern: default_pattern(),
            heading: default_heading(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = NotebooksConfig::default();
        assert_eq!(config.root, "notebooks");
        assert_eq!(config.index_file, "README.md");
        assert_eq!(config.pattern, "*.ipynb");
        assert_eq!(config.heading, "Notebooks");
    }
}
