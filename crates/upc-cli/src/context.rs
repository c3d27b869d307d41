use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;
use upc_config::UpcConfig;
use upc_index::{FsStore, NotebookCollection, NotebookIndex};

/// Where the loaded index came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IndexSource {
    Document(PathBuf),
    BuiltIn,
}

impl IndexSource {
    pub fn describe(&self) -> String {
        match self {
            Self::Document(path) => path.display().to_string(),
            Self::BuiltIn => "built-in".to_string(),
        }
    }
}

/// Everything a command needs: configuration, the index, and its notebook directory.
#[derive(Clone, Debug)]
pub struct AppContext {
    pub config: UpcConfig,
    pub root: PathBuf,
    pub index: NotebookIndex,
    pub heading: String,
    pub source: IndexSource,
}

impl AppContext {
    pub fn load(flags: &crate::cli::GlobalFlags) -> anyhow::Result<Self> {
        let config = UpcConfig::load_with_dotenv().context("failed to load configuration")?;
        Self::from_config(config, flags.root.as_deref(), flags.index.as_deref())
    }

    pub fn from_config(
        config: UpcConfig,
        root_override: Option<&str>,
        index_override: Option<&str>,
    ) -> anyhow::Result<Self> {
        let root = PathBuf::from(root_override.unwrap_or(&config.notebooks.root));
        let index_path = index_override.map_or_else(
            || root.join(&config.notebooks.index_file),
            PathBuf::from,
        );

        let (index, heading, source) = if index_path.is_file() {
            let (index, heading) = load_document(&index_path)?;
            let heading = heading.unwrap_or_else(|| config.notebooks.heading.clone());
            (index, heading, IndexSource::Document(index_path))
        } else if index_override.is_some() {
            anyhow::bail!("index document '{}' does not exist", index_path.display());
        } else {
            debug!(path = %index_path.display(), "no index document; using built-in index");
            (
                NotebookIndex::canonical(),
                config.notebooks.heading.clone(),
                IndexSource::BuiltIn,
            )
        };

        Ok(Self {
            config,
            root,
            index,
            heading,
            source,
        })
    }

    /// The index paired with the notebook directory.
    pub fn collection(&self) -> anyhow::Result<NotebookCollection<FsStore>> {
        let store = FsStore::with_pattern(&self.root, &self.config.notebooks.pattern)
            .context("invalid notebooks.pattern")?;
        Ok(NotebookCollection::new(self.index.clone(), store))
    }
}

fn load_document(path: &Path) -> anyhow::Result<(NotebookIndex, Option<String>)> {
    NotebookIndex::from_markdown_file(path)
        .with_context(|| format!("failed to read index document '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    fn config_for(root: &Path) -> UpcConfig {
        let mut config = UpcConfig::default();
        config.notebooks.root = root.display().to_string();
        config
    }

    #[test]
    fn missing_document_falls_back_to_built_in_index() {
        let tmp = tempfile::tempdir().unwrap();
        let ctx = AppContext::from_config(config_for(tmp.path()), None, None).unwrap();
        assert_eq!(ctx.source, IndexSource::BuiltIn);
        assert_eq!(ctx.index, NotebookIndex::canonical());
        assert_eq!(ctx.heading, "Notebooks");
    }

    #[test]
    fn document_in_root_is_loaded_with_its_heading() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            tmp.path().join("README.md"),
            "# Tutorials\n\n- [Only](only.ipynb): the one notebook.\n",
        )
        .unwrap();

        let ctx = AppContext::from_config(config_for(tmp.path()), None, None).unwrap();
        assert_eq!(ctx.heading, "Tutorials");
        assert_eq!(ctx.index.len(), 1);
        assert!(matches!(ctx.source, IndexSource::Document(_)));
    }

    #[test]
    fn explicit_missing_index_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("INDEX.md");
        let result = AppContext::from_config(
            config_for(tmp.path()),
            None,
            Some(missing.to_str().unwrap()),
        );
        assert!(result.is_err());
    }

    #[test]
    fn root_flag_overrides_config() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().display().to_string();
        let ctx = AppContext::from_config(UpcConfig::default(), Some(&root), None).unwrap();
        assert_eq!(ctx.root, tmp.path());
    }
}
