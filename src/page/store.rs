// src/page/store.rs
// =============================================================================
// Writes downloaded pages to disk.
//
// Layout: <root>/<depth>/<sanitized-url>.html
//
// The directory is created on demand and existing files are overwritten, so
// two URLs with the same sanitized name at the same depth end up as one
// file holding whichever was written last.
// =============================================================================

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("could not create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The output tree of one crawl.
#[derive(Debug, Clone)]
pub struct PageStore {
    root: PathBuf,
}

impl PageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The name printed in progress messages, relative to the root.
    pub fn file_name(depth: usize, key: &str) -> String {
        format!("{depth}/{key}.html")
    }

    /// Saves `content` as `<depth>/<key>.html` and returns the full path.
    pub async fn persist(
        &self,
        content: &str,
        depth: usize,
        key: &str,
    ) -> Result<PathBuf, PersistError> {
        let directory = self.root.join(depth.to_string());
        fs::create_dir_all(&directory)
            .await
            .map_err(|source| PersistError::CreateDir {
                path: directory.clone(),
                source,
            })?;

        let path = directory.join(format!("{key}.html"));
        fs::write(&path, content)
            .await
            .map_err(|source| PersistError::Write {
                path: path.clone(),
                source,
            })?;

        Ok(path)
    }
}
