use std::path::{Path, PathBuf};
use thiserror::Error;

/// Serialized index object.
pub const INDEX_FILE: &str = "index.json";

/// Binary companion of the index. Only its path is kept.
pub const COMPANION_FILE: &str = "index.faiss";

/// Startup failures. None of these are recoverable.
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("failed to read index {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed index {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("companion file {0} is missing or not a regular file")]
    MissingCompanion(PathBuf),
}

/// The loaded index and the location of its companion file.
#[derive(Debug)]
pub struct ModelArtifact {
    index: serde_json::Value,
    companion_path: PathBuf,
}

impl ModelArtifact {
    /// Load both artifact files from `dir`.
    pub async fn load(dir: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let dir = dir.as_ref();

        let result = Self::read(dir).await;
        match &result {
            Ok(_) => tracing::info!("Model loaded successfully from {}", dir.display()),
            Err(e) => tracing::error!("Error loading model from {}: {}", dir.display(), e),
        }
        result
    }

    async fn read(dir: &Path) -> Result<Self, ArtifactError> {
        let index_path = dir.join(INDEX_FILE);
        let bytes = tokio::fs::read(&index_path)
            .await
            .map_err(|source| ArtifactError::Read {
                path: index_path.clone(),
                source,
            })?;

        let index = serde_json::from_slice(&bytes).map_err(|source| ArtifactError::Malformed {
            path: index_path,
            source,
        })?;

        let companion_path = dir.join(COMPANION_FILE);
        match tokio::fs::metadata(&companion_path).await {
            Ok(meta) if meta.is_file() => {}
            _ => return Err(ArtifactError::MissingCompanion(companion_path)),
        }

        Ok(Self {
            index,
            companion_path,
        })
    }

    pub fn index(&self) -> &serde_json::Value {
        &self.index
    }

    pub fn companion_path(&self) -> &Path {
        &self.companion_path
    }
}
