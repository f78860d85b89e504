use super::ModelArtifact;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Failure while answering a single query. The service stays up.
#[derive(Error, Debug)]
pub enum ResponderError {
    #[error("{0}")]
    Failed(String),
}

/// Turns a query into a response string.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn respond(&self, query: &str) -> Result<String, ResponderError>;
}

/// Responder backed by the loaded index.
///
/// Retrieval over the index is not wired in yet, so the answer is the query
/// embedded in a fixed template.
#[derive(Debug, Clone)]
pub struct IndexResponder {
    artifact: Arc<ModelArtifact>,
}

impl IndexResponder {
    pub fn new(artifact: Arc<ModelArtifact>) -> Self {
        Self { artifact }
    }
}

#[async_trait]
impl Responder for IndexResponder {
    async fn respond(&self, query: &str) -> Result<String, ResponderError> {
        tracing::debug!(
            query_len = query.len(),
            companion = %self.artifact.companion_path().display(),
            "Answering query"
        );

        Ok(format!("Response to medical query: {}", query))
    }
}
