//! Bias Store — the shared document of reviewer prejudices injected into synthesis prompts.
//!
//! Read-modify-write on every append with no locking: concurrent appends from
//! different requests can race and the last writer wins.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use crate::errors::AppError;

pub mod handlers;

/// Section that user submissions are appended under.
pub const USER_BIAS_HEADER: &str = "## 用户偏见（用户可在此部分添加自己的偏见）";

/// Storage for the bias document. Swap implementations without touching callers.
#[async_trait]
pub trait BiasStore: Send + Sync {
    /// Returns the full document verbatim.
    async fn read(&self) -> Result<String, AppError>;

    /// Adds `bias` as a list entry under the user-bias section.
    async fn append_entry(&self, bias: &str) -> Result<(), AppError>;
}

/// Inserts `- <bias>` directly beneath the user-bias header, creating the section at the
/// end of the document if it does not exist yet. Everything else is left byte-identical.
pub fn insert_bias_entry(document: &str, bias: &str) -> String {
    let entry = format!("- {bias}");
    match document.find(USER_BIAS_HEADER) {
        Some(start) => {
            let header_end = start + USER_BIAS_HEADER.len();
            let mut updated = String::with_capacity(document.len() + entry.len() + 1);
            updated.push_str(&document[..header_end]);
            updated.push('\n');
            updated.push_str(&entry);
            updated.push_str(&document[header_end..]);
            updated
        }
        None => format!("{document}\n\n{USER_BIAS_HEADER}\n{entry}"),
    }
}

/// Bias document persisted as a single flat file, rewritten in full on every append.
#[derive(Debug, Clone)]
pub struct FileBiasStore {
    path: PathBuf,
}

impl FileBiasStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl BiasStore for FileBiasStore {
    async fn read(&self) -> Result<String, AppError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| AppError::Store(format!("{}: {e}", self.path.display())))
    }

    async fn append_entry(&self, bias: &str) -> Result<(), AppError> {
        let document = self.read().await?;
        let updated = insert_bias_entry(&document, bias);
        tokio::fs::write(&self.path, updated)
            .await
            .map_err(|e| AppError::Store(format!("{}: {e}", self.path.display())))?;
        info!("Bias entry appended to {}", self.path.display());
        Ok(())
    }
}

/// Process-local bias document, lost on restart. Selected when `BIAS_FILE` is empty.
#[derive(Debug, Default)]
pub struct InMemoryBiasStore {
    document: RwLock<String>,
}

impl InMemoryBiasStore {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: RwLock::new(document.into()),
        }
    }
}

#[async_trait]
impl BiasStore for InMemoryBiasStore {
    async fn read(&self) -> Result<String, AppError> {
        Ok(self.document.read().await.clone())
    }

    async fn append_entry(&self, bias: &str) -> Result<(), AppError> {
        let mut document = self.document.write().await;
        *document = insert_bias_entry(&document, bias);
        Ok(())
    }
}
