use std::path::{Path, PathBuf};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use crate::errors::ChatbenchError;
use crate::faq::FaqData;
use super::builder::PromptTemplate;
use tracing::{debug, info};

#[derive(Debug, Clone, Serialize)]
pub struct PromptSnapshot {
    pub template: String,
    pub version: u64,
    pub last_modified: DateTime<Utc>,
}

struct Versioned {
    template: PromptTemplate,
    version: u64,
    last_modified: DateTime<Utc>,
}

/// The active instruction template, editable at runtime. Written back to
/// the template file when one is configured.
pub struct PromptStore {
    path: Option<PathBuf>,
    current: RwLock<Versioned>,
}

impl PromptStore {
    /// A store that keeps edits in memory only.
    pub fn in_memory(template: PromptTemplate) -> Self {
        Self::with_path(None, template)
    }

    fn with_path(path: Option<PathBuf>, template: PromptTemplate) -> Self {
        Self {
            path,
            current: RwLock::new(Versioned {
                template,
                version: 1,
                last_modified: Utc::now(),
            }),
        }
    }

    /// Load the template at `path`. A missing file starts from the built-in
    /// template; edits are still written to `path`.
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, ChatbenchError> {
        let path = path.into();
        if !path.exists() {
            info!(path = %path.display(), "No prompt template file found, using built-in template");
            return Ok(Self::with_path(Some(path), PromptTemplate::default()));
        }

        let template = PromptTemplate::from_file(&path).await?;
        Ok(Self::with_path(Some(path), template))
    }

    pub async fn render(&self, faq: &FaqData) -> String {
        self.current.read().await.template.render(faq)
    }

    pub async fn snapshot(&self) -> PromptSnapshot {
        let current = self.current.read().await;
        PromptSnapshot {
            template: current.template.text().to_string(),
            version: current.version,
            last_modified: current.last_modified,
        }
    }

    /// Swap in a new template. With a configured path it is persisted first;
    /// a failed write leaves the active template untouched.
    pub async fn replace(&self, text: &str) -> Result<PromptSnapshot, ChatbenchError> {
        if text.trim().is_empty() {
            return Err(ChatbenchError::BadRequest("Prompt template must not be empty".into()));
        }
        let template = PromptTemplate::new(text);

        let mut current = self.current.write().await;
        if let Some(path) = &self.path {
            persist(path, template.text()).await?;
        }
        current.template = template;
        current.version += 1;
        current.last_modified = Utc::now();
        info!(version = current.version, chars = current.template.text().chars().count(), "Prompt template replaced");

        Ok(PromptSnapshot {
            template: current.template.text().to_string(),
            version: current.version,
            last_modified: current.last_modified,
        })
    }
}

async fn persist(path: &Path, text: &str) -> Result<(), ChatbenchError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    let tmp = path.with_extension("tmp");
    tokio::fs::write(&tmp, text).await?;
    tokio::fs::rename(&tmp, path).await?;
    debug!(path = %path.display(), bytes = text.len(), "Prompt template persisted");
    Ok(())
}
