use std::path::{Path, PathBuf};
use serde::Serialize;
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use crate::errors::ChatbenchError;
use tracing::{debug, info};

/// Category name -> entries. Entries are whatever the operator uploaded.
pub type FaqData = Map<String, Value>;

#[derive(Debug, Clone, Serialize)]
pub struct FaqSnapshot {
    pub data: FaqData,
    pub count: usize,
}

/// FAQ knowledge base backed by a single JSON file.
pub struct FaqStore {
    path: PathBuf,
    data: RwLock<FaqData>,
}

impl FaqStore {
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            data: RwLock::new(FaqData::new()),
        }
    }

    /// Load the store from `path`. A missing file yields an empty store.
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, ChatbenchError> {
        let path = path.into();
        if !path.exists() {
            info!(path = %path.display(), "No FAQ file found, starting empty");
            return Ok(Self::empty(path));
        }

        let content = tokio::fs::read(&path).await?;
        let data = decode_faq(&content)?;
        info!(path = %path.display(), count = count_entries(&data), "Loaded FAQ data");

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub async fn get(&self) -> FaqSnapshot {
        let data = self.data.read().await.clone();
        let count = count_entries(&data);
        FaqSnapshot { data, count }
    }

    /// Persist `new_data` and then swap it in. A failed write leaves the
    /// in-memory store untouched.
    pub async fn replace(&self, new_data: FaqData) -> Result<usize, ChatbenchError> {
        let mut guard = self.data.write().await;
        persist(&self.path, &new_data).await?;
        let count = count_entries(&new_data);
        *guard = new_data;
        info!(path = %self.path.display(), count, "FAQ data replaced");
        Ok(count)
    }
}

/// Sum of entry-list lengths across categories.
pub fn count_entries(data: &FaqData) -> usize {
    data.values()
        .map(|v| v.as_array().map_or(0, |entries| entries.len()))
        .sum()
}

/// Validate an uploaded file before it is allowed near the store.
pub fn parse_upload(filename: &str, bytes: &[u8]) -> Result<FaqData, ChatbenchError> {
    if !filename.ends_with(".json") {
        return Err(ChatbenchError::InvalidFileType(filename.to_string()));
    }
    decode_faq(bytes)
}

fn decode_faq(bytes: &[u8]) -> Result<FaqData, ChatbenchError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| ChatbenchError::MalformedJson(format!("invalid UTF-8: {}", e)))?;
    let value: Value = serde_json::from_str(text)
        .map_err(|e| ChatbenchError::MalformedJson(e.to_string()))?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(ChatbenchError::MalformedJson(format!(
            "expected a JSON object of categories, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

async fn persist(path: &Path, data: &FaqData) -> Result<(), ChatbenchError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    let tmp = path.with_extension("json.tmp");
    let json = serde_json::to_string_pretty(data)?;
    tokio::fs::write(&tmp, &json).await?;
    tokio::fs::rename(&tmp, path).await?;
    debug!(path = %path.display(), bytes = json.len(), "FAQ data persisted");
    Ok(())
}
