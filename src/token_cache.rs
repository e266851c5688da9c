use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Token as persisted in the cache file. Field names match the provider's
/// conventional token JSON so a file written by other tooling still parses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredToken {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<DateTime<Utc>>,
}

/// Outcome of a cache lookup. Missing and unreadable files both fall through
/// to the interactive consent path, but callers can tell them apart.
#[derive(Debug)]
pub enum CacheLookup {
    Found(StoredToken),
    Missing,
    Unreadable(String),
}

/// File-backed token cache: fully read or written within a single call, no
/// partial state. A cached token is returned as-is; expiry is not checked
/// before use.
pub struct TokenCache {
    path: PathBuf,
}

impl TokenCache {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> CacheLookup {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return CacheLookup::Missing,
            Err(e) => return CacheLookup::Unreadable(e.to_string()),
        };
        match serde_json::from_str(&contents) {
            Ok(token) => CacheLookup::Found(token),
            Err(e) => CacheLookup::Unreadable(e.to_string()),
        }
    }

    /// Overwrite the cache file with the serialized token.
    pub fn store(&self, token: &StoredToken) -> Result<(), Box<dyn std::error::Error>> {
        let contents = serde_json::to_string(token)?;
        std::fs::write(&self.path, contents)
            .map_err(|e| format!("Unable to cache oauth token to {}: {}", self.path.display(), e))?;
        Ok(())
    }
}
