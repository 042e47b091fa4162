//! Strongly-typed identifiers for document entities
//!
//! Document keys are strings issued by the back end (or the staging
//! store); attachments carry generated UUIDs. Newtype wrappers prevent
//! accidental mixing of the two.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Prefix carried by keys of documents still in the staging store.
pub const STAGING_PREFIX: &str = "stg-";

/// Key correlating a document with its cache entry and API resources.
///
/// Staged (not yet transferred) documents carry the `stg-` prefix;
/// transferred documents use the plain key issued by the back end.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentKey(String);

impl DocumentKey {
    /// Creates a key from its raw string form
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Builds a staging key from a raw identifier
    pub fn staged(raw: impl fmt::Display) -> Self {
        Self(format!("{}{}", STAGING_PREFIX, raw))
    }

    /// Returns true when this key refers to a staged document
    pub fn is_staged(&self) -> bool {
        self.0.starts_with(STAGING_PREFIX)
    }

    /// Returns the raw key string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for DocumentKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<&str> for DocumentKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

/// Identifier for an uploaded document attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttachmentId(Uuid);

impl AttachmentId {
    /// Creates a new time-ordered identifier (v7)
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AttachmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AttachmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ATT-{}", self.0)
    }
}

impl FromStr for AttachmentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Strip prefix if present
        let uuid_str = s.strip_prefix("ATT-").unwrap_or(s);
        Ok(Self(Uuid::parse_str(uuid_str)?))
    }
}

impl From<Uuid> for AttachmentId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<AttachmentId> for Uuid {
    fn from(id: AttachmentId) -> Uuid {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staged_key_detection() {
        let staged = DocumentKey::staged(42);
        assert_eq!(staged.as_str(), "stg-42");
        assert!(staged.is_staged());

        let transferred = DocumentKey::new("1088");
        assert!(!transferred.is_staged());
    }

    #[test]
    fn test_document_key_serde_is_transparent() {
        let key = DocumentKey::new("stg-7");
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"stg-7\"");
    }

    #[test]
    fn test_attachment_id_display() {
        let id = AttachmentId::new();
        assert!(id.to_string().starts_with("ATT-"));
    }

    #[test]
    fn test_attachment_id_parsing() {
        let original = AttachmentId::new();
        let parsed: AttachmentId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }
}
