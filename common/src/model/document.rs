use serde::{Deserialize, Serialize};

/// Metadata recorded for one file picked on the upload page.
///
/// Only these properties are kept; the file contents are never read. The
/// JSON field names (`lastModified`, `uploadedAt`, `type`) are the layout of
/// the persisted blob, so renaming a field here breaks existing histories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    /// `<epoch ms>-<random suffix>`. Expected unique, never checked.
    pub id: String,
    /// Original file name as reported by the browser. Untrusted.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// MIME type, or [`crate::config::UNKNOWN_TYPE`].
    #[serde(rename = "type")]
    pub mime_type: String,
    /// Last modification time of the file, epoch milliseconds.
    pub last_modified: i64,
    /// RFC 3339 instant at which the record was created.
    pub uploaded_at: String,
}
