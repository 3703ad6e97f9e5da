//! Wire models exchanged with the file backend.

use serde::{Deserialize, Serialize};

/// Category label used for files the backend did not tag.
pub const UNKNOWN_CATEGORY: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    pub filename: String,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

impl FileRecord {
    pub fn new(filename: impl Into<String>, tag: Option<&str>) -> Self {
        Self { filename: filename.into(), tag: tag.map(|t| t.to_string()), summary: None }
    }

    /// Tag of the file, or [`UNKNOWN_CATEGORY`] when missing or blank.
    pub fn category(&self) -> &str {
        match self.tag.as_deref() {
            Some(tag) if !tag.is_empty() => tag,
            _ => UNKNOWN_CATEGORY,
        }
    }

    /// Summary the backend stored with the record, if any.
    pub fn stored_summary(&self) -> Option<&str> {
        self.summary.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// A file picked in the browser, ready to be sent as multipart form data.
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpload {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadReceipt {
    pub filename: String,
    #[serde(default)]
    pub tag: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileSummary {
    #[serde(default)]
    pub filename: Option<String>,
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_falls_back_to_unknown() {
        assert_eq!(FileRecord::new("a.pdf", Some("pdf")).category(), "pdf");
        assert_eq!(FileRecord::new("a.bin", None).category(), UNKNOWN_CATEGORY);
        assert_eq!(FileRecord::new("a.bin", Some("")).category(), UNKNOWN_CATEGORY);
    }

    #[test]
    fn listing_payload_tolerates_missing_and_null_fields() {
        let payload = r#"[
            {"filename": "report.pdf", "tag": "pdf", "summary": ""},
            {"filename": "notes.txt", "tag": null},
            {"filename": "blob"}
        ]"#;
        let files: Vec<FileRecord> = serde_json::from_str(payload).unwrap();
        assert_eq!(files.len(), 3);
        assert_eq!(files[0].category(), "pdf");
        assert_eq!(files[0].stored_summary(), None);
        assert_eq!(files[1].category(), UNKNOWN_CATEGORY);
        assert_eq!(files[2].tag, None);
    }

    #[test]
    fn identity_payload_without_name() {
        let user: User = serde_json::from_str(r#"{"email": "ada@example.com"}"#).unwrap();
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.name, None);
    }

    #[test]
    fn summary_payload() {
        let summary: FileSummary =
            serde_json::from_str(r#"{"filename": "a.pdf", "summary": "- point one"}"#).unwrap();
        assert_eq!(summary.filename.as_deref(), Some("a.pdf"));
        assert_eq!(summary.summary, "- point one");
    }
}
