//! Backend endpoint table.

use urlencoding::encode;

/// Multipart field the upload endpoint reads the file from.
pub const UPLOAD_FIELD_NAME: &str = "file";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    CurrentUser,
    Logout,
    ListFiles,
    Upload,
    Delete(String),
    View(String),
    Search(String),
    Summarize(String),
}

impl Endpoint {
    pub fn method(&self) -> HttpMethod {
        match self {
            Endpoint::Logout | Endpoint::Upload => HttpMethod::Post,
            Endpoint::Delete(_) => HttpMethod::Delete,
            _ => HttpMethod::Get,
        }
    }

    /// Path relative to the backend base address. Dynamic segments are
    /// percent-encoded so a filename or query always stays one segment.
    pub fn path(&self) -> String {
        match self {
            Endpoint::Login => "/auth/login/google".to_string(),
            Endpoint::CurrentUser => "/auth/me".to_string(),
            Endpoint::Logout => "/auth/logout".to_string(),
            Endpoint::ListFiles => "/files/files-ai".to_string(),
            Endpoint::Upload => "/files/upload-ai".to_string(),
            Endpoint::Delete(filename) => format!("/files/delete/{}", encode(filename)),
            Endpoint::View(filename) => format!("/files/view/{}", encode(filename)),
            Endpoint::Search(query) => format!("/files/search-ai/{}", encode(query)),
            Endpoint::Summarize(filename) => format!("/files/summarize/{}", encode(filename)),
        }
    }

    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }

    /// Whether the request must carry the session cookie cross-origin.
    pub fn sends_credentials(&self) -> bool {
        matches!(self, Endpoint::CurrentUser)
    }
}
