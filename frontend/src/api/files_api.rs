//! Client API calls for the file endpoints.

use common::{
    config::ApiConfig,
    controller::FilesApi,
    endpoints::{Endpoint, HttpMethod, UPLOAD_FIELD_NAME},
    error::ApiError,
    models::{FileRecord, FileSummary, FileUpload, UploadReceipt, User},
};
use reqwest::{
    Method, RequestBuilder, Response,
    multipart::{Form, Part},
};
use serde::de::DeserializeOwned;

/// Opened in a new tab, never fetched by the app itself.
pub fn view_url(config: &ApiConfig, filename: &str) -> String {
    Endpoint::View(filename.to_string()).url(&config.base_url)
}

#[derive(Debug, Clone)]
pub struct HttpFilesApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFilesApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self { client: reqwest::Client::new(), base_url: config.base_url.clone() }
    }

    fn request(&self, endpoint: &Endpoint) -> RequestBuilder {
        let method = match endpoint.method() {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Delete => Method::DELETE,
        };
        let builder = self.client.request(method, endpoint.url(&self.base_url));
        if endpoint.sends_credentials() { include_credentials(builder) } else { builder }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status.as_u16(), body));
        }
        Ok(response)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, ApiError> {
        let response = self.send(self.request(&endpoint)).await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(target_arch = "wasm32")]
fn include_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn include_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder
}

impl FilesApi for HttpFilesApi {
    async fn current_user(&self) -> Result<User, ApiError> {
        self.fetch_json(Endpoint::CurrentUser).await
    }

    async fn list_files(&self) -> Result<Vec<FileRecord>, ApiError> {
        self.fetch_json(Endpoint::ListFiles).await
    }

    async fn upload(&self, file: FileUpload) -> Result<UploadReceipt, ApiError> {
        let FileUpload { filename, content_type, bytes } = file;
        let mut part = Part::bytes(bytes).file_name(filename);
        if let Some(content_type) = content_type.filter(|ct| !ct.is_empty()) {
            part = part.mime_str(&content_type).map_err(|e| ApiError::Transport(e.to_string()))?;
        }
        let form = Form::new().part(UPLOAD_FIELD_NAME, part);
        let response = self.send(self.request(&Endpoint::Upload).multipart(form)).await?;
        decode(response).await
    }

    async fn delete(&self, filename: &str) -> Result<(), ApiError> {
        self.send(self.request(&Endpoint::Delete(filename.to_string()))).await?;
        Ok(())
    }

    async fn search(&self, query: &str) -> Result<Vec<FileRecord>, ApiError> {
        self.fetch_json(Endpoint::Search(query.to_string())).await
    }

    async fn summarize(&self, filename: &str) -> Result<FileSummary, ApiError> {
        self.fetch_json(Endpoint::Summarize(filename.to_string())).await
    }
}
