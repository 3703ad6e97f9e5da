//! Dashboard operations: backend calls wired to state transitions.

use std::{cell::RefCell, rc::Rc};

use crate::{
    dashboard_state::{AuthState, DashboardState, Notice},
    error::ApiError,
    models::{FileRecord, FileSummary, FileUpload, UploadReceipt, User},
};

/// Calls the dashboard makes against the file backend.
#[allow(async_fn_in_trait)]
pub trait FilesApi {
    async fn current_user(&self) -> Result<User, ApiError>;
    async fn list_files(&self) -> Result<Vec<FileRecord>, ApiError>;
    async fn upload(&self, file: FileUpload) -> Result<UploadReceipt, ApiError>;
    async fn delete(&self, filename: &str) -> Result<(), ApiError>;
    async fn search(&self, query: &str) -> Result<Vec<FileRecord>, ApiError>;
    async fn summarize(&self, filename: &str) -> Result<FileSummary, ApiError>;
}

/// Somewhere the dashboard state lives. Updates never span an await.
pub trait DashboardStore {
    fn update<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> R;
}

impl DashboardStore for Rc<RefCell<DashboardState>> {
    fn update<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> R {
        f(&mut *self.borrow_mut())
    }
}

#[derive(Debug, Clone)]
pub struct DashboardController<A, S> {
    api: A,
    store: S,
}

impl<A: FilesApi, S: DashboardStore> DashboardController<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self { api, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn load_identity(&self) -> AuthState {
        let result = self.api.current_user().await;
        if let Err(e) = &result {
            tracing::warn!("current_user: not authenticated: {e}");
        }
        self.store.update(|state| state.identity_loaded(result).clone())
    }

    pub async fn refresh_files(&self) {
        let ticket = self.store.update(|state| state.begin_listing());
        let result = self.api.list_files().await;
        if let Err(e) = &result {
            tracing::error!("list_files: request failed: {e}");
        }
        if !self.store.update(|state| state.finish_listing(ticket, result)) {
            tracing::debug!("list_files: dropped superseded response");
        }
    }

    /// Uploads, then refreshes the listing exactly once whatever the outcome.
    pub async fn upload(&self, file: FileUpload) {
        let filename = file.filename.clone();
        let ticket = self.store.update(|state| state.begin_upload(&filename));
        tracing::info!("upload: sending {filename} ({} bytes)", file.bytes.len());
        let result = self.api.upload(file).await;
        if let Err(e) = &result {
            tracing::error!("upload: request failed for {filename}: {e}");
        }
        self.store.update(|state| state.finish_upload(ticket, &filename, result));
        self.refresh_files().await;
    }

    /// The picked file never left the browser. Reported like a failed upload,
    /// including the single refresh.
    pub async fn upload_unreadable(&self, filename: String, error: ApiError) {
        tracing::error!("upload: could not read {filename}: {error}");
        self.store.update(|state| state.push_notice(Notice::error(format!("Upload of {filename} failed"), &error)));
        self.refresh_files().await;
    }

    pub async fn delete(&self, filename: String) {
        let result = self.api.delete(&filename).await;
        if let Err(e) = &result {
            tracing::error!("delete: request failed for {filename}: {e}");
        }
        self.store.update(|state| state.finish_delete(&filename, result));
        self.refresh_files().await;
    }

    pub async fn search(&self, query: String) {
        let Some(ticket) = self.store.update(|state| state.begin_search(&query)) else {
            return;
        };
        let query = query.trim();
        let result = self.api.search(query).await;
        if let Err(e) = &result {
            tracing::error!("search: request failed for {query:?}: {e}");
        }
        if !self.store.update(|state| state.finish_search(ticket, query, result)) {
            tracing::debug!("search: dropped superseded response for {query:?}");
        }
    }

    pub fn clear_search(&self) {
        self.store.update(|state| state.clear_search());
    }

    pub async fn summarize(&self, filename: String) {
        let ticket = self.store.update(|state| state.begin_summary(&filename));
        let result = self.api.summarize(&filename).await;
        if let Err(e) = &result {
            tracing::error!("summarize: request failed for {filename}: {e}");
        }
        if !self.store.update(|state| state.finish_summary(ticket, &filename, result)) {
            tracing::debug!("summarize: dropped superseded response for {filename}");
        }
    }

    pub fn close_summary(&self) {
        self.store.update(|state| state.close_summary());
    }
}
