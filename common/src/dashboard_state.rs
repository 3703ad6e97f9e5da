//! Dashboard view state and its transitions.
//!
//! Every list, upload, search and summarize request is issued a
//! [`RequestTicket`]. A response only lands if its ticket is still the latest
//! one of its kind, and only the request owning the current [`Activity`] may
//! clear it.

use std::collections::VecDeque;

use crate::{
    error::ApiError,
    grouping::{self, FileCategory},
    models::{FileRecord, FileSummary, UploadReceipt, User},
};

/// Modal text shown when the summary request fails.
pub const SUMMARY_FAILED_TEXT: &str = "Failed to generate summary.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    #[default]
    Pending,
    Authenticated(User),
    Unauthenticated,
}

/// What the dashboard is currently waiting on.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Activity {
    #[default]
    Idle,
    Uploading { ticket: RequestTicket, filename: String },
    Searching { ticket: RequestTicket, query: String },
    Summarizing { ticket: RequestTicket, filename: String },
}

impl Activity {
    fn ticket(&self) -> Option<RequestTicket> {
        match self {
            Activity::Idle => None,
            Activity::Uploading { ticket, .. }
            | Activity::Searching { ticket, .. }
            | Activity::Summarizing { ticket, .. } => Some(*ticket),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Activity::Idle)
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self, Activity::Uploading { .. })
    }

    pub fn is_searching(&self) -> bool {
        matches!(self, Activity::Searching { .. })
    }

    pub fn is_summarizing(&self, filename: &str) -> bool {
        matches!(self, Activity::Summarizing { filename: f, .. } if f == filename)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryState {
    pub filename: String,
    pub text: String,
    pub failed: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchResultSet {
    pub query: String,
    pub results: Vec<FileRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, title: title.into(), description: description.into() }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, title: title.into(), description: description.into() }
    }

    pub fn error(title: impl Into<String>, err: &ApiError) -> Self {
        Self { kind: NoticeKind::Error, title: title.into(), description: err.to_string() }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    auth: AuthState,
    files: Vec<FileRecord>,
    search: Option<SearchResultSet>,
    activity: Activity,
    summary: Option<SummaryState>,
    notices: VecDeque<Notice>,
    issued: u64,
    latest_listing: Option<RequestTicket>,
    latest_search: Option<RequestTicket>,
    latest_summary: Option<RequestTicket>,
}

impl DashboardState {
    fn issue(&mut self) -> RequestTicket {
        self.issued += 1;
        RequestTicket(self.issued)
    }

    fn settle(&mut self, ticket: RequestTicket) {
        if self.activity.ticket() == Some(ticket) {
            self.activity = Activity::Idle;
        }
    }

    pub fn auth(&self) -> &AuthState {
        &self.auth
    }

    pub fn user(&self) -> Option<&User> {
        match &self.auth {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    pub fn search_results(&self) -> Option<&SearchResultSet> {
        self.search.as_ref()
    }

    pub fn displayed_files(&self) -> &[FileRecord] {
        let results = self.search.as_ref().map(|s| s.results.as_slice()).unwrap_or(&[]);
        grouping::displayed_files(&self.files, results)
    }

    pub fn categories(&self) -> Vec<FileCategory> {
        grouping::group_by_category(self.displayed_files())
    }

    pub fn activity(&self) -> &Activity {
        &self.activity
    }

    pub fn summary(&self) -> Option<&SummaryState> {
        self.summary.as_ref()
    }

    pub fn identity_loaded(&mut self, result: Result<User, ApiError>) -> &AuthState {
        self.auth = match result {
            Ok(user) => AuthState::Authenticated(user),
            Err(_) => AuthState::Unauthenticated,
        };
        &self.auth
    }

    pub fn begin_listing(&mut self) -> RequestTicket {
        let ticket = self.issue();
        self.latest_listing = Some(ticket);
        ticket
    }

    /// Returns false when the response was superseded and dropped.
    pub fn finish_listing(&mut self, ticket: RequestTicket, result: Result<Vec<FileRecord>, ApiError>) -> bool {
        if self.latest_listing != Some(ticket) {
            return false;
        }
        match result {
            Ok(files) => self.files = files,
            Err(e) => self.push_notice(Notice::error("Could not load files", &e)),
        }
        true
    }

    pub fn begin_upload(&mut self, filename: &str) -> RequestTicket {
        let ticket = self.issue();
        self.activity = Activity::Uploading { ticket, filename: filename.to_string() };
        ticket
    }

    pub fn finish_upload(&mut self, ticket: RequestTicket, filename: &str, result: Result<UploadReceipt, ApiError>) {
        self.settle(ticket);
        match result {
            Ok(receipt) => {
                let tag = receipt.tag.unwrap_or_else(|| crate::models::UNKNOWN_CATEGORY.to_string());
                self.push_notice(Notice::success(format!("Uploaded {}", receipt.filename), format!("Tagged as {tag}.")));
            }
            Err(e) => self.push_notice(Notice::error(format!("Upload of {filename} failed"), &e)),
        }
    }

    pub fn finish_delete(&mut self, filename: &str, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                if let Some(search) = self.search.as_mut() {
                    search.results.retain(|f| f.filename != filename);
                }
                self.push_notice(Notice::success(format!("Deleted {filename}"), "The file was removed."));
            }
            Err(e) => self.push_notice(Notice::error(format!("Could not delete {filename}"), &e)),
        }
    }

    /// Starts a search, or clears the results when the query is blank.
    /// Either way any search still in flight becomes stale.
    pub fn begin_search(&mut self, query: &str) -> Option<RequestTicket> {
        let query = query.trim();
        if query.is_empty() {
            self.clear_search();
            return None;
        }
        let ticket = self.issue();
        self.latest_search = Some(ticket);
        self.activity = Activity::Searching { ticket, query: query.to_string() };
        Some(ticket)
    }

    pub fn finish_search(&mut self, ticket: RequestTicket, query: &str, result: Result<Vec<FileRecord>, ApiError>) -> bool {
        self.settle(ticket);
        if self.latest_search != Some(ticket) {
            return false;
        }
        match result {
            Ok(results) => {
                // an empty result set leaves the full list on screen
                if results.is_empty() {
                    self.push_notice(Notice::info(format!("No matches for \"{query}\""), "Showing all files."));
                }
                self.search = Some(SearchResultSet { query: query.to_string(), results });
            }
            Err(e) => self.push_notice(Notice::error(format!("Search for \"{query}\" failed"), &e)),
        }
        true
    }

    pub fn clear_search(&mut self) {
        self.search = None;
        self.latest_search = None;
        if self.activity.is_searching() {
            self.activity = Activity::Idle;
        }
    }

    pub fn begin_summary(&mut self, filename: &str) -> RequestTicket {
        let ticket = self.issue();
        self.latest_summary = Some(ticket);
        self.activity = Activity::Summarizing { ticket, filename: filename.to_string() };
        ticket
    }

    pub fn finish_summary(&mut self, ticket: RequestTicket, filename: &str, result: Result<FileSummary, ApiError>) -> bool {
        self.settle(ticket);
        if self.latest_summary != Some(ticket) {
            return false;
        }
        self.summary = Some(match result {
            Ok(summary) => SummaryState { filename: filename.to_string(), text: summary.summary, failed: false },
            Err(_) => SummaryState { filename: filename.to_string(), text: SUMMARY_FAILED_TEXT.to_string(), failed: true },
        });
        true
    }

    pub fn close_summary(&mut self) {
        self.summary = None;
    }

    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push_back(notice);
    }

    pub fn has_pending_notices(&self) -> bool {
        !self.notices.is_empty()
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(filename: &str, tag: Option<&str>) -> FileRecord {
        FileRecord::new(filename, tag)
    }

    fn summary(text: &str) -> Result<FileSummary, ApiError> {
        Ok(FileSummary { filename: None, summary: text.to_string() })
    }

    fn loaded(files: Vec<FileRecord>) -> DashboardState {
        let mut state = DashboardState::default();
        let ticket = state.begin_listing();
        assert!(state.finish_listing(ticket, Ok(files)));
        state
    }

    #[test]
    fn identity_failure_unauthenticates() {
        let mut state = DashboardState::default();
        assert_eq!(state.auth(), &AuthState::Pending);
        assert_eq!(state.identity_loaded(Err(ApiError::Unauthorized)), &AuthState::Unauthenticated);
        assert!(state.user().is_none());
    }

    #[test]
    fn identity_success_exposes_user() {
        let mut state = DashboardState::default();
        state.identity_loaded(Ok(User { email: "ada@example.com".into(), name: None }));
        assert_eq!(state.user().map(|u| u.email.as_str()), Some("ada@example.com"));
    }

    #[test]
    fn blank_search_reverts_to_full_list() {
        let files = vec![record("a.pdf", Some("pdf")), record("b.png", Some("image"))];
        let mut state = loaded(files.clone());
        let ticket = state.begin_search("pdf").unwrap();
        state.finish_search(ticket, "pdf", Ok(vec![record("a.pdf", Some("pdf"))]));
        assert_eq!(state.displayed_files().len(), 1);

        assert!(state.begin_search("   ").is_none());
        assert_eq!(state.displayed_files(), files.as_slice());
        assert!(state.search_results().is_none());
    }

    #[test]
    fn search_results_replace_display_and_group_by_tag() {
        let mut state = loaded(vec![record("a.pdf", Some("pdf")), record("b.png", Some("image"))]);
        let ticket = state.begin_search("  report ").unwrap();
        assert!(state.activity().is_searching());
        let results = vec![record("report.pdf", Some("pdf")), record("report", None), record("report.docx", Some("pdf"))];
        assert!(state.finish_search(ticket, "report", Ok(results.clone())));
        assert!(state.activity().is_idle());
        assert_eq!(state.displayed_files(), results.as_slice());
        let categories = state.categories();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "pdf");
        assert_eq!(categories[0].files.len(), 2);
        assert_eq!(categories[1].name, "unknown");
        assert_eq!(state.search_results().map(|s| s.query.as_str()), Some("report"));
    }

    #[test]
    fn empty_search_result_keeps_full_list_displayed() {
        let files = vec![record("a.pdf", Some("pdf"))];
        let mut state = loaded(files.clone());
        let ticket = state.begin_search("nothing").unwrap();
        state.finish_search(ticket, "nothing", Ok(vec![]));
        assert_eq!(state.displayed_files(), files.as_slice());
        let notices = state.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Info);
        assert_eq!(notices[0].title, "No matches for \"nothing\"");
    }

    #[test]
    fn search_with_hits_queues_no_notice() {
        let mut state = loaded(vec![record("a.pdf", Some("pdf"))]);
        let ticket = state.begin_search("a").unwrap();
        state.finish_search(ticket, "a", Ok(vec![record("a.pdf", Some("pdf"))]));
        assert!(!state.has_pending_notices());
    }

    #[test]
    fn summary_stays_open_until_closed() {
        let mut state = loaded(vec![record("a.pdf", Some("pdf"))]);
        let ticket = state.begin_summary("a.pdf");
        state.finish_summary(ticket, "a.pdf", summary("about a"));
        let listing = state.begin_listing();
        state.finish_listing(listing, Ok(vec![]));
        let search = state.begin_search("a").unwrap();
        state.finish_search(search, "a", Ok(vec![record("a.pdf", Some("pdf"))]));
        state.finish_delete("a.pdf", Ok(()));
        assert_eq!(state.summary().map(|s| s.text.as_str()), Some("about a"));
        state.close_summary();
        assert!(state.summary().is_none());
    }

    #[test]
    fn stale_search_is_discarded() {
        let mut state = loaded(vec![]);
        let first = state.begin_search("old").unwrap();
        let second = state.begin_search("new").unwrap();
        assert!(state.finish_search(second, "new", Ok(vec![record("new.txt", None)])));
        assert!(!state.finish_search(first, "old", Ok(vec![record("old.txt", None)])));
        assert_eq!(state.displayed_files()[0].filename, "new.txt");
    }

    #[test]
    fn clearing_search_invalidates_in_flight_request() {
        let mut state = loaded(vec![record("a.pdf", Some("pdf"))]);
        let ticket = state.begin_search("a").unwrap();
        state.clear_search();
        assert!(state.activity().is_idle());
        assert!(!state.finish_search(ticket, "a", Ok(vec![record("zzz", None)])));
        assert_eq!(state.displayed_files()[0].filename, "a.pdf");
    }

    #[test]
    fn failed_search_keeps_previous_results_and_notifies() {
        let mut state = loaded(vec![]);
        let ticket = state.begin_search("a").unwrap();
        state.finish_search(ticket, "a", Ok(vec![record("a.txt", None)]));
        let ticket = state.begin_search("b").unwrap();
        state.finish_search(ticket, "b", Err(ApiError::Transport("offline".into())));
        assert_eq!(state.displayed_files()[0].filename, "a.txt");
        let notices = state.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Error);
        assert!(!state.has_pending_notices());
    }

    #[test]
    fn summary_latest_initiated_wins_when_it_resolves_last() {
        let mut state = DashboardState::default();
        let a = state.begin_summary("a.pdf");
        let b = state.begin_summary("b.pdf");
        assert!(!state.finish_summary(a, "a.pdf", summary("about a")));
        assert!(state.activity().is_summarizing("b.pdf"));
        assert!(state.finish_summary(b, "b.pdf", summary("about b")));
        assert_eq!(state.summary().map(|s| s.filename.as_str()), Some("b.pdf"));
        assert!(state.activity().is_idle());
    }

    #[test]
    fn summary_latest_initiated_wins_when_it_resolves_first() {
        let mut state = DashboardState::default();
        let a = state.begin_summary("a.pdf");
        let b = state.begin_summary("b.pdf");
        assert!(state.finish_summary(b, "b.pdf", summary("about b")));
        assert!(!state.finish_summary(a, "a.pdf", summary("about a")));
        let shown = state.summary().unwrap();
        assert_eq!(shown.filename, "b.pdf");
        assert_eq!(shown.text, "about b");
    }

    #[test]
    fn summary_failure_shows_placeholder_and_close_clears() {
        let mut state = DashboardState::default();
        let ticket = state.begin_summary("a.pdf");
        state.finish_summary(ticket, "a.pdf", Err(ApiError::from_status(500, "boom")));
        let shown = state.summary().unwrap();
        assert!(shown.failed);
        assert_eq!(shown.text, SUMMARY_FAILED_TEXT);
        assert!(state.activity().is_idle());
        state.close_summary();
        assert!(state.summary().is_none());
    }

    #[test]
    fn upload_activity_clears_on_failure() {
        let mut state = DashboardState::default();
        let ticket = state.begin_upload("big.zip");
        assert!(state.activity().is_uploading());
        state.finish_upload(ticket, "big.zip", Err(ApiError::from_status(413, "too large")));
        assert!(state.activity().is_idle());
        assert_eq!(state.take_notices()[0].kind, NoticeKind::Error);
    }

    #[test]
    fn superseded_activity_is_not_cleared_by_older_request() {
        let mut state = DashboardState::default();
        let upload = state.begin_upload("a.pdf");
        let _summary = state.begin_summary("b.pdf");
        state.finish_upload(upload, "a.pdf", Ok(UploadReceipt { filename: "a.pdf".into(), tag: Some("pdf".into()) }));
        assert!(state.activity().is_summarizing("b.pdf"));
        let notices = state.take_notices();
        assert_eq!(notices[0].kind, NoticeKind::Success);
        assert_eq!(notices[0].description, "Tagged as pdf.");
    }

    #[test]
    fn stale_listing_is_discarded() {
        let mut state = DashboardState::default();
        let first = state.begin_listing();
        let second = state.begin_listing();
        assert!(state.finish_listing(second, Ok(vec![record("new", None)])));
        assert!(!state.finish_listing(first, Ok(vec![record("old", None)])));
        assert_eq!(state.files()[0].filename, "new");
    }

    #[test]
    fn failed_listing_keeps_stale_files() {
        let mut state = loaded(vec![record("a.pdf", Some("pdf"))]);
        let ticket = state.begin_listing();
        state.finish_listing(ticket, Err(ApiError::Transport("offline".into())));
        assert_eq!(state.files().len(), 1);
        assert!(state.has_pending_notices());
    }

    #[test]
    fn delete_prunes_search_results() {
        let mut state = loaded(vec![record("a.pdf", Some("pdf")), record("b.pdf", Some("pdf"))]);
        let ticket = state.begin_search("pdf").unwrap();
        state.finish_search(ticket, "pdf", Ok(vec![record("a.pdf", Some("pdf")), record("b.pdf", Some("pdf"))]));
        state.finish_delete("a.pdf", Ok(()));
        let shown: Vec<_> = state.displayed_files().iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(shown, vec!["b.pdf"]);
    }
}
