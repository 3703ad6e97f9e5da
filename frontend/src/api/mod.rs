//! Calls and navigations against the file backend.

pub mod auth_api;
pub mod files_api;
