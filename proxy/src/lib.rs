//! Same-origin proxy from the app server to the file backend.

pub mod config;
pub mod auth_proxy;
