//! State shared across dashboard components.

pub mod signal_store;
