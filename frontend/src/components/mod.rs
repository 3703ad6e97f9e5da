//! UI components.

pub mod error_boundary;
pub mod loading_indicator;
pub mod page_frame;
pub mod dashboard_components;
