//! Routed pages.

pub mod landing_page;
pub mod dashboard_page;
pub mod not_found_page;
