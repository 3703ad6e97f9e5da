//! Building blocks of the dashboard page.

pub mod user_bar;
pub mod search_bar;
pub mod upload_section;
pub mod file_groups;
pub mod file_card;
pub mod file_card_actions;
pub mod summary_modal;
pub mod notice_toaster;
