//! Glue between view-models, the backend and the browser.

pub mod comment_actions;
pub mod login_status;
pub mod random;
