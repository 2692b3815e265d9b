//! UI components, one per page section.

pub mod comment_list;
pub mod find_me;
pub mod login_controls;
pub mod slideshow;
