//! Client-side view-models.
//!
//! DESIGN
//! ======
//! Each section of the page owns one plain struct (`comments`, `login`,
//! `slideshow`, `find_me`). Components keep them in `RwSignal`s and render
//! from the derived rows/controls, so every rendering decision is testable
//! without a document.

pub mod comments;
pub mod find_me;
pub mod login;
pub mod slideshow;
