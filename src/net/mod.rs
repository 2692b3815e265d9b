//! Networking modules for the comments and login endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls behind the `Backend` trait, `types` defines the
//! wire schema, and `error` classifies what can go wrong on the way.

pub mod api;
pub mod error;
pub mod types;
