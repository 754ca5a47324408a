//! Common library for the add-user tooling
//!
//! This crate holds the wire models exchanged with the administrative API
//! and the input coercion rules applied before anything is sent.

pub mod error;
pub mod models;
pub mod validation;
