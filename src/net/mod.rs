//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps each endpoint, `error` classifies failures, and `types`
//! defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
