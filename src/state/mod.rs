//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `feed`, `editor`) so individual
//! components can depend on small focused models.

pub mod editor;
pub mod feed;
pub mod session;
