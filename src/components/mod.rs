//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the header, feed cards and meme pictures while reading
//! the session from Leptos context.

pub mod header;
pub mod loader;
pub mod meme_card;
pub mod meme_picture;
