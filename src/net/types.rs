//! REST wire DTOs for the MemeFactory backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Timestamps stay as the
//! ISO-8601 strings the server sends; the UI only formats them for display.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A caption positioned on the 800x450 reference canvas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Caption {
    pub content: String,
    pub x: f64,
    pub y: f64,
}

/// Body of `POST /authentication/login`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Response of `POST /authentication/login`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub jwt: String,
}

/// A user as returned by `GET /users/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub picture_url: String,
}

/// One page of a paginated listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub total: u64,
    pub page_size: u64,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Number of pages needed for `total` items. Never less than 1.
    pub fn page_count(&self) -> u64 {
        if self.page_size == 0 {
            return 1;
        }
        self.total.div_ceil(self.page_size).max(1)
    }

    /// Whether a page after the 1-based `page` exists.
    pub fn has_next(&self, page: u32) -> bool {
        u64::from(page) < self.page_count()
    }
}

/// A meme in the feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meme {
    pub id: String,
    pub author_id: String,
    pub picture_url: String,
    pub description: String,
    #[serde(default)]
    pub texts: Vec<Caption>,
    pub created_at: String,
}

/// A comment under a meme. Also the response of comment creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub author_id: String,
    pub meme_id: String,
    pub content: String,
    pub created_at: String,
}

/// Body of `POST /memes/{id}/comments`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateCommentRequest<'a> {
    pub content: &'a str,
}

/// Response of `POST /memes`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedMeme {
    pub id: String,
    pub picture_url: String,
    pub description: String,
    #[serde(default)]
    pub texts: Vec<Caption>,
    pub created_at: String,
}
