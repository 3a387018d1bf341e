//! Meme feed state: current page, hydrated items, comment drafts.
//!
//! DESIGN
//! ======
//! Drafts and expansion flags are keyed by meme id so they survive a reload of
//! the same page (e.g. after posting a comment).

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use std::collections::{HashMap, HashSet};

use crate::config::COMMENTS_PREVIEW_LEN;
use crate::net::types::{Comment, Meme, User};

/// A comment joined with its author.
#[derive(Clone, Debug, PartialEq)]
pub struct CommentItem {
    pub comment: Comment,
    pub author: User,
}

/// A meme joined with its author and first page of comments.
#[derive(Clone, Debug, PartialEq)]
pub struct FeedItem {
    pub meme: Meme,
    pub author: User,
    pub comments: Vec<CommentItem>,
}

#[derive(Clone, Debug)]
pub struct FeedState {
    /// 1-based page number.
    pub page: u32,
    pub items: Vec<FeedItem>,
    pub has_next: bool,
    pub loading: bool,
    pub error: Option<String>,
    /// Bumped to force a reload of the current page.
    pub reload_seq: u64,
    drafts: HashMap<String, String>,
    expanded: HashSet<String>,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            page: 1,
            items: Vec::new(),
            has_next: false,
            loading: false,
            error: None,
            reload_seq: 0,
            drafts: HashMap::new(),
            expanded: HashSet::new(),
        }
    }
}

impl FeedState {
    pub fn can_go_previous(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        !self.loading && self.has_next
    }

    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    pub fn next_page(&mut self) {
        if self.can_go_next() {
            self.page += 1;
        }
    }

    pub fn reload(&mut self) {
        self.reload_seq += 1;
    }

    pub fn draft(&self, meme_id: &str) -> &str {
        self.drafts.get(meme_id).map_or("", String::as_str)
    }

    pub fn set_draft(&mut self, meme_id: &str, value: String) {
        self.drafts.insert(meme_id.to_owned(), value);
    }

    pub fn clear_draft(&mut self, meme_id: &str) {
        self.drafts.remove(meme_id);
    }

    /// Trimmed draft for `meme_id`, or `None` if there is nothing to post.
    pub fn submittable_draft(&self, meme_id: &str) -> Option<String> {
        let trimmed = self.draft(meme_id).trim();
        (!trimmed.is_empty()).then(|| trimmed.to_owned())
    }

    pub fn is_expanded(&self, meme_id: &str) -> bool {
        self.expanded.contains(meme_id)
    }

    pub fn toggle_expanded(&mut self, meme_id: &str) {
        if !self.expanded.remove(meme_id) {
            self.expanded.insert(meme_id.to_owned());
        }
    }

    /// Comments to render for `item`: all when expanded, else a short preview.
    pub fn visible_comments<'a>(&self, item: &'a FeedItem) -> &'a [CommentItem] {
        if self.is_expanded(&item.meme.id) {
            &item.comments
        } else {
            &item.comments[..item.comments.len().min(COMMENTS_PREVIEW_LEN)]
        }
    }
}

/// Whether a "Show more"/"Show less" toggle is needed for `item`.
pub fn needs_comment_toggle(item: &FeedItem) -> bool {
    item.comments.len() > COMMENTS_PREVIEW_LEN
}
