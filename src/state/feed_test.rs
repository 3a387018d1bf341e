use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_user(id: &str) -> User {
    User { id: id.to_owned(), username: format!("user-{id}"), picture_url: String::new() }
}

fn make_item(meme_id: &str, comment_count: usize) -> FeedItem {
    let comments = (0..comment_count)
        .map(|i| CommentItem {
            comment: Comment {
                id: format!("c-{i}"),
                author_id: "u-2".to_owned(),
                meme_id: meme_id.to_owned(),
                content: format!("comment {i}"),
                created_at: "2024-05-01T10:00:00Z".to_owned(),
            },
            author: make_user("u-2"),
        })
        .collect();
    FeedItem {
        meme: Meme {
            id: meme_id.to_owned(),
            author_id: "u-1".to_owned(),
            picture_url: String::new(),
            description: String::new(),
            texts: Vec::new(),
            created_at: "2024-05-01T10:00:00Z".to_owned(),
        },
        author: make_user("u-1"),
        comments,
    }
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn feed_starts_on_first_page() {
    let state = FeedState::default();
    assert_eq!(state.page, 1);
    assert!(!state.can_go_previous());
}

#[test]
fn previous_page_never_goes_below_one() {
    let mut state = FeedState::default();
    state.previous_page();
    assert_eq!(state.page, 1);
    state.page = 3;
    state.previous_page();
    assert_eq!(state.page, 2);
}

#[test]
fn next_page_blocked_while_loading() {
    let mut state = FeedState { has_next: true, loading: true, ..FeedState::default() };
    state.next_page();
    assert_eq!(state.page, 1);
    state.loading = false;
    state.next_page();
    assert_eq!(state.page, 2);
}

#[test]
fn next_page_blocked_on_last_page() {
    let mut state = FeedState::default();
    state.next_page();
    assert_eq!(state.page, 1);
}

#[test]
fn reload_bumps_sequence() {
    let mut state = FeedState::default();
    state.reload();
    state.reload();
    assert_eq!(state.reload_seq, 2);
}

// =============================================================
// Drafts
// =============================================================

#[test]
fn drafts_are_per_meme() {
    let mut state = FeedState::default();
    state.set_draft("m-1", "first".to_owned());
    state.set_draft("m-2", "second".to_owned());
    assert_eq!(state.draft("m-1"), "first");
    assert_eq!(state.draft("m-2"), "second");
    assert_eq!(state.draft("m-3"), "");
    state.clear_draft("m-1");
    assert_eq!(state.draft("m-1"), "");
    assert_eq!(state.draft("m-2"), "second");
}

#[test]
fn submittable_draft_trims_and_rejects_blank() {
    let mut state = FeedState::default();
    state.set_draft("m-1", "  nice one \n".to_owned());
    state.set_draft("m-2", "   ".to_owned());
    assert_eq!(state.submittable_draft("m-1").as_deref(), Some("nice one"));
    assert_eq!(state.submittable_draft("m-2"), None);
    assert_eq!(state.submittable_draft("m-3"), None);
}

// =============================================================
// Comment preview
// =============================================================

#[test]
fn collapsed_feed_item_shows_three_comments() {
    let state = FeedState::default();
    let item = make_item("m-1", 5);
    assert_eq!(state.visible_comments(&item).len(), 3);
    assert!(needs_comment_toggle(&item));
}

#[test]
fn expanded_feed_item_shows_all_comments() {
    let mut state = FeedState::default();
    let item = make_item("m-1", 5);
    state.toggle_expanded("m-1");
    assert!(state.is_expanded("m-1"));
    assert_eq!(state.visible_comments(&item).len(), 5);
    state.toggle_expanded("m-1");
    assert_eq!(state.visible_comments(&item).len(), 3);
}

#[test]
fn short_comment_lists_have_no_toggle() {
    let state = FeedState::default();
    let item = make_item("m-1", 3);
    assert_eq!(state.visible_comments(&item).len(), 3);
    assert!(!needs_comment_toggle(&item));
    assert!(state.visible_comments(&make_item("m-2", 0)).is_empty());
}
