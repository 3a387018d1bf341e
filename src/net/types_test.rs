use super::*;

// =============================================================
// Feed payloads
// =============================================================

#[test]
fn memes_page_deserializes_camel_case() {
    let raw = serde_json::json!({
        "total": 12,
        "pageSize": 5,
        "results": [{
            "id": "m-1",
            "authorId": "u-1",
            "pictureUrl": "https://cdn.example/m-1.jpg",
            "description": "monday",
            "texts": [{ "content": "top", "x": 10, "y": 20.5 }],
            "createdAt": "2024-05-01T10:00:00Z"
        }]
    });
    let page: Page<Meme> = serde_json::from_value(raw).unwrap();
    assert_eq!(page.total, 12);
    assert_eq!(page.page_size, 5);
    let meme = &page.results[0];
    assert_eq!(meme.author_id, "u-1");
    assert_eq!(meme.texts, vec![Caption { content: "top".to_owned(), x: 10.0, y: 20.5 }]);
}

#[test]
fn meme_without_texts_defaults_to_empty() {
    let raw = serde_json::json!({
        "id": "m-1",
        "authorId": "u-1",
        "pictureUrl": "p",
        "description": "d",
        "createdAt": "2024-05-01T10:00:00Z"
    });
    let meme: Meme = serde_json::from_value(raw).unwrap();
    assert!(meme.texts.is_empty());
}

#[test]
fn memes_page_ignores_unknown_meme_fields() {
    let raw = r#"{"total":1,"pageSize":5,"results":[{"id":"m-1","authorId":"u-1","pictureUrl":"p","description":"d","commentsCount":"n/a","createdAt":"2024-05-01T10:00:00Z"}]}"#;
    let page: Page<Meme> = serde_json::from_str(raw).unwrap();
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].id, "m-1");
}

#[test]
fn comment_deserializes_camel_case() {
    let raw = serde_json::json!({
        "id": "c-1",
        "authorId": "u-2",
        "memeId": "m-1",
        "content": "lol",
        "createdAt": "2024-05-01T10:00:00Z"
    });
    let comment: Comment = serde_json::from_value(raw).unwrap();
    assert_eq!(comment.meme_id, "m-1");
    assert_eq!(comment.author_id, "u-2");
}

#[test]
fn user_deserializes_picture_url() {
    let raw = serde_json::json!({ "id": "u-1", "username": "alice", "pictureUrl": "https://x/a.png" });
    let user: User = serde_json::from_value(raw).unwrap();
    assert_eq!(user.picture_url, "https://x/a.png");
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn login_request_serializes_credentials() {
    let body = serde_json::to_value(LoginRequest { username: "alice", password: "pw" }).unwrap();
    assert_eq!(body, serde_json::json!({ "username": "alice", "password": "pw" }));
}

#[test]
fn create_comment_request_serializes_content() {
    let body = serde_json::to_value(CreateCommentRequest { content: "nice" }).unwrap();
    assert_eq!(body, serde_json::json!({ "content": "nice" }));
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn page_count_rounds_up() {
    let page = Page::<Meme> { total: 11, page_size: 5, results: Vec::new() };
    assert_eq!(page.page_count(), 3);
    assert!(page.has_next(2));
    assert!(!page.has_next(3));
}

#[test]
fn page_count_is_at_least_one() {
    let empty = Page::<Meme> { total: 0, page_size: 10, results: Vec::new() };
    assert_eq!(empty.page_count(), 1);
    assert!(!empty.has_next(1));

    let zero_size = Page::<Meme> { total: 4, page_size: 0, results: Vec::new() };
    assert_eq!(zero_size.page_count(), 1);
}
