use super::*;

const BASE: &str = "https://api.example.test";

#[test]
fn login_endpoint_formats_expected_path() {
    assert_eq!(login_endpoint(BASE), "https://api.example.test/authentication/login");
}

#[test]
fn user_endpoint_formats_expected_path() {
    assert_eq!(user_endpoint(BASE, "u-1"), "https://api.example.test/users/u-1");
}

#[test]
fn memes_endpoints_format_expected_paths() {
    assert_eq!(memes_endpoint(BASE), "https://api.example.test/memes");
    assert_eq!(memes_page_endpoint(BASE, 3), "https://api.example.test/memes?page=3");
}

#[test]
fn meme_comments_endpoints_format_expected_paths() {
    assert_eq!(meme_comments_endpoint(BASE, "m-1"), "https://api.example.test/memes/m-1/comments");
    assert_eq!(
        meme_comments_page_endpoint(BASE, "m-1", 1),
        "https://api.example.test/memes/m-1/comments?page=1"
    );
}

#[test]
fn bearer_prefixes_token() {
    assert_eq!(bearer("abc.def.ghi"), "Bearer abc.def.ghi");
}

#[test]
fn texts_field_is_empty_array_without_captions() {
    assert_eq!(texts_field(&[]).unwrap(), "[]");
}

#[test]
fn texts_field_encodes_captions_in_order() {
    let texts = vec![
        Caption { content: "top".to_owned(), x: 10.0, y: 20.0 },
        Caption { content: "bottom".to_owned(), x: 5.5, y: 400.0 },
    ];
    let raw = texts_field(&texts).unwrap();
    let decoded: Vec<Caption> = serde_json::from_str(&raw).unwrap();
    assert_eq!(decoded, texts);
    assert!(raw.starts_with(r#"[{"content":"top""#));
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_build_reports_unavailable() {
    let picture = Picture { url: "blob:x".to_owned(), name: "x.png".to_owned() };
    let result = block_on_ready(create_meme("t", &picture, "d", &[]));
    assert_eq!(result, Err(ApiError::Unavailable));
}

/// Minimal executor for futures that complete on first poll.
#[cfg(not(feature = "csr"))]
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::task::{Context, Poll, Waker};
    let mut fut = std::pin::pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future did not complete synchronously"),
    }
}
