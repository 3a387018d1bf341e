//! REST API helpers for the MemeFactory backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning `ApiError::Unavailable`, so pure code and
//! tests compile without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. 401 maps to `Unauthorized` so
//! callers can end the session; nothing is retried here.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "csr")]
use super::error::check_status;
use super::error::ApiError;
use super::types::{Caption, Comment, CreatedMeme, LoginResponse, Meme, Page, User};
use crate::state::editor::Picture;

#[cfg(any(test, feature = "csr"))]
fn login_endpoint(base: &str) -> String {
    format!("{base}/authentication/login")
}

#[cfg(any(test, feature = "csr"))]
fn user_endpoint(base: &str, user_id: &str) -> String {
    format!("{base}/users/{user_id}")
}

#[cfg(any(test, feature = "csr"))]
fn memes_endpoint(base: &str) -> String {
    format!("{base}/memes")
}

#[cfg(any(test, feature = "csr"))]
fn memes_page_endpoint(base: &str, page: u32) -> String {
    format!("{base}/memes?page={page}")
}

#[cfg(any(test, feature = "csr"))]
fn meme_comments_endpoint(base: &str, meme_id: &str) -> String {
    format!("{base}/memes/{meme_id}/comments")
}

#[cfg(any(test, feature = "csr"))]
fn meme_comments_page_endpoint(base: &str, meme_id: &str, page: u32) -> String {
    format!("{base}/memes/{meme_id}/comments?page={page}")
}

#[cfg(any(test, feature = "csr"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// JSON value of the multipart `Texts` field. Always an array, `[]` when
/// the meme has no captions.
#[cfg(any(test, feature = "csr"))]
fn texts_field(texts: &[Caption]) -> Result<String, ApiError> {
    serde_json::to_string(texts).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "csr")]
fn transport_error(e: gloo_net::Error) -> ApiError {
    ApiError::Request(e.to_string())
}

#[cfg(feature = "csr")]
fn js_error(e: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Request(format!("{e:?}"))
}

#[cfg(feature = "csr")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if let Err(e) = check_status(resp.status()) {
        log::debug!("{} -> {}", resp.url(), resp.status());
        return Err(e);
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "csr")]
async fn get_authorized<T: serde::de::DeserializeOwned>(token: &str, url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .header("Content-Type", "application/json")
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(transport_error)?;
    read_json(resp).await
}

/// Exchange credentials for a JWT via `POST /authentication/login`.
///
/// # Errors
///
/// `Unauthorized` for wrong credentials; any other failure otherwise.
pub async fn login(username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = login_endpoint(&crate::config::api_base_url());
        let body = super::types::LoginRequest { username, password };
        let resp = gloo_net::http::Request::post(&url)
            .json(&body)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (username, password);
        Err(ApiError::Unavailable)
    }
}

/// Fetch a user via `GET /users/{id}`.
///
/// # Errors
///
/// `NotFound` for an unknown id, `Unauthorized` for a stale token.
pub async fn get_user_by_id(token: &str, user_id: &str) -> Result<User, ApiError> {
    #[cfg(feature = "csr")]
    {
        get_authorized(token, &user_endpoint(&crate::config::api_base_url(), user_id)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, user_id);
        Err(ApiError::Unavailable)
    }
}

/// Fetch one 1-based page of the meme feed via `GET /memes?page=N`.
///
/// # Errors
///
/// `Unauthorized` for a stale token; any other failure otherwise.
pub async fn get_memes(token: &str, page: u32) -> Result<Page<Meme>, ApiError> {
    #[cfg(feature = "csr")]
    {
        get_authorized(token, &memes_page_endpoint(&crate::config::api_base_url(), page)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, page);
        Err(ApiError::Unavailable)
    }
}

/// Fetch one page of a meme's comments via `GET /memes/{id}/comments?page=N`.
///
/// # Errors
///
/// `NotFound` for an unknown meme, `Unauthorized` for a stale token.
pub async fn get_meme_comments(token: &str, meme_id: &str, page: u32) -> Result<Page<Comment>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = meme_comments_page_endpoint(&crate::config::api_base_url(), meme_id, page);
        get_authorized(token, &url).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, meme_id, page);
        Err(ApiError::Unavailable)
    }
}

/// Post a comment via `POST /memes/{id}/comments`.
///
/// # Errors
///
/// `NotFound` for an unknown meme, `Unauthorized` for a stale token.
pub async fn create_meme_comment(token: &str, meme_id: &str, content: &str) -> Result<Comment, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = meme_comments_endpoint(&crate::config::api_base_url(), meme_id);
        let body = super::types::CreateCommentRequest { content };
        let resp = gloo_net::http::Request::post(&url)
            .header("Authorization", &bearer(token))
            .json(&body)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, meme_id, content);
        Err(ApiError::Unavailable)
    }
}

/// Upload a new meme via multipart `POST /memes`.
///
/// Form fields: `Picture` (the file), `Description`, and `Texts` (JSON array
/// of captions, always present).
///
/// # Errors
///
/// `Unauthorized` for a stale token; any other failure otherwise.
pub async fn create_meme(
    token: &str,
    picture: &Picture,
    description: &str,
    texts: &[Caption],
) -> Result<CreatedMeme, ApiError> {
    #[cfg(feature = "csr")]
    {
        let form = web_sys::FormData::new().map_err(js_error)?;
        form.append_with_blob("Picture", &picture.file).map_err(js_error)?;
        form.append_with_str("Description", description).map_err(js_error)?;
        form.append_with_str("Texts", &texts_field(texts)?).map_err(js_error)?;
        log::debug!("uploading meme {} with {} captions", picture.name, texts.len());

        let url = memes_endpoint(&crate::config::api_base_url());
        let resp = gloo_net::http::Request::post(&url)
            .header("Authorization", &bearer(token))
            .body(form)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, picture, description, texts);
        Err(ApiError::Unavailable)
    }
}
