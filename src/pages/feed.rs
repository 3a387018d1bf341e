//! Meme feed: paginated memes with authors and comments.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated landing route. Each page load fetches the memes page, then
//! authors and first comment pages concurrently. A result for a page the user
//! has already navigated away from is dropped.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::loader::Loader;
use crate::components::meme_card::MemeCard;
use crate::state::feed::{FeedItem, FeedState};
use crate::util::auth::{install_unauth_redirect, use_session};

/// `For` key: a card re-renders when its comment list changes.
fn item_key(item: &FeedItem) -> (String, Vec<String>) {
    (item.meme.id.clone(), item.comments.iter().map(|c| c.comment.id.clone()).collect())
}

#[cfg(feature = "csr")]
async fn load_feed_item(
    token: &str,
    meme: crate::net::types::Meme,
) -> Result<FeedItem, crate::net::error::ApiError> {
    use crate::net::api;
    use crate::state::feed::CommentItem;

    let (author, comments) =
        futures::future::try_join(api::get_user_by_id(token, &meme.author_id), api::get_meme_comments(token, &meme.id, 1))
            .await?;
    let comments = futures::future::try_join_all(comments.results.into_iter().map(|comment| async move {
        let author = api::get_user_by_id(token, &comment.author_id).await?;
        Ok::<_, crate::net::error::ApiError>(CommentItem { comment, author })
    }))
    .await?;
    Ok(FeedItem { meme, author, comments })
}

#[cfg(feature = "csr")]
async fn load_feed_page(token: &str, page: u32) -> Result<(Vec<FeedItem>, bool), crate::net::error::ApiError> {
    let memes = crate::net::api::get_memes(token, page).await?;
    let has_next = memes.has_next(page);
    let items = futures::future::try_join_all(memes.results.into_iter().map(|meme| load_feed_item(token, meme))).await?;
    Ok((items, has_next))
}

#[component]
pub fn FeedPage() -> impl IntoView {
    let session = use_session();
    install_unauth_redirect(session, "/".to_owned(), use_navigate());

    let feed = RwSignal::new(FeedState::default());
    let page_key = Memo::new(move |_| feed.with(|f| (f.page, f.reload_seq)));

    Effect::new(move || {
        let (page, _) = page_key.get();
        let Ok(token) = session.token() else {
            return;
        };
        feed.update(|f| {
            f.loading = true;
            f.error = None;
        });

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = load_feed_page(&token, page).await;
            if let Err(e) = &result {
                log::error!("failed to load memes page {page}: {e}");
                session.handle_api_error(e);
            }
            feed.update(|f| {
                if f.page != page {
                    return;
                }
                f.loading = false;
                match result {
                    Ok((items, has_next)) => {
                        f.items = items;
                        f.has_next = has_next;
                    }
                    Err(e) => f.error = Some(e.to_string()),
                }
            });
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (page, token);
            feed.update(|f| f.loading = false);
        }
    });

    let on_comment = Callback::new(move |meme_id: String| {
        let Some(content) = feed.with_untracked(|f| f.submittable_draft(&meme_id)) else {
            return;
        };
        let token = match session.token() {
            Ok(token) => token,
            Err(e) => {
                log::error!("cannot comment: {e}");
                return;
            }
        };

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_meme_comment(&token, &meme_id, &content).await {
                Ok(comment) => {
                    log::debug!("posted comment {} on meme {meme_id}", comment.id);
                    feed.update(|f| {
                        f.clear_draft(&meme_id);
                        f.reload();
                    });
                }
                Err(e) => {
                    log::error!("failed to post comment on meme {meme_id}: {e}");
                    session.handle_api_error(&e);
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, content);
        }
    });

    view! {
        <section class="feed-page">
            <Show when=move || feed.with(|f| f.loading && f.items.is_empty())>
                <Loader/>
            </Show>
            <Show when=move || feed.with(|f| f.error.is_some())>
                <p class="feed-page__error">"Could not load memes. Please try again later."</p>
            </Show>
            <div class="feed-page__grid">
                <For
                    each=move || feed.with(|f| f.items.clone())
                    key=item_key
                    children=move |item| view! { <MemeCard item=item feed=feed on_comment=on_comment/> }
                />
            </div>
            <nav class="feed-page__pagination">
                <button
                    class="btn"
                    disabled=move || !feed.with(FeedState::can_go_previous)
                    on:click=move |_| feed.update(FeedState::previous_page)
                >
                    "Previous"
                </button>
                <span class="feed-page__page">{move || format!("Page {}", feed.with(|f| f.page))}</span>
                <button
                    class="btn"
                    disabled=move || !feed.with(FeedState::can_go_next)
                    on:click=move |_| feed.update(FeedState::next_page)
                >
                    "Next"
                </button>
            </nav>
        </section>
    }
}
