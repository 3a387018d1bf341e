//! Feed card: picture, description, comment preview and comment input.

use leptos::prelude::*;

use crate::components::meme_picture::MemePicture;
use crate::state::feed::{CommentItem, FeedItem, FeedState, needs_comment_toggle};
use crate::util::time_ago::format_created_at;

#[component]
pub fn MemeCard(item: FeedItem, feed: RwSignal<FeedState>, on_comment: Callback<String>) -> impl IntoView {
    let meme_id = item.meme.id.clone();
    let posted_by = format!("Posted by {} {}", item.author.username, format_created_at(&item.meme.created_at));
    let has_toggle = needs_comment_toggle(&item);
    let test_id = format!("meme-picture-{meme_id}");

    let toggle_id = meme_id.clone();
    let on_toggle = move |_| feed.update(|f| f.toggle_expanded(&toggle_id));
    let label_id = meme_id.clone();
    let toggle_label = move || if feed.with(|f| f.is_expanded(&label_id)) { "Show less" } else { "Show more" };

    let draft_id = meme_id.clone();
    let draft = move || feed.with(|f| f.draft(&draft_id).to_owned());
    let input_id = meme_id.clone();
    let on_input = move |ev: leptos::ev::Event| feed.update(|f| f.set_draft(&input_id, event_target_value(&ev)));
    let submit_id = meme_id.clone();
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            on_comment.run(submit_id.clone());
        }
    };

    let list_item = item.clone();
    let comments = move || {
        feed.with(|f| {
            f.visible_comments(&list_item)
                .iter()
                .cloned()
                .map(|comment| view! { <CommentRow item=comment/> })
                .collect_view()
        })
    };

    view! {
        <article class="meme-card">
            <MemePicture picture_url=item.meme.picture_url.clone() texts=item.meme.texts.clone() test_id=test_id/>
            <p class="meme-card__description">{item.meme.description.clone()}</p>
            <p class="meme-card__meta">{posted_by}</p>
            <div class="meme-card__comments">
                {comments}
                <Show when=move || has_toggle>
                    <button class="btn btn--small" on:click=on_toggle.clone()>
                        {toggle_label.clone()}
                    </button>
                </Show>
            </div>
            <label class="meme-card__comment-form">
                <span>"Add a comment"</span>
                <input
                    class="meme-card__comment-input"
                    type="text"
                    placeholder="Type your comment here..."
                    prop:value=draft
                    on:input=on_input
                    on:keydown=on_keydown
                />
            </label>
        </article>
    }
}

#[component]
fn CommentRow(item: CommentItem) -> impl IntoView {
    let test_suffix = format!("{}-{}", item.comment.meme_id, item.comment.id);
    view! {
        <div class="comment">
            <img class="comment__avatar" src=item.author.picture_url.clone() alt=item.author.username.clone()/>
            <div class="comment__body">
                <div class="comment__header">
                    <span data-testid=format!("meme-comment-author-{test_suffix}")>{item.author.username.clone()}</span>
                    <span class="comment__time">{format_created_at(&item.comment.created_at)}</span>
                </div>
                <p class="comment__content" data-testid=format!("meme-comment-content-{test_suffix}")>
                    {item.comment.content}
                </p>
            </div>
        </div>
    }
}
