//! Create page: pick a picture, place captions, describe, upload.

#[cfg(test)]
#[path = "create_test.rs"]
mod create_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::meme_picture::MemePicture;
use crate::state::editor::{EditorState, Picture, random_unit, validate_submission};
use crate::util::auth::{install_unauth_redirect, use_session};

/// Number of caption rows to render. Edits to caption text or the
/// description leave it unchanged, so the row inputs keep focus while typing.
fn caption_row_count(editor: RwSignal<EditorState>) -> Memo<usize> {
    Memo::new(move |_| editor.with(|e| e.captions.len()))
}

#[component]
pub fn CreatePage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    install_unauth_redirect(session, "/create".to_owned(), navigate.clone());

    let editor = RwSignal::new(EditorState::default());
    let picture = RwSignal::new_local(None::<Picture>);
    let message = RwSignal::new(None::<&'static str>);

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast as _;

            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            match web_sys::Url::create_object_url_with_blob(&file) {
                Ok(url) => {
                    if let Some(previous) = picture.get_untracked() {
                        let _ = web_sys::Url::revoke_object_url(&previous.url);
                    }
                    picture.set(Some(Picture { url, name: file.name(), file }));
                    message.set(None);
                }
                Err(e) => log::error!("could not preview {}: {e:?}", file.name()),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    let on_add_caption = move |_| editor.update(|e| e.add_caption(random_unit(), random_unit()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if editor.with_untracked(|e| e.submitting) {
            return;
        }
        let current = picture.get_untracked();
        let current = match validate_submission(current.as_ref()) {
            Ok(p) => p.clone(),
            Err(msg) => {
                message.set(Some(msg));
                return;
            }
        };
        let token = match session.token() {
            Ok(token) => token,
            Err(e) => {
                log::error!("cannot create meme: {e}");
                return;
            }
        };
        let (description, captions) = editor.with_untracked(|e| (e.description.clone(), e.captions.clone()));
        editor.update(|e| e.submitting = true);

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_meme(&token, &current, &description, &captions).await {
                    Ok(created) => {
                        log::info!("created meme {}", created.id);
                        let _ = web_sys::Url::revoke_object_url(&current.url);
                        picture.set(None);
                        editor.update(EditorState::reset);
                        navigate("/", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::error!("error creating meme: {e}");
                        session.handle_api_error(&e);
                        editor.update(|s| s.submitting = false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, current, description, captions);
            editor.update(|s| s.submitting = false);
        }
    };

    let caption_count = caption_row_count(editor);
    let caption_rows = move || {
        (0..caption_count.get())
            .map(|index| {
                view! {
                    <li class="caption-row">
                        <input
                            class="caption-row__input"
                            type="text"
                            prop:value=move || {
                                editor.with(|e| e.captions.get(index).map(|c| c.content.clone()).unwrap_or_default())
                            }
                            on:input=move |ev| {
                                editor.update(|e| {
                                    e.set_caption_content(index, event_target_value(&ev));
                                });
                            }
                        />
                        <button
                            class="btn btn--icon"
                            type="button"
                            aria-label="Delete caption"
                            on:click=move |_| {
                                editor.update(|e| {
                                    e.delete_caption(index);
                                });
                            }
                        >
                            "✕"
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <form class="create-page" on:submit=on_submit>
            <div class="create-page__main">
                <section>
                    <h2>"Upload your picture"</h2>
                    <input class="create-page__file" type="file" accept="image/*" on:change=on_file_change/>
                    <Show
                        when=move || picture.with(Option::is_some)
                        fallback=|| view! { <p class="create-page__hint">"Drop or pick an image to get started."</p> }
                    >
                        <MemePicture
                            picture_url=Signal::derive(move || {
                                picture.with(|p| p.as_ref().map(|p| p.url.clone()).unwrap_or_default())
                            })
                            texts=Signal::derive(move || editor.with(|e| e.captions.clone()))
                            test_id="meme-editor-picture"
                        />
                    </Show>
                </section>
                <section>
                    <h2>"Describe your meme"</h2>
                    <textarea
                        class="create-page__description"
                        placeholder="Type your description here..."
                        prop:value=move || editor.with(|e| e.description.clone())
                        on:input=move |ev| editor.update(|e| e.description = event_target_value(&ev))
                    ></textarea>
                </section>
            </div>
            <aside class="create-page__sidebar">
                <h2>"Add your captions"</h2>
                <ul class="create-page__captions">{caption_rows}</ul>
                <button class="btn" type="button" on:click=on_add_caption>
                    "+ Add a caption"
                </button>
                <Show when=move || message.with(Option::is_some)>
                    <p class="create-page__message">{move || message.get().unwrap_or_default()}</p>
                </Show>
                <div class="create-page__actions">
                    <a class="btn btn--ghost" href="/">
                        "Cancel"
                    </a>
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || picture.with(Option::is_none) || editor.with(|e| e.submitting)
                    >
                        "Submit"
                    </button>
                </div>
            </aside>
        </form>
    }
}
