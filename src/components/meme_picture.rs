//! Meme picture with captions overlaid at the rendered width.
//!
//! The container is measured on mount and whenever a `ResizeObserver` reports
//! a size change, so grid reflows and scrollbars count as well as window
//! resizes. Captions authored on the 800x450 reference canvas are rescaled
//! through `caption_layout::scale` whenever that width changes.

#[cfg(test)]
#[path = "meme_picture_test.rs"]
mod meme_picture_test;

use leptos::prelude::*;

use crate::components::loader::Loader;
use crate::net::types::Caption;
use crate::util::caption_layout::{self, ScaledLayout, container_height};

fn scaled_layout(width: RwSignal<f64>, texts: Signal<Vec<Caption>>) -> Memo<ScaledLayout> {
    Memo::new(move |_| texts.with(|t| caption_layout::scale(width.get(), t)))
}

#[component]
pub fn MemePicture(
    #[prop(into)] picture_url: Signal<String>,
    #[prop(into)] texts: Signal<Vec<Caption>>,
    #[prop(optional, into)] test_id: String,
) -> impl IntoView {
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let width = RwSignal::new(0.0_f64);
    let image_error = RwSignal::new(false);

    #[cfg(feature = "csr")]
    {
        let measure = move || {
            if let Some(el) = container_ref.get_untracked() {
                width.set(f64::from(el.client_width()));
            }
        };
        let observer = StoredValue::new_local(
            None::<(web_sys::ResizeObserver, wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array)>)>,
        );
        Effect::new(move || {
            use wasm_bindgen::JsCast as _;

            let Some(el) = container_ref.get() else {
                return;
            };
            measure();
            let callback =
                wasm_bindgen::closure::Closure::<dyn FnMut(js_sys::Array)>::new(move |_entries: js_sys::Array| measure());
            match web_sys::ResizeObserver::new(callback.as_ref().unchecked_ref()) {
                Ok(resize_observer) => {
                    resize_observer.observe(&el);
                    if let Some(Some((previous, _))) = observer.try_update_value(|o| o.replace((resize_observer, callback))) {
                        previous.disconnect();
                    }
                }
                Err(e) => log::warn!("ResizeObserver unavailable, captions will not rescale: {e:?}"),
            }
        });
        on_cleanup(move || {
            if let Some(Some((resize_observer, _))) = observer.try_update_value(Option::take) {
                resize_observer.disconnect();
            }
        });
    }

    let layout = scaled_layout(width, texts);
    let caption_test_id = test_id.clone();

    view! {
        <div
            class="meme-picture"
            node_ref=container_ref
            role="img"
            aria-label="Meme image with text"
            data-testid=test_id
            style:height=move || format!("{}px", layout.with(container_height))
        >
            <Show
                when=move || !image_error.get()
                fallback=|| view! { <p class="meme-picture__error">"Failed to load image"</p> }
            >
                <img
                    class="meme-picture__image"
                    src=move || picture_url.get()
                    alt=""
                    on:error=move |_| image_error.set(true)
                />
            </Show>
            <Show when=move || width.get() <= 0.0 && !image_error.get()>
                <Loader/>
            </Show>
            {move || {
                let layout = layout.get();
                let font_size = format!("{}px", layout.font_size);
                layout
                    .captions
                    .into_iter()
                    .enumerate()
                    .map(|(index, caption)| {
                        view! {
                            <span
                                class="meme-picture__caption"
                                style:left=format!("{}px", caption.x)
                                style:top=format!("{}px", caption.y)
                                style:font-size=font_size.clone()
                                data-testid=format!("{caption_test_id}-text-{index}")
                            >
                                {caption.content}
                            </span>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
