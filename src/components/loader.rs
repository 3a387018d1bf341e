//! Inline loading indicator.

use leptos::prelude::*;

#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="loader" role="status" aria-label="Loading">
            <span class="loader__spinner"></span>
        </div>
    }
}
