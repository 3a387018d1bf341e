//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::pages::{create::CreatePage, feed::FeedPage, login::LoginPage};
use crate::util::auth::SessionHandle;

/// Root application component.
///
/// Restores the persisted session before the first render and provides it to
/// every route; the feed and create routes redirect to `/login` on their own.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionHandle::restore();
    provide_context(session);

    view! {
        <Title text="MemeFactory"/>

        <Router>
            <div class="app">
                <Header/>
                <main class="app__content">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("") view=FeedPage/>
                        <Route path=StaticSegment("create") view=CreatePage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
