//! Top bar: title, create link, and the signed-in user's menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once by `App` above every route, so it reacts to session changes
//! directly instead of being remounted on navigation.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::loader::Loader;
use crate::net::types::User;
use crate::state::session::Session;
use crate::util::auth::use_session;

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();

    view! {
        <header class="header">
            <A href="/" attr:class="header__title">
                "MemeFactory"
            </A>
            <Show when=move || session.is_authenticated()>
                <nav class="header__actions">
                    <A href="/create" attr:class="btn header__create">
                        "+ Create a meme"
                    </A>
                    <span class="header__divider" aria-hidden="true"></span>
                    <UserMenu/>
                </nav>
            </Show>
        </header>
    }
}

/// Menu label shown when the profile could not be fetched.
const FALLBACK_MENU_LABEL: &str = "Account";

/// Label of the user menu button; `None` while the profile is still loading.
fn menu_label(user: Option<&User>, load_failed: bool) -> Option<String> {
    match user {
        Some(user) => Some(user.username.clone()),
        None if load_failed => Some(FALLBACK_MENU_LABEL.to_owned()),
        None => None,
    }
}

/// Avatar + username dropdown with the sign-out action.
#[component]
fn UserMenu() -> impl IntoView {
    let session = use_session();
    let user = RwSignal::new(None::<User>);
    let load_failed = RwSignal::new(false);
    let open = RwSignal::new(false);
    let label = Memo::new(move |_| user.with(|u| menu_label(u.as_ref(), load_failed.get())));

    Effect::new(move || {
        load_failed.set(false);
        let Session::Authenticated { token, user_id } = session.get() else {
            user.set(None);
            return;
        };
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::get_user_by_id(&token, &user_id).await {
                Ok(profile) => user.set(Some(profile)),
                Err(e) => {
                    log::error!("failed to load current user {user_id}: {e}");
                    load_failed.set(true);
                    session.handle_api_error(&e);
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, user_id);
        }
    });

    let on_signout = move |_| {
        open.set(false);
        session.signout();
    };

    view! {
        <Show when=move || label.with(Option::is_some) fallback=|| view! { <Loader/> }>
            <div class="user-menu">
                <button class="user-menu__button" on:click=move |_| open.update(|o| *o = !*o)>
                    <Show when=move || user.with(Option::is_some)>
                        <img
                            class="user-menu__avatar"
                            src=move || user.with(|u| u.as_ref().map(|u| u.picture_url.clone()).unwrap_or_default())
                            alt=""
                        />
                    </Show>
                    <span class="user-menu__name">{move || label.get().unwrap_or_default()}</span>
                    <span class="user-menu__caret">{move || if open.get() { "▴" } else { "▾" }}</span>
                </button>
                <Show when=move || open.get()>
                    <ul class="user-menu__list" role="menu">
                        <li>
                            <button class="user-menu__item" role="menuitem" on:click=on_signout>
                                "Sign out"
                            </button>
                        </li>
                    </ul>
                </Show>
            </div>
        </Show>
    }
}
