//! Login page: username + password exchanged for a JWT.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::util::auth::{safe_redirect_target, use_session};

const MISSING_CREDENTIALS: &str = "Enter both username and password.";

/// Trim the username and require both fields.
fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let query = use_query_map();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    // Covers both a restored session and a fresh successful login.
    Effect::new(move || {
        if session.is_authenticated() {
            let target = query.with(|q| safe_redirect_target(q.get("redirect").as_deref()));
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (username_value, password_value) =
            match validate_login_input(&username.get_untracked(), &password.get_untracked()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(Some(message.to_owned()));
                    return;
                }
            };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&username_value, &password_value).await {
                Ok(resp) => {
                    if let Err(e) = session.authenticate(&resp.jwt) {
                        log::error!("login returned an unusable token: {e}");
                        let err = crate::net::error::ApiError::Decode(e.to_string());
                        error.set(Some(err.login_message().to_owned()));
                    }
                }
                Err(e) => {
                    log::warn!("login failed: {e}");
                    error.set(Some(e.login_message().to_owned()));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (username_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h2>"Login"</h2>
                <p class="login-card__subtitle">"Welcome back! 👋 Please enter your credentials."</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label">
                        "Username"
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Enter your username"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-label">
                        "Password"
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Enter your password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || error.with(Option::is_some)>
                        <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
