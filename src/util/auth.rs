//! Shared auth helpers for pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionHandle` is provided once by `App` and is the only path through
//! which the UI reads or changes the session. Guarded routes apply identical
//! unauthenticated redirect behavior via `install_unauth_redirect`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::error::ApiError;
use crate::state::session::{Session, SessionError, SessionManager};
use crate::util::storage::LocalStorageTokenStore;

/// Reactive view of the process-wide session.
///
/// The manager is the single writer; every transition publishes the whole new
/// `Session` to the signal in one `set`, so readers never see a token paired
/// with another user's id.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    session: RwSignal<Session>,
    manager: StoredValue<SessionManager<LocalStorageTokenStore>>,
}

impl SessionHandle {
    /// Build the handle and restore any persisted session.
    pub fn restore() -> Self {
        let mut manager = SessionManager::new(LocalStorageTokenStore::default());
        let session = manager.restore();
        Self { session: RwSignal::new(session), manager: StoredValue::new(manager) }
    }

    /// Current session, tracked.
    pub fn get(&self) -> Session {
        self.session.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Session::is_authenticated)
    }

    /// Bearer token for a request about to be sent, untracked.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotAuthenticated`] when signed out.
    pub fn token(&self) -> Result<String, ApiError> {
        self.session
            .with_untracked(|s| s.require_token().map(str::to_owned))
            .map_err(ApiError::from)
    }

    /// # Errors
    ///
    /// Returns [`SessionError::MalformedToken`] if `token` cannot be decoded.
    pub fn authenticate(&self, token: &str) -> Result<(), SessionError> {
        let next = self
            .manager
            .try_update_value(|m| m.authenticate(token))
            .unwrap_or(Err(SessionError::NotAuthenticated))?;
        self.session.set(next);
        Ok(())
    }

    pub fn signout(&self) {
        let next = self.manager.try_update_value(SessionManager::signout).unwrap_or_default();
        self.session.set(next);
    }

    /// Drop the session when a call reports it as expired.
    pub fn handle_api_error(&self, err: &ApiError) {
        if err.ends_session() {
            log::warn!("session rejected by server; signing out");
            self.signout();
        }
    }
}

/// Fetch the session handle provided by `App`.
pub fn use_session() -> SessionHandle {
    expect_context::<SessionHandle>()
}

/// Login URL that returns to `path` after signing in.
pub fn login_path_with_redirect(path: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(path.as_bytes()).collect();
    format!("/login?redirect={encoded}")
}

/// Where to go after login. Only same-origin absolute paths are honored.
pub fn safe_redirect_target(raw: Option<&str>) -> String {
    match raw {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_owned(),
        _ => "/".to_owned(),
    }
}

/// Redirect to `/login?redirect=<path>` whenever the session is signed out.
pub fn install_unauth_redirect<F>(session: SessionHandle, path: String, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if !session.is_authenticated() {
            navigate(
                &login_path_with_redirect(&path),
                NavigateOptions { replace: true, ..NavigateOptions::default() },
            );
        }
    });
}
