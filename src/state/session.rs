//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every authenticated REST call reads its bearer token from the current
//! `Session`, and route guards read it to decide navigation. The manager owns
//! the only writer path: `restore` at start-up, `authenticate` after login,
//! `signout` on explicit sign-out or a 401.
//!
//! INVARIANTS
//! ==========
//! `Authenticated.user_id` is always the identity decoded from
//! `Authenticated.token`; both are replaced together as one value. The durable
//! store holds a token exactly when the session is authenticated.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::storage::TokenStore;
use crate::util::token::{TokenError, decode_user_id};

/// Who (if anyone) is signed in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Unauthenticated,
    Authenticated {
        token: String,
        user_id: String,
    },
}

impl Session {
    /// Build an authenticated session whose user id is decoded from `token`.
    ///
    /// # Errors
    ///
    /// Returns a [`TokenError`] if `token` carries no decodable identity.
    pub fn from_token(token: &str) -> Result<Self, TokenError> {
        let user_id = decode_user_id(token)?;
        Ok(Self::Authenticated { token: token.to_owned(), user_id })
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Authenticated { token, .. } => Some(token),
            Self::Unauthenticated => None,
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        match self {
            Self::Authenticated { user_id, .. } => Some(user_id),
            Self::Unauthenticated => None,
        }
    }

    /// Guard for operations that need a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotAuthenticated`] when nobody is signed in.
    pub fn require_token(&self) -> Result<&str, SessionError> {
        self.token().ok_or(SessionError::NotAuthenticated)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("user is not authenticated")]
    NotAuthenticated,
    #[error("malformed token: {0}")]
    MalformedToken(#[from] TokenError),
}

/// Owner of the process-wide session and its durable mirror.
#[derive(Debug)]
pub struct SessionManager<S> {
    store: S,
    current: Session,
}

impl<S: TokenStore> SessionManager<S> {
    /// Create a manager in the `Unauthenticated` state. Call [`Self::restore`]
    /// once at start-up to pick up a persisted token.
    pub fn new(store: S) -> Self {
        Self { store, current: Session::Unauthenticated }
    }

    pub fn current(&self) -> &Session {
        &self.current
    }

    /// Rebuild the session from the durable store.
    ///
    /// A persisted token that no longer decodes is discarded and the session
    /// stays signed out; it never fails start-up.
    pub fn restore(&mut self) -> Session {
        self.current = match self.store.load() {
            Some(token) => match Session::from_token(&token) {
                Ok(session) => session,
                Err(e) => {
                    log::warn!("discarding persisted auth token: {e}");
                    self.store.clear();
                    Session::Unauthenticated
                }
            },
            None => Session::Unauthenticated,
        };
        self.current.clone()
    }

    /// Sign in with a freshly issued token, persisting it for later restores.
    /// A second call simply replaces the previous token and identity.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::MalformedToken`] if `token` has no decodable
    /// identity; the current session and the store are left untouched.
    pub fn authenticate(&mut self, token: &str) -> Result<Session, SessionError> {
        let next = Session::from_token(token)?;
        self.store.save(token);
        self.current = next;
        log::info!("signed in as {}", self.current.user_id().unwrap_or_default());
        Ok(self.current.clone())
    }

    /// Forget the session and its persisted token. Safe to call when already
    /// signed out; the store is cleared either way.
    pub fn signout(&mut self) -> Session {
        self.store.clear();
        if self.current.is_authenticated() {
            log::info!("signed out");
        }
        self.current = Session::Unauthenticated;
        self.current.clone()
    }

    /// Bearer token of the current session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotAuthenticated`] when signed out.
    pub fn require_token(&self) -> Result<&str, SessionError> {
        self.current.require_token()
    }
}
