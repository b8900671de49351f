//! Read access to the signed-in user kept in the local store.

use std::sync::Arc;

use crate::domain::auth::{AuthResponse, SessionUser};
use crate::store::{ACCESS_TOKEN_KEY, LocalStore, USER_KEY};

/// Supplies the bearer token attached to backend requests.
pub trait TokenSource: Send + Sync {
    fn token(&self) -> Option<String>;
}

/// Fixed token, mostly for tools and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticToken(pub Option<String>);

impl TokenSource for StaticToken {
    fn token(&self) -> Option<String> {
        self.0.clone()
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    store: Arc<LocalStore>,
}

impl Session {
    pub fn new(store: Arc<LocalStore>) -> Self {
        Self { store }
    }

    pub fn current_user(&self) -> Option<SessionUser> {
        self.store.get(USER_KEY)
    }

    /// A user counts as present only when both the token and the profile exist.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some() && self.current_user().is_some()
    }

    pub fn display_name(&self) -> Option<String> {
        self.current_user().map(|user| user.nome)
    }

    pub fn sign_in(&self, response: &AuthResponse) {
        if response.token.is_empty() {
            return;
        }
        self.store.set(ACCESS_TOKEN_KEY, &response.token);
        self.store.set(USER_KEY, &SessionUser::from(response));
    }

    pub fn sign_out(&self) {
        self.store.remove(ACCESS_TOKEN_KEY);
        self.store.remove(USER_KEY);
    }
}

impl TokenSource for Session {
    fn token(&self) -> Option<String> {
        self.store
            .get::<String>(ACCESS_TOKEN_KEY)
            .filter(|token| !token.is_empty())
    }
}
