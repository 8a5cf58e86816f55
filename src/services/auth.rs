//! Session management service.
//!
//! Mock authentication: any non-empty credential pair is accepted and bound
//! to a fixed admin identity. The session (token + serialized identity) is
//! persisted in the key-value store and rehydrated at startup, so a restart
//! keeps the operator logged in.

use std::sync::{Arc, RwLock};

use rand::{distributions::Alphanumeric, Rng};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{LoginRequest, LoginResponse, SessionUser},
    storage::KvStore,
};

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

#[derive(Debug, Clone)]
struct Session {
    token: String,
    user: SessionUser,
}

#[derive(Clone)]
pub struct AuthService {
    kv: KvStore,
    session: Arc<RwLock<Option<Session>>>,
}

impl AuthService {
    /// Create the service and restore a persisted session if one exists
    pub fn new(kv: KvStore) -> Self {
        let service = Self {
            kv,
            session: Arc::new(RwLock::new(None)),
        };
        service.restore();
        service
    }

    /// Rehydrate the session from the key-value store. Both keys must be
    /// present and the identity must parse; otherwise the session stays
    /// logged out.
    fn restore(&self) {
        let (token, user_json) = match (self.kv.get(TOKEN_KEY), self.kv.get(USER_KEY)) {
            (Some(token), Some(user)) => (token, user),
            _ => return,
        };

        match serde_json::from_str::<SessionUser>(&user_json) {
            Ok(user) => {
                tracing::info!("Session restored for {}", user.email);
                *self.session.write().expect("session lock poisoned") = Some(Session { token, user });
            }
            Err(e) => {
                tracing::warn!("Discarding unreadable persisted session: {}", e);
            }
        }
    }

    /// Log in. Credentials are accepted unconditionally as long as both
    /// fields are non-empty; the identity is the fixed admin role.
    pub fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        request.validate()?;

        let user = SessionUser {
            id: 1,
            name: "Library Admin".to_string(),
            email: request.email,
            role: "admin".to_string(),
        };

        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(48)
            .map(char::from)
            .collect();

        let user_json = serde_json::to_string(&user)
            .map_err(|e| AppError::Internal(format!("serialize session user: {}", e)))?;
        self.kv.set(TOKEN_KEY, &token)?;
        self.kv.set(USER_KEY, &user_json)?;

        *self.session.write().expect("session lock poisoned") = Some(Session {
            token: token.clone(),
            user: user.clone(),
        });

        tracing::info!("Session opened for {}", user.email);

        Ok(LoginResponse {
            user,
            token,
            token_type: "Bearer".to_string(),
        })
    }

    /// Log out: clear the in-memory session and both persisted keys
    pub fn logout(&self) -> AppResult<()> {
        *self.session.write().expect("session lock poisoned") = None;
        self.kv.remove(TOKEN_KEY)?;
        self.kv.remove(USER_KEY)?;
        tracing::info!("Session closed");
        Ok(())
    }

    /// Resolve a presented bearer token to the session identity
    pub fn authenticate(&self, token: &str) -> AppResult<SessionUser> {
        let session = self.session.read().expect("session lock poisoned");
        match session.as_ref() {
            Some(s) if s.token == token => Ok(s.user.clone()),
            _ => Err(AppError::Authentication("Invalid or expired token".to_string())),
        }
    }

    /// The current identity, if any
    pub fn current(&self) -> Option<SessionUser> {
        self.session
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .map(|s| s.user.clone())
    }
}
