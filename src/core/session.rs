//! Operator session state and its persistence
//!
//! The session is an explicit object owning its state and a
//! [`SessionStorage`] backend, instead of process-wide state. State changes
//! go through a pure reducer ([`SessionState::reduce`]) so they can be tested
//! without any storage.

use crate::core::error::SessionError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Storage key holding the session token
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Storage key holding the serialized user
pub const USER_DATA_KEY: &str = "userData";

/// Key-value storage for persisted session data
///
/// Swap implementations for tests (in-memory) or persistence (file).
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;
    fn remove(&self, key: &str) -> Result<(), SessionError>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub user: Option<Value>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            is_loading: true,
            error: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    SetLoading(bool),
    LoginStart,
    LoginSuccess(Value),
    LoginFailure(String),
    Logout,
    ClearError,
    /// Shallow-merge fields into the current user
    UpdateUser(Map<String, Value>),
}

impl SessionState {
    /// Apply one action
    pub fn reduce(self, action: SessionAction) -> Self {
        match action {
            SessionAction::SetLoading(is_loading) => Self { is_loading, ..self },
            SessionAction::LoginStart => Self {
                is_loading: true,
                error: None,
                ..self
            },
            SessionAction::LoginSuccess(user) => Self {
                user: Some(user),
                is_authenticated: true,
                is_loading: false,
                error: None,
            },
            SessionAction::LoginFailure(message) => Self {
                user: None,
                is_authenticated: false,
                is_loading: false,
                error: Some(message),
            },
            SessionAction::Logout => Self {
                user: None,
                is_authenticated: false,
                error: None,
                ..self
            },
            SessionAction::ClearError => Self { error: None, ..self },
            SessionAction::UpdateUser(patch) => {
                let mut user = match self.user {
                    Some(Value::Object(map)) => map,
                    _ => Map::new(),
                };
                for (key, value) in patch {
                    user.insert(key, value);
                }
                Self {
                    user: Some(Value::Object(user)),
                    ..self
                }
            }
        }
    }
}

/// An operator session bound to a storage backend
pub struct Session<S: SessionStorage> {
    state: SessionState,
    storage: S,
}

impl<S: SessionStorage> Session<S> {
    pub fn new(storage: S) -> Self {
        Self {
            state: SessionState::default(),
            storage,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated
    }

    pub fn user(&self) -> Option<&Value> {
        self.state.user.as_ref()
    }

    /// Stored session token, if any
    pub fn token(&self) -> Result<Option<String>, SessionError> {
        self.storage.get(AUTH_TOKEN_KEY)
    }

    fn dispatch(&mut self, action: SessionAction) {
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(action);
    }

    /// Restore a previously persisted session
    ///
    /// Corrupt user data clears both stored keys. Loading always ends, even
    /// when the storage backend fails.
    pub fn restore(&mut self) -> Result<(), SessionError> {
        let outcome = self.restore_inner();
        self.dispatch(SessionAction::SetLoading(false));
        outcome
    }

    fn restore_inner(&mut self) -> Result<(), SessionError> {
        let token = self.storage.get(AUTH_TOKEN_KEY)?;
        let user_data = self.storage.get(USER_DATA_KEY)?;

        let (Some(_), Some(user_data)) = (token, user_data) else {
            return Ok(());
        };

        match serde_json::from_str::<Value>(&user_data) {
            Ok(user) => {
                tracing::info!("restored persisted session");
                self.dispatch(SessionAction::LoginSuccess(user));
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "discarding corrupt session data");
                self.storage.remove(AUTH_TOKEN_KEY)?;
                self.storage.remove(USER_DATA_KEY)?;
                Ok(())
            }
        }
    }

    pub fn login_started(&mut self) {
        self.dispatch(SessionAction::LoginStart);
    }

    /// Record a successful login and persist it
    pub fn login_succeeded(&mut self, user: Value, token: &str) -> Result<(), SessionError> {
        self.storage.set(AUTH_TOKEN_KEY, token)?;
        self.storage.set(USER_DATA_KEY, &serde_json::to_string(&user)?)?;
        tracing::info!("operator logged in");
        self.dispatch(SessionAction::LoginSuccess(user));
        Ok(())
    }

    pub fn login_failed(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(error = %message, "login failed");
        self.dispatch(SessionAction::LoginFailure(message));
    }

    /// End the session and forget persisted data
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.storage.remove(AUTH_TOKEN_KEY)?;
        self.storage.remove(USER_DATA_KEY)?;
        tracing::info!("operator logged out");
        self.dispatch(SessionAction::Logout);
        Ok(())
    }

    /// Merge fields into the current user, persisting the result when logged in
    pub fn update_user(&mut self, patch: Map<String, Value>) -> Result<(), SessionError> {
        self.dispatch(SessionAction::UpdateUser(patch));
        if self.state.is_authenticated {
            if let Some(user) = &self.state.user {
                self.storage.set(USER_DATA_KEY, &serde_json::to_string(user)?)?;
            }
        }
        Ok(())
    }

    pub fn clear_error(&mut self) {
        self.dispatch(SessionAction::ClearError);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_initial_state_is_loading() {
        let state = SessionState::default();
        assert!(state.is_loading);
        assert!(!state.is_authenticated);
        assert!(state.user.is_none());
    }

    #[test]
    fn test_login_start_clears_error() {
        let state = SessionState::default()
            .reduce(SessionAction::LoginFailure("bad password".into()))
            .reduce(SessionAction::LoginStart);
        assert!(state.is_loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_login_success_then_logout() {
        let state = SessionState::default()
            .reduce(SessionAction::LoginSuccess(json!({"fullName": "Admin User"})));
        assert!(state.is_authenticated);
        assert!(!state.is_loading);

        let state = state.reduce(SessionAction::Logout);
        assert!(!state.is_authenticated);
        assert!(state.user.is_none());
    }

    #[test]
    fn test_login_failure_records_error() {
        let state = SessionState::default().reduce(SessionAction::LoginFailure("denied".into()));
        assert_eq!(state.error.as_deref(), Some("denied"));
        assert!(!state.is_loading);
        assert!(!state.is_authenticated);

        let state = state.reduce(SessionAction::ClearError);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_update_user_merges_fields() {
        let patch = json!({"preferredLanguage": "hi"});
        let state = SessionState::default()
            .reduce(SessionAction::LoginSuccess(json!({"fullName": "Admin", "preferredLanguage": "en"})))
            .reduce(SessionAction::UpdateUser(patch.as_object().cloned().unwrap_or_default()));
        assert_eq!(
            state.user,
            Some(json!({"fullName": "Admin", "preferredLanguage": "hi"}))
        );
    }

    #[test]
    fn test_update_user_without_user_creates_one() {
        let patch = json!({"role": "admin"});
        let state = SessionState::default()
            .reduce(SessionAction::UpdateUser(patch.as_object().cloned().unwrap_or_default()));
        assert_eq!(state.user, Some(json!({"role": "admin"})));
        assert!(!state.is_authenticated);
    }
}
