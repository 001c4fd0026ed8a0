//! Macro-generated test suite for `SessionStorage` contract validation.
//!
//! Covers the raw key-value contract and the session lifecycle driven
//! through [`Session`](civic::core::session::Session) on top of it.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! session_storage_tests!(InMemorySessionStorage::new());
//! ```

/// Generate a full `SessionStorage` conformance test suite.
///
/// `$factory` must evaluate to a fresh, empty storage. It is re-evaluated for
/// each test to ensure isolation.
#[macro_export]
macro_rules! session_storage_tests {
    ($factory:expr) => {
        mod session_storage_contract_tests {
            use super::*;
            use civic::core::session::{AUTH_TOKEN_KEY, USER_DATA_KEY};
            use civic::prelude::*;
            use serde_json::json;

            #[test]
            fn test_get_missing_key() {
                let storage = $factory;
                assert_eq!(storage.get("authToken").expect("get should succeed"), None);
            }

            #[test]
            fn test_set_get_remove() {
                let storage = $factory;
                storage.set("authToken", "token-1").expect("set should succeed");
                storage.set("authToken", "token-2").expect("overwrite should succeed");
                assert_eq!(
                    storage.get("authToken").expect("get should succeed").as_deref(),
                    Some("token-2")
                );

                storage.remove("authToken").expect("remove should succeed");
                assert_eq!(storage.get("authToken").expect("get should succeed"), None);
            }

            #[test]
            fn test_remove_missing_key_is_ok() {
                let storage = $factory;
                assert!(storage.remove("userData").is_ok());
            }

            #[test]
            fn test_keys_are_independent() {
                let storage = $factory;
                storage.set("authToken", "t").expect("set should succeed");
                storage.set("userData", "{}").expect("set should succeed");
                storage.remove("authToken").expect("remove should succeed");
                assert_eq!(
                    storage.get("userData").expect("get should succeed").as_deref(),
                    Some("{}")
                );
            }

            #[test]
            fn test_restore_empty_storage() {
                let mut session = Session::new($factory);
                assert!(session.state().is_loading);

                session.restore().expect("restore should succeed");

                assert!(!session.state().is_loading);
                assert!(!session.is_authenticated());
            }

            #[test]
            fn test_login_persists_and_restores() {
                let storage = $factory;
                storage.set(AUTH_TOKEN_KEY, "abc").expect("set should succeed");
                storage
                    .set(USER_DATA_KEY, r#"{"fullName":"Admin User","role":"admin"}"#)
                    .expect("set should succeed");

                let mut session = Session::new(storage);
                session.restore().expect("restore should succeed");

                assert!(session.is_authenticated());
                assert_eq!(session.user().and_then(|u| u.get("role")), Some(&json!("admin")));
                assert_eq!(session.token().expect("token").as_deref(), Some("abc"));
            }

            #[test]
            fn test_corrupt_user_data_is_cleared() {
                let storage = $factory;
                storage.set(AUTH_TOKEN_KEY, "abc").expect("set should succeed");
                storage.set(USER_DATA_KEY, "{not json").expect("set should succeed");

                let mut session = Session::new(storage);
                session.restore().expect("restore should succeed");

                assert!(!session.is_authenticated());
                assert!(!session.state().is_loading);
                assert_eq!(session.storage().get(AUTH_TOKEN_KEY).expect("get"), None);
                assert_eq!(session.storage().get(USER_DATA_KEY).expect("get"), None);
            }

            #[test]
            fn test_login_update_logout() {
                let mut session = Session::new($factory);
                session.login_started();
                session
                    .login_succeeded(json!({"fullName": "Admin User", "preferredLanguage": "en"}), "tok")
                    .expect("login should succeed");

                let patch = json!({"preferredLanguage": "hi"});
                session
                    .update_user(patch.as_object().cloned().unwrap_or_default())
                    .expect("update should succeed");
                let stored = session
                    .storage()
                    .get(USER_DATA_KEY)
                    .expect("get should succeed")
                    .expect("user data persisted");
                let stored: serde_json::Value = serde_json::from_str(&stored).expect("valid json");
                assert_eq!(stored["preferredLanguage"], json!("hi"));

                session.logout().expect("logout should succeed");
                assert!(!session.is_authenticated());
                assert!(session.user().is_none());
                assert_eq!(session.token().expect("token"), None);
            }

            #[test]
            fn test_login_failure_keeps_storage_empty() {
                let mut session = Session::new($factory);
                session.login_started();
                session.login_failed("Invalid credentials");

                assert_eq!(session.state().error.as_deref(), Some("Invalid credentials"));
                assert_eq!(session.token().expect("token"), None);

                session.clear_error();
                assert!(session.state().error.is_none());
            }
        }
    };
}
