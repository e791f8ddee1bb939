//! Authentication service.
//!
//! Sign-in is mocked: any well-formed email with a non-empty password signs
//! in as the demo customer. The identity lives only in local storage.

use tracing::{info, instrument};

use flora_core::{Email, UserId};

use crate::error::{Result, StorefrontError};
use crate::models::User;
use crate::storage::Storage;

/// Id of the demo customer every sign-in resolves to.
pub const DEMO_USER_ID: &str = "1";
const DEMO_NAME: &str = "Ivan Ivanov";
const DEMO_PHONE: &str = "+79001234567";
const DEMO_LOCATION: &str = "Moscow, Russia";
/// Email used for social (provider) sign-in.
pub const SOCIAL_EMAIL: &str = "user@example.com";

/// Authentication service.
pub struct AuthService<'a> {
    storage: &'a Storage,
}

impl<'a> AuthService<'a> {
    #[must_use]
    pub const fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Sign in with email and password.
    ///
    /// The password is only checked for presence.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::MissingField` if either field is blank.
    /// Returns `StorefrontError::Email` if the email is malformed.
    #[instrument(skip(self, password))]
    pub fn sign_in(&self, email: &str, password: &str) -> Result<User> {
        if email.trim().is_empty() {
            return Err(StorefrontError::MissingField("email"));
        }
        if password.is_empty() {
            return Err(StorefrontError::MissingField("password"));
        }
        let user = demo_user(Email::parse(email)?);
        self.storage.set_user(Some(&user));
        info!(user_id = %user.id, "Signed in");
        Ok(user)
    }

    /// Sign in through a social provider (Google, Apple, ...).
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::MissingField` if `provider` is blank.
    #[instrument(skip(self))]
    pub fn sign_in_with_provider(&self, provider: &str) -> Result<User> {
        if provider.trim().is_empty() {
            return Err(StorefrontError::MissingField("provider"));
        }
        let user = demo_user(Email::parse(SOCIAL_EMAIL)?);
        self.storage.set_user(Some(&user));
        info!(user_id = %user.id, provider, "Signed in with provider");
        Ok(user)
    }

    /// Forget the current user.
    pub fn sign_out(&self) {
        self.storage.set_user(None);
        info!("Signed out");
    }

    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.storage.user()
    }

    /// Replace the stored profile wholesale.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::MissingField` if the name is blank.
    pub fn update_profile(&self, user: &User) -> Result<()> {
        if user.name.trim().is_empty() {
            return Err(StorefrontError::MissingField("name"));
        }
        self.storage.set_user(Some(user));
        Ok(())
    }
}

fn demo_user(email: Email) -> User {
    User {
        id: UserId::new(DEMO_USER_ID),
        name: DEMO_NAME.to_string(),
        email,
        phone: Some(DEMO_PHONE.to_string()),
        location: Some(DEMO_LOCATION.to_string()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_stores_demo_identity() {
        let storage = Storage::in_memory();
        let user = AuthService::new(&storage)
            .sign_in("anna@example.com", "secret")
            .unwrap();
        assert_eq!(user.id.as_str(), DEMO_USER_ID);
        assert_eq!(user.email.as_str(), "anna@example.com");
        assert_eq!(storage.user(), Some(user));
    }

    #[test]
    fn test_sign_in_requires_both_fields() {
        let storage = Storage::in_memory();
        let auth = AuthService::new(&storage);
        assert!(matches!(
            auth.sign_in("", "x"),
            Err(StorefrontError::MissingField("email"))
        ));
        assert!(matches!(
            auth.sign_in("a@b.c", ""),
            Err(StorefrontError::MissingField("password"))
        ));
        assert!(matches!(
            auth.sign_in("not-an-email", "x"),
            Err(StorefrontError::Email(_))
        ));
        assert!(storage.user().is_none());
    }

    #[test]
    fn test_provider_sign_in_and_sign_out() {
        let storage = Storage::in_memory();
        let auth = AuthService::new(&storage);
        let user = auth.sign_in_with_provider("Google").unwrap();
        assert_eq!(user.email.as_str(), SOCIAL_EMAIL);

        auth.sign_out();
        assert!(auth.current_user().is_none());
    }

    #[test]
    fn test_update_profile_overwrites() {
        let storage = Storage::in_memory();
        let auth = AuthService::new(&storage);
        let mut user = auth.sign_in("anna@example.com", "pw").unwrap();
        user.location = Some("Saint Petersburg".to_string());
        auth.update_profile(&user).unwrap();
        assert_eq!(
            storage.user().unwrap().location.as_deref(),
            Some("Saint Petersburg")
        );

        user.name = " ".to_string();
        assert!(auth.update_profile(&user).is_err());
    }
}
