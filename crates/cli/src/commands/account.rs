//! Sign-in and profile commands.

use std::io::Write;

use flora_storefront::services::AuthService;
use flora_storefront::state::AppState;
use secrecy::{ExposeSecret, SecretString};

use super::CommandResult;

/// How to sign in.
#[derive(Debug)]
pub enum SignIn {
    Password { email: String, password: SecretString },
    Provider(String),
}

/// # Errors
///
/// Returns an error for blank credentials or a malformed email.
pub fn sign_in(state: &AppState, how: SignIn, out: &mut impl Write) -> CommandResult {
    let auth = AuthService::new(&state.storage);
    let user = match how {
        SignIn::Password { email, password } => auth.sign_in(&email, password.expose_secret())?,
        SignIn::Provider(provider) => auth.sign_in_with_provider(&provider)?,
    };
    writeln!(out, "Welcome, {} <{}>", user.name, user.email)?;
    Ok(())
}

/// # Errors
///
/// Returns an error if output fails.
pub fn sign_out(state: &AppState, out: &mut impl Write) -> CommandResult {
    AuthService::new(&state.storage).sign_out();
    writeln!(out, "Signed out")?;
    Ok(())
}

/// Profile fields to change; `None` leaves a field as is.
#[derive(Debug, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

impl ProfileUpdate {
    const fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.location.is_none()
    }
}

/// Print the profile, applying `update` first if it changes anything.
///
/// # Errors
///
/// Returns an error for a blank name.
pub fn profile(state: &AppState, update: ProfileUpdate, out: &mut impl Write) -> CommandResult {
    let auth = AuthService::new(&state.storage);
    let Some(mut user) = auth.current_user() else {
        writeln!(out, "Not signed in")?;
        return Ok(());
    };

    if !update.is_empty() {
        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(phone) = update.phone {
            user.phone = Some(phone).filter(|p| !p.trim().is_empty());
        }
        if let Some(location) = update.location {
            user.location = Some(location).filter(|l| !l.trim().is_empty());
        }
        auth.update_profile(&user)?;
    }

    writeln!(out, "{}", user.name)?;
    writeln!(out, "Email:    {}", user.email)?;
    if let Some(phone) = &user.phone {
        writeln!(out, "Phone:    {phone}")?;
    }
    if let Some(location) = &user.location {
        writeln!(out, "Location: {location}")?;
    }
    Ok(())
}
