//! Login gate for the staff and admin views.
//!
//! Usernames are free-form identities with no registry behind them. The
//! admin view additionally requires the configured admin password.

use crate::error::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Staff,
    Admin,
}

/// A signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub role: Role,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Sign in as `username`. Admin sign-in compares `password` against `admin_password`.
pub fn login(username: &str, role: Role, password: Option<&str>, admin_password: &str) -> Result<Session> {
    let username = username.trim();
    if username.is_empty() {
        return Err(AppError::validation("Username cannot be empty"));
    }

    if role == Role::Admin && password != Some(admin_password) {
        tracing::warn!("Rejected admin login for {}", username);
        return Err(AppError::InvalidAdminPassword);
    }

    tracing::debug!("{} signed in as {:?}", username, role);
    Ok(Session {
        username: username.to_string(),
        role,
    })
}
