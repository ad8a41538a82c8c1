//! User role and the login / client profile forms.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Which side of the marketplace the signed-in user is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UserRole {
    #[default]
    Client,
    Worker,
}

impl UserRole {
    pub fn name(&self) -> &'static str {
        match self {
            UserRole::Client => "client",
            UserRole::Worker => "worker",
        }
    }
}

/// Login form state.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub error: Option<String>,
}

impl LoginForm {
    /// Both fields must be filled in.
    pub fn validate(&self) -> Result<()> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(AppError::validation("Please fill in all fields"));
        }
        Ok(())
    }

    /// Clear credentials after a successful login, keeping the role choice.
    pub fn reset(&mut self) {
        *self = Self {
            role: self.role,
            ..Self::default()
        };
    }
}

/// Editable client profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
}

impl ClientProfile {
    pub fn validate(&self) -> Result<()> {
        if self.full_name.trim().is_empty() {
            return Err(AppError::validation("Full name cannot be empty"));
        }
        if !self.email.contains('@') {
            return Err(AppError::validation("Email address is not valid"));
        }
        Ok(())
    }
}

impl Default for ClientProfile {
    fn default() -> Self {
        Self {
            full_name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            phone: "+2164567890".to_string(),
            location: "New York, USA".to_string(),
            bio: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_both_fields() {
        let mut form = LoginForm::default();
        assert!(form.validate().is_err());

        form.email = "user@example.com".to_string();
        assert!(form.validate().is_err());

        form.password = "secret".to_string();
        assert!(form.validate().is_ok());

        form.email = "   ".to_string();
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_login_reset_keeps_role() {
        let mut form = LoginForm {
            email: "a@b.c".to_string(),
            password: "x".to_string(),
            role: UserRole::Worker,
            error: Some("old".to_string()),
        };
        form.reset();
        assert!(form.email.is_empty());
        assert!(form.error.is_none());
        assert_eq!(form.role, UserRole::Worker);
    }

    #[test]
    fn test_default_client_profile_validates() {
        assert!(ClientProfile::default().validate().is_ok());
    }

    #[test]
    fn test_client_profile_rejects_bad_input() {
        let mut profile = ClientProfile::default();
        profile.full_name = " ".to_string();
        assert!(profile.validate().is_err());

        let mut profile = ClientProfile::default();
        profile.email = "not-an-email".to_string();
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_role_default_is_client() {
        assert_eq!(UserRole::default(), UserRole::Client);
        assert_eq!(UserRole::Worker.name(), "worker");
    }
}
