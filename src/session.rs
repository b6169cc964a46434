//! Session and role state.
//!
//! The session is owned by a [`SessionContext`] that callers pass around
//! explicitly; nothing here is global.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::ValidationError;

/// Fixed identifier assigned to every signed-in user.
pub const DEMO_USER_ID: &str = "user-001";

/// Signed-in identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub id: String,
}

/// What the signed-in user is acting as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Employee raising tickets.
    #[default]
    Requester,
    /// IT staff seeing every ticket and the requester column.
    Operator,
}

impl Role {
    /// The other role.
    pub fn toggled(self) -> Role {
        match self {
            Role::Requester => Role::Operator,
            Role::Operator => Role::Requester,
        }
    }

    /// Label used on the profile card.
    pub fn title(&self) -> &'static str {
        match self {
            Role::Requester => "Employee",
            Role::Operator => "IT Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Requester => f.write_str("requester"),
            Role::Operator => f.write_str("operator"),
        }
    }
}

/// Current identity plus role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Session {
    pub user: Option<User>,
    pub role: Role,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Validate credentials and build a session.
///
/// Any non-empty email and password pair is accepted. The display name is the
/// part of the email before the first `@`.
pub fn login(email: &str, password: &str) -> Result<Session, ValidationError> {
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::EmptyCredentials);
    }

    let name = email.split('@').next().unwrap_or(email).to_string();

    Ok(Session {
        user: Some(User {
            name,
            email: email.to_string(),
            id: DEMO_USER_ID.to_string(),
        }),
        role: Role::default(),
    })
}

/// Read/write access point for the session shared by every page.
#[derive(Debug, Default)]
pub struct SessionContext {
    session: Session,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> &Session {
        &self.session
    }

    pub fn set(&mut self, session: Session) {
        self.session = session;
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user.as_ref()
    }

    pub fn role(&self) -> Role {
        self.session.role
    }

    /// Sign in, replacing any existing session.
    pub fn login(&mut self, email: &str, password: &str) -> Result<(), ValidationError> {
        let session = login(email, password)?;
        if let Some(user) = &session.user {
            info!(user = %user.name, "signed in");
        }
        self.set(session);
        Ok(())
    }

    /// Clear the identity and reset the role. Safe to call when signed out.
    pub fn logout(&mut self) {
        if let Some(user) = self.session.user.take() {
            info!(user = %user.name, "signed out");
        }
        self.session.role = Role::default();
    }

    /// Flip between requester and operator, returning the new role.
    pub fn toggle_role(&mut self) -> Role {
        self.session.role = self.session.role.toggled();
        debug!(role = %self.session.role, "role toggled");
        self.session.role
    }

    /// Whether pages behind authentication may be shown.
    pub fn require_session(&self) -> bool {
        self.session.is_authenticated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_both_fields() {
        assert_eq!(login("", "x"), Err(ValidationError::EmptyCredentials));
        assert_eq!(login("x", ""), Err(ValidationError::EmptyCredentials));
        assert_eq!(login("", ""), Err(ValidationError::EmptyCredentials));
    }

    #[test]
    fn test_login_derives_display_name() {
        let session = login("a@b.com", "pw").unwrap();
        let user = session.user.unwrap();
        assert_eq!(user.name, "a");
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.id, DEMO_USER_ID);
        assert_eq!(session.role, Role::Requester);
    }

    #[test]
    fn test_login_without_at_sign_uses_whole_email() {
        let session = login("helpdesk", "pw").unwrap();
        assert_eq!(session.user.unwrap().name, "helpdesk");
    }

    #[test]
    fn test_role_toggle_is_involution() {
        assert_eq!(Role::Requester.toggled(), Role::Operator);
        assert_eq!(Role::Operator.toggled(), Role::Requester);
        for role in [Role::Requester, Role::Operator] {
            assert_eq!(role.toggled().toggled(), role);
        }
    }

    #[test]
    fn test_context_lifecycle() {
        let mut ctx = SessionContext::new();
        assert!(!ctx.require_session());

        ctx.login("jane.doe@corp.example", "secret").unwrap();
        assert!(ctx.require_session());
        assert_eq!(ctx.user().unwrap().name, "jane.doe");

        assert_eq!(ctx.toggle_role(), Role::Operator);
        ctx.logout();
        assert!(!ctx.require_session());
        assert_eq!(ctx.role(), Role::Requester);

        // Second logout is a no-op.
        ctx.logout();
        assert_eq!(ctx.get(), &Session::default());
    }

    #[test]
    fn test_failed_login_keeps_state() {
        let mut ctx = SessionContext::new();
        ctx.login("ops@corp.example", "pw").unwrap();
        ctx.toggle_role();

        assert!(ctx.login("", "pw").is_err());
        assert_eq!(ctx.user().unwrap().name, "ops");
        assert_eq!(ctx.role(), Role::Operator);
    }
}
