//! Credential storage and validation
//!
//! Defines the fixed role set and the credential store used at login. The
//! store is an injected abstraction so the fixed in-process set can later be
//! replaced without touching the handlers.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::AuthError;

/// An authenticated identity. `Admin` grants mutation rights; `Pro` is
/// read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Pro,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Pro => "pro",
        }
    }

    /// Whether this role is permitted to perform mutations.
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "pro" => Ok(Role::Pro),
            _ => Err(AuthError::UnknownRole(s.to_string())),
        }
    }
}

/// Verifies a (role, password) pair against some credential backend.
pub trait CredentialStore: Send + Sync {
    fn verify(&self, role: Role, password: &str) -> bool;
}

/// Static credential store - in production this would be a proper database.
pub struct StaticCredentials {
    credentials: HashMap<Role, &'static str>,
}

impl Default for StaticCredentials {
    fn default() -> Self {
        let mut credentials = HashMap::new();
        credentials.insert(Role::Admin, "admin123");
        credentials.insert(Role::Pro, "pro123");
        Self { credentials }
    }
}

impl CredentialStore for StaticCredentials {
    fn verify(&self, role: Role, password: &str) -> bool {
        self.credentials
            .get(&role)
            .is_some_and(|stored| *stored == password)
    }
}
