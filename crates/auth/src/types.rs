//! Role type shared by the guard and the user records

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stored privilege level of a user record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    /// Default access: role field absent or not recognised
    User,
}

impl Role {
    /// Field on a user record holding the role
    pub const FIELD: &'static str = "role";

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    /// Interpret the stored `role` field of a user record
    pub fn from_stored(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_str) {
            Some("admin") => Role::Admin,
            _ => Role::User,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
