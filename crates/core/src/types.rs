//! Identity types shared across the workspace.

use serde::{Deserialize, Serialize};

/// Clinic role attached to an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Doctor,
    Receptionist,
}

impl Role {
    /// Display label for dashboard headers.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Patient => "Patient",
            Role::Doctor => "Doctor",
            Role::Receptionist => "Receptionist",
        }
    }
}

/// Identity of the authenticated user as reported by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        let role: Role = serde_json::from_str("\"doctor\"").unwrap();
        assert_eq!(role, Role::Doctor);
        assert_eq!(serde_json::to_string(&Role::Receptionist).unwrap(), "\"receptionist\"");
    }
}
