//! Closed enum vocabularies shared between the API and the database.
//!
//! Each enum maps to a PostgreSQL enum type (created in the initial
//! migration) and to a fixed serde representation on the wire. Serde
//! rejects any value outside the set, so malformed payloads fail
//! deserialization instead of being coerced.

use serde::{Deserialize, Serialize};

/// Backoffice user role. Superadmins may manage other users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum Role {
    Admin,
    Superadmin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Superadmin => "superadmin",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "superadmin" => Ok(Role::Superadmin),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// CEFR language-proficiency tier tagging a session's difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "cefr_level", rename_all = "UPPERCASE")]
pub enum CefrLevel {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

/// Broad classification of a session's purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "session_type", rename_all = "lowercase")]
pub enum SessionType {
    Lesson,
    Practice,
    Review,
    Assessment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cefr_level_rejects_values_outside_the_set() {
        assert!(serde_json::from_str::<CefrLevel>("\"B1\"").is_ok());
        assert!(serde_json::from_str::<CefrLevel>("\"D1\"").is_err());
        assert!(serde_json::from_str::<CefrLevel>("\"b1\"").is_err());
    }

    #[test]
    fn role_round_trips_through_str() {
        assert_eq!("superadmin".parse::<Role>().unwrap(), Role::Superadmin);
        assert_eq!(Role::Admin.as_str(), "admin");
        assert!("root".parse::<Role>().is_err());
    }
}
