//! User directory read models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Fixed category exclusively assigned to a user at creation.
///
/// Roles partition the user collection exhaustively; the directory relies on
/// that invariant but does not enforce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Patient,
    Doctor,
    Pharmacy,
    Admin,
}

impl UserRole {
    /// Text encoding used on the wire and in the persistence layer.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Patient => "PATIENT",
            Self::Doctor => "DOCTOR",
            Self::Pharmacy => "PHARMACY",
            Self::Admin => "ADMIN",
        }
    }

    /// Parse the text encoding; `None` for unknown values.
    ///
    /// # Examples
    /// ```
    /// use caregrid_backend::domain::UserRole;
    ///
    /// assert_eq!(UserRole::parse("PHARMACY"), Some(UserRole::Pharmacy));
    /// assert_eq!(UserRole::parse("INTERN"), None);
    /// ```
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "PATIENT" => Some(Self::Patient),
            "DOCTOR" => Some(Self::Doctor),
            "PHARMACY" => Some(Self::Pharmacy),
            "ADMIN" => Some(Self::Admin),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-sensitive projection of a user account.
///
/// This is the only shape the directory ever returns; credential columns are
/// not selected anywhere in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: Uuid,
    #[schema(example = "Ram Singh")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(UserRole::Patient, "PATIENT")]
    #[case(UserRole::Doctor, "DOCTOR")]
    #[case(UserRole::Pharmacy, "PHARMACY")]
    #[case(UserRole::Admin, "ADMIN")]
    fn role_text_round_trips(#[case] role: UserRole, #[case] text: &str) {
        assert_eq!(role.as_str(), text);
        assert_eq!(UserRole::parse(text), Some(role));
    }

    #[test]
    fn role_serializes_screaming_case() {
        let json = serde_json::to_value(UserRole::Pharmacy).expect("serialize");
        assert_eq!(json, "PHARMACY");
    }

    #[test]
    fn lowercase_text_is_not_a_role() {
        assert_eq!(UserRole::parse("patient"), None);
    }
}
