use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Application user as the onboarding flow sees it.
///
/// The id is issued by the external auth provider at signup; this record
/// only mirrors the profile fields the questionnaire collects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub has_completed_onboarding: bool,
    pub created_at: DateTime<Utc>,
}

/// Payload for registering a user right after external auth signup.
///
/// The required strings default to empty so a missing field reaches the
/// service's all-fields-required answer instead of a decode rejection.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    /// Raw questionnaire answer; mapped through [`Gender::from_input`].
    #[serde(default)]
    pub gender: Option<String>,
}

/// Self-reported gender, stored as its canonical code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

impl Gender {
    /// Map a questionnaire answer to its canonical variant.
    ///
    /// Accepts the form's own values and the canonical codes; anything else
    /// is `None` and the caller decides how loudly to reject it.
    pub fn from_input(input: &str) -> Option<Self> {
        match input {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "other" => Some(Self::Other),
            "prefer-not-to-say" | "prefer_not_to_say" => Some(Self::PreferNotToSay),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
            Self::PreferNotToSay => "prefer_not_to_say",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_mapping_exhaustive() {
        assert_eq!(Gender::from_input("male"), Some(Gender::Male));
        assert_eq!(Gender::from_input("female"), Some(Gender::Female));
        assert_eq!(Gender::from_input("other"), Some(Gender::Other));
        assert_eq!(
            Gender::from_input("prefer-not-to-say"),
            Some(Gender::PreferNotToSay)
        );
        assert_eq!(
            Gender::from_input("prefer_not_to_say"),
            Some(Gender::PreferNotToSay)
        );
    }

    #[test]
    fn test_gender_unmapped_rejected() {
        assert_eq!(Gender::from_input("Masculino"), None);
        assert_eq!(Gender::from_input("MALE"), None);
        assert_eq!(Gender::from_input(""), None);
    }

    #[test]
    fn test_gender_serializes_as_code() {
        let json = serde_json::to_string(&Gender::PreferNotToSay).unwrap();
        assert_eq!(json, "\"prefer_not_to_say\"");
    }

    #[test]
    fn test_user_serializes_camel_case() {
        let user = User {
            id: "auth0|123".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            birth_date: None,
            gender: Some(Gender::Female),
            has_completed_onboarding: false,
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"firstName\":\"Ada\""));
        assert!(json.contains("\"hasCompletedOnboarding\":false"));
        assert!(json.contains("\"gender\":\"female\""));
    }

    #[test]
    fn test_new_user_accepts_missing_optionals() {
        let json = r#"{
            "userId": "auth0|123",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com"
        }"#;

        let new_user: NewUser = serde_json::from_str(json).unwrap();
        assert_eq!(new_user.user_id, "auth0|123");
        assert_eq!(new_user.birth_date, None);
        assert_eq!(new_user.gender, None);
    }
}
