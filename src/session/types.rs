//! Session and user profile types

use serde::{Deserialize, Deserializer, Serialize};

/// Display name used when the profile carries no full name
pub const FALLBACK_DISPLAY_NAME: &str = "User";

/// User profile as returned by the finance API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_name: String,
}

impl User {
    pub fn new(email: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            id: None,
            email: email.into(),
            full_name: full_name.into(),
        }
    }

    /// Name shown in greetings and the navbar
    pub fn display_name(&self) -> &str {
        let name = self.full_name.trim();
        if name.is_empty() {
            FALLBACK_DISPLAY_NAME
        } else {
            name
        }
    }
}

/// Client-side authentication state.
///
/// A token never exists without its user and vice versa, so both live in the
/// same variant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated { token: String, user: User },
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Session::Authenticated { token, .. } => Some(token),
            Session::Anonymous => None,
        }
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Session::Authenticated { user, .. } => Some(user),
            Session::Anonymous => None,
        }
    }
}

/// Treat an explicit JSON `null` the same as a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_fallback() {
        assert_eq!(User::new("a@b.c", "").display_name(), "User");
        assert_eq!(User::new("a@b.c", "   ").display_name(), "User");
        assert_eq!(User::new("a@b.c", "Ada Lovelace").display_name(), "Ada Lovelace");
    }

    #[test]
    fn test_user_tolerates_missing_and_null_fields() {
        let user: User = serde_json::from_str(r#"{"email":"a@b.c","full_name":null}"#).unwrap();
        assert_eq!(user.email, "a@b.c");
        assert_eq!(user.full_name, "");
        assert_eq!(user.id, None);

        let user: User = serde_json::from_str("{}").unwrap();
        assert_eq!(user, User::default());
    }

    #[test]
    fn test_session_accessors() {
        let session = Session::Authenticated {
            token: "t".to_string(),
            user: User::new("a@b.c", "Ada"),
        };
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("t"));
        assert_eq!(session.user().map(|u| u.email.as_str()), Some("a@b.c"));

        assert!(!Session::Anonymous.is_authenticated());
        assert_eq!(Session::Anonymous.token(), None);
    }
}
