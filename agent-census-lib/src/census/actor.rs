use crate::search::Identity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An automated contributor whose activity is being measured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Actor {
    /// Free-text name used in reports
    pub display_name: String,

    /// Handle used in search queries; may be empty
    #[serde(default)]
    pub username: String,

    /// Alternate identifier used in search queries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// First day of the measurement window
    pub launch_date: NaiveDate,

    /// Primary-author counts for this actor are unreliable and left out of report totals
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub coauthored_only: bool,
}

impl Actor {
    #[must_use]
    pub fn new(display_name: impl Into<String>, username: impl Into<String>, launch_date: NaiveDate) -> Self {
        Self {
            display_name: display_name.into(),
            username: username.into(),
            email: None,
            launch_date,
            coauthored_only: false,
        }
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn with_coauthored_only(mut self) -> Self {
        self.coauthored_only = true;
        self
    }

    /// The identifiers search queries are built from.
    #[must_use]
    pub fn identity(&self) -> Identity<'_> {
        Identity::new(Some(self.username.as_str()), self.email.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_skips_empty_username() {
        let actor = Actor::new("Anonymous", "", NaiveDate::from_ymd_opt(2025, 2, 24).unwrap()).with_email("bot@example.com");
        let identity = actor.identity();
        assert_eq!(identity.handle(), None);
        assert_eq!(identity.email(), Some("bot@example.com"));
    }

    #[test]
    fn test_deserialize_minimal() {
        let actor: Actor = toml::from_str(
            r#"
            display_name = "Jules"
            username = "google-labs-jules[bot]"
            launch_date = "2025-02-24"
            "#,
        )
        .unwrap();

        assert_eq!(actor.display_name, "Jules");
        assert_eq!(actor.email, None);
        assert!(!actor.coauthored_only);
        assert_eq!(actor.launch_date, NaiveDate::from_ymd_opt(2025, 2, 24).unwrap());
    }

    #[test]
    fn test_deserialize_coauthored_only() {
        let actor: Actor = toml::from_str(
            r#"
            display_name = "Copilot"
            username = "Copilot"
            launch_date = "2025-02-24"
            coauthored_only = true
            "#,
        )
        .unwrap();

        assert_eq!(actor, Actor::new("Copilot", "Copilot", NaiveDate::from_ymd_opt(2025, 2, 24).unwrap()).with_coauthored_only());
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let result: Result<Actor, _> = toml::from_str(
            r#"
            display_name = "Jules"
            handle = "jules"
            launch_date = "2025-02-24"
            "#,
        );
        assert!(result.is_err());
    }
}
