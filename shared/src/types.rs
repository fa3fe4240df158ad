use serde::{Deserialize, Serialize};

// ============================================================================
// Navigation Types
// ============================================================================

/// A single entry in the header link bar or the slide-out drawer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavPage {
    pub label: String,
    pub to: String,
    #[serde(default)]
    pub key: String,
}

impl NavPage {
    pub fn new(label: impl Into<String>, to: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            to: to.into(),
            key: key.into(),
        }
    }

    /// Drawer entries are keyed by their target path rather than by `key`.
    pub fn drawer_key(&self) -> String {
        format!("drawer__{}", self.to)
    }
}

// ============================================================================
// Session Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub account_id: u64,
    #[serde(default)]
    pub personaname: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl User {
    /// Name shown in the account widget, falling back to the account id.
    pub fn display_name(&self) -> String {
        match self.personaname.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.account_id.to_string(),
        }
    }

    pub fn profile_path(&self) -> String {
        format!("/players/{}", self.account_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub user: Option<User>,
}

// ============================================================================
// Announcement Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drawer_key_uses_target_path() {
        let page = NavPage::new("Docs", "/docs", "docs");
        assert_eq!(page.drawer_key(), "drawer__/docs");
    }

    #[test]
    fn test_nav_page_key_defaults_when_missing() {
        let page: NavPage = serde_json::from_str(r#"{"label":"Teams","to":"/teams"}"#).unwrap();
        assert_eq!(page.label, "Teams");
        assert_eq!(page.to, "/teams");
        assert!(page.key.is_empty());
    }

    #[test]
    fn test_user_display_name() {
        let named = User {
            account_id: 42,
            personaname: Some("  Ember  ".to_string()),
            avatar: None,
        };
        assert_eq!(named.display_name(), "Ember");

        let blank = User {
            account_id: 42,
            personaname: Some("   ".to_string()),
            avatar: None,
        };
        assert_eq!(blank.display_name(), "42");

        let anonymous = User {
            account_id: 7,
            personaname: None,
            avatar: None,
        };
        assert_eq!(anonymous.display_name(), "7");
        assert_eq!(anonymous.profile_path(), "/players/7");
    }

    #[test]
    fn test_metadata_without_user() {
        let metadata: Metadata = serde_json::from_str("{}").unwrap();
        assert!(metadata.user.is_none());

        let metadata: Metadata =
            serde_json::from_str(r#"{"user":{"account_id":88,"personaname":"Lina"}}"#).unwrap();
        assert_eq!(metadata.user.map(|u| u.account_id), Some(88));
    }
}
