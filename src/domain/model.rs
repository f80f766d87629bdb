use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GuestCategory {
    Vip,
    Industry,
    Comp,
    Staff,
    Press,
    Sponsor,
}

impl GuestCategory {
    pub const ALL: [GuestCategory; 6] = [
        GuestCategory::Vip,
        GuestCategory::Industry,
        GuestCategory::Comp,
        GuestCategory::Staff,
        GuestCategory::Press,
        GuestCategory::Sponsor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GuestCategory::Vip => "VIP",
            GuestCategory::Industry => "INDUSTRY",
            GuestCategory::Comp => "COMP",
            GuestCategory::Staff => "STAFF",
            GuestCategory::Press => "PRESS",
            GuestCategory::Sponsor => "SPONSOR",
        }
    }
}

impl fmt::Display for GuestCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GuestCategory {
    type Err = String;

    /// Matches the wire spelling exactly (`"VIP"`, not `"vip"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GuestCategory::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown guest category: {}", s))
    }
}

/// Invitation lifecycle stage. Any stage may be set from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GuestStatus {
    #[default]
    Invited,
    Confirmed,
    Declined,
    CheckedIn,
}

impl GuestStatus {
    pub const ALL: [GuestStatus; 4] = [
        GuestStatus::Invited,
        GuestStatus::Confirmed,
        GuestStatus::Declined,
        GuestStatus::CheckedIn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GuestStatus::Invited => "INVITED",
            GuestStatus::Confirmed => "CONFIRMED",
            GuestStatus::Declined => "DECLINED",
            GuestStatus::CheckedIn => "CHECKED_IN",
        }
    }
}

impl fmt::Display for GuestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GuestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GuestStatus::ALL
            .iter()
            .copied()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| format!("unknown guest status: {}", s))
    }
}

/// A validated guest-list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestRecord {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    pub category: GuestCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: GuestStatus,
}

/// Sparse set of validated update fields. Only supplied fields are `Some`.
///
/// `category` stays free text here: updates accept any non-empty category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<GuestStatus>,
}

impl GuestPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.mobile.is_none()
            && self.category.is_none()
            && self.notes.is_none()
            && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_spelling() {
        for category in GuestCategory::ALL {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json, serde_json::Value::String(category.to_string()));
            assert_eq!(category.as_str().parse::<GuestCategory>().unwrap(), category);
        }
        assert!("vip".parse::<GuestCategory>().is_err());
    }

    #[test]
    fn test_checked_in_is_snake_case() {
        let json = serde_json::to_string(&GuestStatus::CheckedIn).unwrap();
        assert_eq!(json, "\"CHECKED_IN\"");
        assert_eq!(
            "CHECKED_IN".parse::<GuestStatus>().unwrap(),
            GuestStatus::CheckedIn
        );
    }

    #[test]
    fn test_status_defaults_to_invited() {
        assert_eq!(GuestStatus::default(), GuestStatus::Invited);

        let record: GuestRecord = serde_json::from_value(serde_json::json!({
            "name": "Jane Doe",
            "email": "jane@x.com",
            "category": "VIP"
        }))
        .unwrap();
        assert_eq!(record.status, GuestStatus::Invited);
    }

    #[test]
    fn test_empty_patch_serializes_to_empty_object() {
        let patch = GuestPatch::default();
        assert!(patch.is_empty());
        assert_eq!(serde_json::to_string(&patch).unwrap(), "{}");
    }
}
