use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    User,
    Viewer,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::User => "User",
            Role::Viewer => "Viewer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Inactive,
    Suspended,
}

impl UserStatus {
    /// The status a toggle moves to. Only Active goes to Inactive; anything
    /// else, Suspended included, becomes Active. A toggle never suspends.
    pub const fn toggled(self) -> Self {
        match self {
            UserStatus::Active => UserStatus::Inactive,
            UserStatus::Inactive | UserStatus::Suspended => UserStatus::Active,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
            UserStatus::Suspended => "Suspended",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    /// Display string, e.g. "2 minutes ago".
    pub last_active: String,
    /// Display string, e.g. "2024-01-15".
    pub join_date: String,
}

impl UserRecord {
    /// Case-insensitive substring match against name, email and role.
    pub fn matches(&self, term: &str) -> bool {
        self.matches_lowercase(&term.to_lowercase())
    }

    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        [self.name.as_str(), self.email.as_str(), self.role.as_str()]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }

    /// First letter of each word of the name, for avatar badges.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, email: &str, role: Role) -> UserRecord {
        UserRecord {
            id: UserId::new("1"),
            name: name.to_string(),
            email: email.to_string(),
            role,
            status: UserStatus::Active,
            last_active: "2 minutes ago".to_string(),
            join_date: "2024-01-15".to_string(),
        }
    }

    #[test]
    fn toggle_cycles_active_and_inactive() {
        assert_eq!(UserStatus::Active.toggled(), UserStatus::Inactive);
        assert_eq!(UserStatus::Inactive.toggled(), UserStatus::Active);
        assert_eq!(UserStatus::Active.toggled().toggled(), UserStatus::Active);
    }

    #[test]
    fn toggle_reactivates_suspended() {
        assert_eq!(UserStatus::Suspended.toggled(), UserStatus::Active);
        assert_eq!(UserStatus::Suspended.toggled().toggled(), UserStatus::Inactive);
    }

    #[test]
    fn matches_any_searchable_field_ignoring_case() {
        let user = record("John Doe", "john.doe@company.com", Role::Viewer);

        assert!(user.matches("JOHN"));
        assert!(user.matches("company.com"));
        assert!(user.matches("view"));
        assert!(user.matches(""));
        assert!(!user.matches("admin"));
    }

    #[test]
    fn status_is_not_searchable() {
        let user = record("John Doe", "john.doe@company.com", Role::User);
        assert!(!user.matches("active"));
    }

    #[test]
    fn initials_take_first_letter_of_each_word() {
        let user = record("Sarah Jane Wilson", "sarah@company.com", Role::User);
        assert_eq!(user.initials(), "SJW");
    }

    #[test]
    fn wire_format_uses_camel_case_and_closed_enums() {
        let user = record("John Doe", "john.doe@company.com", Role::Admin);
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["role"], "Admin");
        assert_eq!(json["status"], "Active");
        assert_eq!(json["lastActive"], "2 minutes ago");
        assert_eq!(json["joinDate"], "2024-01-15");

        let mut bad = json.clone();
        bad["role"] = "Owner".into();
        assert!(serde_json::from_value::<UserRecord>(bad).is_err());
    }
}
