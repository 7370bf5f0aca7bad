use std::{path::Path, sync::Arc};

use eyre::WrapErr;
use tokio::sync::RwLock;
use types::{PAGE_SIZE, Result, Role, Roster, RosterPage, UserId, UserRecord, UserStatus};

/// Shared, in-memory owner of the user roster. Nothing is persisted; a
/// restart goes back to the seed.
#[derive(Clone, Debug, Default)]
pub struct RosterStore {
    roster: Arc<RwLock<Roster>>,
}

impl RosterStore {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster: Arc::new(RwLock::new(roster)),
        }
    }

    pub fn seeded() -> Result<Self> {
        Ok(Self::new(Roster::new(default_users())?))
    }

    pub async fn from_seed_file(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path)
            .await
            .wrap_err_with(|| format!("failed to read roster seed {}", path.display()))?;
        let roster: Roster = serde_json::from_slice(&bytes)
            .wrap_err_with(|| format!("invalid roster seed {}", path.display()))?;

        Ok(Self::new(roster))
    }

    pub async fn len(&self) -> usize {
        self.roster.read().await.len()
    }

    pub async fn snapshot(&self) -> Roster {
        self.roster.read().await.clone()
    }

    pub async fn page(&self, search: &str, page: usize) -> RosterPage {
        self.roster.read().await.page(search, page, PAGE_SIZE)
    }

    pub async fn toggle_status(&self, id: &UserId) -> Option<UserRecord> {
        let mut roster = self.roster.write().await;
        let Some(status) = roster.toggle_status(id) else {
            tracing::debug!(%id, "toggle for unknown user ignored");
            return None;
        };

        tracing::info!(%id, %status, "user status toggled");
        roster.get(id).cloned()
    }

    pub async fn set_status(&self, id: &UserId, status: UserStatus) -> Option<UserRecord> {
        let mut roster = self.roster.write().await;
        let user = roster.set_status(id, status).cloned();

        match &user {
            Some(_) => tracing::info!(%id, %status, "user status set"),
            None => tracing::debug!(%id, "status update for unknown user ignored"),
        }
        user
    }

    pub async fn delete(&self, id: &UserId) -> Option<UserRecord> {
        let removed = self.roster.write().await.remove(id);

        match &removed {
            Some(user) => tracing::info!(%id, email = %user.email, "user deleted"),
            None => tracing::debug!(%id, "delete for unknown user ignored"),
        }
        removed
    }
}

fn default_users() -> Vec<UserRecord> {
    vec![
        user("1", "John Doe", Role::Admin, UserStatus::Active)
            .last_seen("2 minutes ago", "2024-01-15"),
        user("2", "Sarah Wilson", Role::User, UserStatus::Active)
            .last_seen("1 hour ago", "2024-02-20"),
        user("3", "Mike Johnson", Role::Viewer, UserStatus::Inactive)
            .last_seen("3 days ago", "2024-03-10"),
        user("4", "Emily Chen", Role::User, UserStatus::Active)
            .last_seen("30 minutes ago", "2024-01-08"),
        user("5", "David Brown", Role::Admin, UserStatus::Suspended)
            .last_seen("1 week ago", "2023-12-05"),
    ]
}

/// Seed record with an email derived from the name, e.g. `john.doe@company.com`.
fn user(id: &str, name: &str, role: Role, status: UserStatus) -> SeedUser {
    let email = format!("{}@company.com", name.to_lowercase().replace(' ', "."));
    SeedUser(UserRecord {
        id: UserId::new(id),
        name: name.to_string(),
        email,
        role,
        status,
        last_active: String::new(),
        join_date: String::new(),
    })
}

struct SeedUser(UserRecord);

impl SeedUser {
    fn last_seen(mut self, last_active: &str, join_date: &str) -> UserRecord {
        self.0.last_active = last_active.to_string();
        self.0.join_date = join_date.to_string();
        self.0
    }
}
