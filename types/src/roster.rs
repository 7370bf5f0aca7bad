use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    Error, PAGE_SIZE, PageWindow, Result, RosterPage, UserId, UserRecord, UserStatus, err,
};

/// The full set of user records, with identifiers unique across the set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<UserRecord>", into = "Vec<UserRecord>")]
pub struct Roster {
    users: Vec<UserRecord>,
}

impl Roster {
    pub fn new(users: Vec<UserRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(users.len());
        for user in &users {
            if !seen.insert(&user.id) {
                return Err(err!("duplicate user id '{}'", user.id));
            }
        }

        Ok(Self { users })
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn get(&self, id: &UserId) -> Option<&UserRecord> {
        self.users.iter().find(|u| &u.id == id)
    }

    /// Records matching `term` in roster order. An empty term matches everything.
    pub fn filter(&self, term: &str) -> Vec<&UserRecord> {
        let needle = term.to_lowercase();
        self.users
            .iter()
            .filter(|u| u.matches_lowercase(&needle))
            .collect()
    }

    pub fn page(&self, term: &str, page: usize, page_size: usize) -> RosterPage {
        let filtered = self.filter(term);
        let window = PageWindow::new(page, page_size, filtered.len());
        let users = filtered[window.range()]
            .iter()
            .map(|&u| u.clone())
            .collect();

        RosterPage::new(window, users)
    }

    /// Applies [`UserStatus::toggled`] in place and returns the resulting status.
    /// Returns `None` for an unknown id.
    pub fn toggle_status(&mut self, id: &UserId) -> Option<UserStatus> {
        let user = self.get_mut(id)?;
        user.status = user.status.toggled();
        Some(user.status)
    }

    pub fn set_status(&mut self, id: &UserId, status: UserStatus) -> Option<&UserRecord> {
        let user = self.get_mut(id)?;
        user.status = status;
        Some(user)
    }

    /// Removes the record for good. Removing an unknown id is a no-op.
    pub fn remove(&mut self, id: &UserId) -> Option<UserRecord> {
        let index = self.users.iter().position(|u| &u.id == id)?;
        Some(self.users.remove(index))
    }

    fn get_mut(&mut self, id: &UserId) -> Option<&mut UserRecord> {
        self.users.iter_mut().find(|u| &u.id == id)
    }
}

impl TryFrom<Vec<UserRecord>> for Roster {
    type Error = Error;

    fn try_from(users: Vec<UserRecord>) -> Result<Self> {
        Self::new(users)
    }
}

impl From<Roster> for Vec<UserRecord> {
    fn from(roster: Roster) -> Self {
        roster.users
    }
}

/// Search, page and delete-confirmation state for browsing a [`Roster`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterView {
    search: String,
    page: usize,
    page_size: usize,
    pending_delete: Option<UserId>,
}

impl Default for RosterView {
    fn default() -> Self {
        Self::with_page_size(PAGE_SIZE)
    }
}

impl RosterView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            search: String::new(),
            page: 1,
            page_size: page_size.max(1),
            pending_delete: None,
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// A new term sends the view back to the first page, so a narrower
    /// filter never lands on an empty page.
    pub fn set_search(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term != self.search {
            self.search = term;
            self.page = 1;
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn current_page(&self, roster: &Roster) -> RosterPage {
        roster.page(&self.search, self.page, self.page_size)
    }

    pub fn request_delete(&mut self, id: UserId) {
        self.pending_delete = Some(id);
    }

    pub fn pending_delete(&self) -> Option<&UserId> {
        self.pending_delete.as_ref()
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Removes the record selected by [`request_delete`](Self::request_delete).
    pub fn confirm_delete(&mut self, roster: &mut Roster) -> Option<UserRecord> {
        let id = self.pending_delete.take()?;
        let removed = roster.remove(&id)?;
        self.clamp_page(roster);
        Some(removed)
    }

    /// Pull the page back inside the filtered set after it shrinks.
    pub fn clamp_page(&mut self, roster: &Roster) {
        let total = roster.filter(&self.search).len();
        let last_page = PageWindow::new(1, self.page_size, total).total_pages().max(1);
        self.page = self.page.min(last_page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;

    fn user(id: usize, role: Role) -> UserRecord {
        UserRecord {
            id: UserId::new(id.to_string()),
            name: format!("Person {id}"),
            email: format!("person{id}@company.com"),
            role,
            status: UserStatus::Active,
            last_active: "1 hour ago".to_string(),
            join_date: "2024-02-20".to_string(),
        }
    }

    fn roster(count: usize) -> Roster {
        let roles = [Role::Admin, Role::User, Role::Viewer];
        Roster::new(
            (1..=count)
                .map(|id| user(id, roles[(id - 1) % roles.len()]))
                .collect(),
        )
        .unwrap()
    }

    fn ids(users: &[UserRecord]) -> Vec<&str> {
        users.iter().map(|u| u.id.as_str()).collect()
    }

    #[test]
    fn rejects_duplicate_ids() {
        let error = Roster::new(vec![user(1, Role::Admin), user(1, Role::User)]).unwrap_err();
        assert_eq!(error.to_string(), "duplicate user id '1'");
    }

    #[test]
    fn deserializing_enforces_unique_ids() {
        let json = serde_json::to_value(vec![user(7, Role::Admin), user(7, Role::Viewer)]).unwrap();
        assert!(serde_json::from_value::<Roster>(json).is_err());
    }

    #[test]
    fn filter_splits_roster_by_match() {
        let roster = roster(9);

        for term in ["", "admin", "VIEW", "person1", "@company", "3", "nobody"] {
            let included = roster.filter(term);
            for u in roster.users() {
                let in_result = included.iter().any(|i| i.id == u.id);
                assert_eq!(in_result, u.matches(term), "term {term:?}, user {}", u.id);
            }
        }
    }

    #[test]
    fn admin_search_keeps_only_admins() {
        let roster = roster(9);
        let admins = roster.filter("admin");

        assert_eq!(admins.len(), 3);
        assert!(admins.iter().all(|u| u.role == Role::Admin));
    }

    #[test]
    fn twelve_records_span_two_pages() {
        let roster = roster(12);

        let first = roster.page("", 1, PAGE_SIZE);
        assert_eq!(
            ids(&first.users),
            ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]
        );
        assert_eq!(first.total_pages, 2);
        assert_eq!((first.first_index, first.last_index), (1, 10));

        let second = roster.page("", 2, PAGE_SIZE);
        assert_eq!(ids(&second.users), ["11", "12"]);
        assert_eq!(second.total_pages, 2);
        assert_eq!(second.total_results, 12);
        assert_eq!((second.first_index, second.last_index), (11, 12));
    }

    #[test]
    fn pages_are_taken_from_the_filtered_set() {
        let roster = roster(30);
        let page = roster.page("viewer", 1, PAGE_SIZE);

        assert_eq!(page.total_results, 10);
        assert_eq!(page.total_pages, 1);
        assert!(page.users.iter().all(|u| u.role == Role::Viewer));
    }

    #[test]
    fn toggling_twice_restores_status() {
        let mut roster = roster(2);
        let id = UserId::new("1");

        assert_eq!(roster.toggle_status(&id), Some(UserStatus::Inactive));
        assert_eq!(roster.toggle_status(&id), Some(UserStatus::Active));
        assert_eq!(roster.get(&id).unwrap().status, UserStatus::Active);
    }

    #[test]
    fn toggling_suspended_user_reactivates_it() {
        let mut roster = roster(1);
        let id = UserId::new("1");
        roster.set_status(&id, UserStatus::Suspended);

        assert_eq!(roster.toggle_status(&id), Some(UserStatus::Active));
        assert_eq!(roster.toggle_status(&id), Some(UserStatus::Inactive));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut roster = roster(3);
        let before = roster.clone();
        let missing = UserId::new("99");

        assert_eq!(roster.toggle_status(&missing), None);
        assert!(roster.set_status(&missing, UserStatus::Inactive).is_none());
        assert_eq!(roster.remove(&missing), None);
        assert_eq!(roster, before);
    }

    #[test]
    fn remove_is_permanent() {
        let mut roster = roster(5);
        let id = UserId::new("3");

        let removed = roster.remove(&id).unwrap();
        assert_eq!(removed.id, id);
        assert_eq!(roster.len(), 4);
        assert!(roster.get(&id).is_none());

        assert_eq!(roster.remove(&id), None);
        assert_eq!(roster.len(), 4);
    }

    #[test]
    fn new_search_term_resets_page() {
        let roster = roster(25);
        let mut view = RosterView::new();
        view.set_page(3);
        assert_eq!(view.current_page(&roster).users.len(), 5);

        view.set_search("person2");
        assert_eq!(view.page(), 1);
        assert_eq!(ids(&view.current_page(&roster).users)[0], "2");
    }

    #[test]
    fn same_search_term_keeps_page() {
        let mut view = RosterView::new();
        view.set_search("person");
        view.set_page(2);

        view.set_search("person");
        assert_eq!(view.page(), 2);
    }

    #[test]
    fn deletion_needs_confirmation() {
        let mut roster = roster(3);
        let mut view = RosterView::new();

        assert_eq!(view.confirm_delete(&mut roster), None);

        view.request_delete(UserId::new("2"));
        view.cancel_delete();
        assert_eq!(view.confirm_delete(&mut roster), None);
        assert_eq!(roster.len(), 3);

        view.request_delete(UserId::new("2"));
        assert_eq!(view.pending_delete(), Some(&UserId::new("2")));
        let removed = view.confirm_delete(&mut roster).unwrap();
        assert_eq!(removed.id.as_str(), "2");
        assert_eq!(roster.len(), 2);
        assert_eq!(view.pending_delete(), None);
    }

    #[test]
    fn deleting_the_last_record_on_a_page_steps_back() {
        let mut roster = roster(11);
        let mut view = RosterView::new();
        view.set_page(2);

        view.request_delete(UserId::new("11"));
        view.confirm_delete(&mut roster);

        assert_eq!(view.page(), 1);
        assert_eq!(view.current_page(&roster).users.len(), 10);
    }

    #[test]
    fn dropping_a_record_removed_elsewhere_clamps_page() {
        let mut roster = roster(11);
        let mut view = RosterView::new();
        view.set_page(2);

        roster.remove(&UserId::new("11"));
        view.clamp_page(&roster);

        assert_eq!(view.page(), 1);
        assert_eq!(view.current_page(&roster).total_pages, 1);
    }
}
