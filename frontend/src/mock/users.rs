use std::cell::RefCell;

use gloo_storage::errors::StorageError as LocalStorageError;
use gloo_storage::{LocalStorage, Storage};
use shared::UserRecord;

use crate::error::StorageError;

pub const USERS_STORAGE_KEY: &str = "healthsmart_users";

/// Accounts known to the simulated backend. Usernames match exactly.
pub trait UserRepository {
    fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, StorageError>;

    fn append(&self, user: UserRecord) -> Result<(), StorageError>;
}

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RefCell<Vec<UserRecord>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<UserRecord>) -> Self {
        Self {
            users: RefCell::new(users),
        }
    }

    pub fn users(&self) -> Vec<UserRecord> {
        self.users.borrow().clone()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, StorageError> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    fn append(&self, user: UserRecord) -> Result<(), StorageError> {
        self.users.borrow_mut().push(user);
        Ok(())
    }
}

/// User list kept as one JSON array under a single `localStorage` key.
///
/// Every append rewrites the whole array. Tabs sharing the same origin can
/// overwrite each other's appends.
#[derive(Debug, Clone)]
pub struct LocalStorageUserRepository {
    key: String,
}

impl Default for LocalStorageUserRepository {
    fn default() -> Self {
        Self::new(USERS_STORAGE_KEY)
    }
}

impl LocalStorageUserRepository {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn load(&self) -> Result<Vec<UserRecord>, StorageError> {
        match LocalStorage::get::<Vec<UserRecord>>(&self.key) {
            Ok(users) => Ok(users),
            Err(LocalStorageError::KeyNotFound(_)) => Ok(Vec::new()),
            Err(LocalStorageError::SerdeError(e)) => Err(StorageError::Corrupt(e.to_string())),
            Err(e) => Err(StorageError::Unavailable(e.to_string())),
        }
    }
}

impl UserRepository for LocalStorageUserRepository {
    fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, StorageError> {
        Ok(self.load()?.into_iter().find(|u| u.username == username))
    }

    fn append(&self, user: UserRecord) -> Result<(), StorageError> {
        let mut users = self.load()?;
        users.push(user);
        LocalStorage::set(&self.key, &users).map_err(|e| StorageError::Unavailable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, username: &str) -> UserRecord {
        UserRecord {
            user_id: id,
            username: username.to_string(),
            nickname: username.to_string(),
            email: format!("{}@example.com", username),
        }
    }

    #[test]
    fn test_in_memory_find_is_exact_match() {
        let repo = InMemoryUserRepository::with_users(vec![user(1, "Alice")]);

        assert_eq!(repo.find_by_username("Alice").unwrap(), Some(user(1, "Alice")));
        assert_eq!(repo.find_by_username("alice").unwrap(), None);
        assert_eq!(repo.find_by_username("Ali").unwrap(), None);
    }

    #[test]
    fn test_in_memory_append_keeps_order() {
        let repo = InMemoryUserRepository::new();
        repo.append(user(1, "first")).unwrap();
        repo.append(user(2, "second")).unwrap();

        assert_eq!(repo.users(), vec![user(1, "first"), user(2, "second")]);
        assert_eq!(repo.find_by_username("second").unwrap().map(|u| u.user_id), Some(2));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn user(id: i64, username: &str) -> UserRecord {
        UserRecord {
            user_id: id,
            username: username.to_string(),
            nickname: username.to_string(),
            email: format!("{}@example.com", username),
        }
    }

    #[wasm_bindgen_test]
    fn test_missing_key_reads_as_empty() {
        let repo = LocalStorageUserRepository::new("healthsmart_users_test_empty");
        LocalStorage::delete("healthsmart_users_test_empty");

        assert_eq!(repo.find_by_username("anyone").unwrap(), None);
    }

    #[wasm_bindgen_test]
    fn test_append_rewrites_whole_list() {
        let key = "healthsmart_users_test_append";
        LocalStorage::delete(key);
        let repo = LocalStorageUserRepository::new(key);

        repo.append(user(1, "first")).unwrap();
        repo.append(user(2, "second")).unwrap();

        let stored: Vec<UserRecord> = LocalStorage::get(key).unwrap();
        assert_eq!(stored, vec![user(1, "first"), user(2, "second")]);
        LocalStorage::delete(key);
    }

    #[wasm_bindgen_test]
    fn test_corrupt_list_is_reported() {
        let key = "healthsmart_users_test_corrupt";
        LocalStorage::raw().set_item(key, "{not json").unwrap();
        let repo = LocalStorageUserRepository::new(key);

        assert!(matches!(
            repo.find_by_username("x"),
            Err(StorageError::Corrupt(_))
        ));
        LocalStorage::delete(key);
    }
}
