//! In-memory user table behind the mock authentication service

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};
use shared::models::{User, DEMO_PASSWORD};

/// A stored account. The password is kept in plain text: this table only
/// stands in for a backend that does not exist yet.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub password: String,
    pub user: User,
}

/// Accounts keyed by lower-cased email, alive for the lifetime of the process
#[derive(Debug, Default)]
pub struct MockUserDatabase {
    users: RwLock<HashMap<String, UserRecord>>,
}

fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}

impl MockUserDatabase {
    /// Empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Table holding only the demo account
    pub fn seeded() -> Self {
        let demo = User::demo();
        let mut users = HashMap::new();
        users.insert(
            normalize(&demo.email),
            UserRecord {
                password: DEMO_PASSWORD.to_string(),
                user: demo,
            },
        );
        Self {
            users: RwLock::new(users),
        }
    }

    pub async fn find_by_email(&self, email: &str) -> Option<UserRecord> {
        self.users.read().await.get(&normalize(email)).cloned()
    }

    pub async fn contains(&self, email: &str) -> bool {
        self.users.read().await.contains_key(&normalize(email))
    }

    /// Insert a new account.
    ///
    /// The existence check and the insert happen under one write guard, so
    /// two registrations racing on the same email cannot both succeed.
    pub async fn insert(&self, password: String, user: User) -> AppResult<User> {
        let key = normalize(&user.email);
        let mut users = self.users.write().await;
        if users.contains_key(&key) {
            return Err(AppError::UserAlreadyExists(key));
        }
        users.insert(
            key,
            UserRecord {
                password,
                user: user.clone(),
            },
        );
        Ok(user)
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::DEMO_EMAIL;

    #[tokio::test]
    async fn test_seeded_lookup_ignores_case() {
        let db = MockUserDatabase::seeded();
        assert_eq!(db.len().await, 1);
        let record = db.find_by_email("Demo@Example.COM").await.unwrap();
        assert_eq!(record.user.email, DEMO_EMAIL);
        assert_eq!(record.password, DEMO_PASSWORD);
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicates() {
        let db = MockUserDatabase::new();
        assert!(db.is_empty().await);

        let mut user = User::demo();
        user.email = "Hari@Example.com".to_string();
        db.insert("pw1234".to_string(), user.clone()).await.unwrap();

        user.email = "hari@example.com".to_string();
        let err = db.insert("other1".to_string(), user).await.unwrap_err();
        assert!(matches!(err, AppError::UserAlreadyExists(email) if email == "hari@example.com"));
        assert_eq!(db.len().await, 1);
    }
}
