//! In-process stand-ins for [`UserStore`] used by the handler tests.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use super::UserStore;
use crate::models::{User, UserPayload};
use crate::utils::{AppError, Deadline};

/// Vec-backed store. Name matches pick the first document in insertion order.
#[derive(Default)]
pub struct InMemoryStore {
    users: Mutex<Vec<User>>,
}

impl InMemoryStore {
    pub fn snapshot(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn list_users(&self, _deadline: Deadline) -> Result<Vec<User>, AppError> {
        Ok(self.snapshot())
    }

    async fn insert_user(&self, user: &UserPayload, _deadline: Deadline) -> Result<ObjectId, AppError> {
        let id = ObjectId::new();
        let mut doc = User::new(user);
        doc.id = Some(id);
        self.users.lock().unwrap().push(doc);
        Ok(id)
    }

    async fn update_user_by_name(
        &self,
        name: &str,
        update: &UserPayload,
        _deadline: Deadline,
    ) -> Result<u64, AppError> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.name == name) {
            Some(user) => {
                user.name = update.name.clone();
                user.age = update.age;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_user_by_name(&self, name: &str, _deadline: Deadline) -> Result<u64, AppError> {
        let mut users = self.users.lock().unwrap();
        match users.iter().position(|u| u.name == name) {
            Some(idx) => {
                users.remove(idx);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn ping(&self, _deadline: Deadline) -> Result<(), AppError> {
        Ok(())
    }
}

/// Store whose every call fails with the configured error kind.
pub enum FailingStore {
    Query,
    Decode,
    Timeout,
}

impl FailingStore {
    fn error(&self) -> AppError {
        match self {
            FailingStore::Query => AppError::Query("connection reset by peer".into()),
            FailingStore::Decode => AppError::Decode("invalid type: string, expected i64".into()),
            FailingStore::Timeout => AppError::Timeout(Duration::from_secs(5)),
        }
    }
}

#[async_trait]
impl UserStore for FailingStore {
    async fn list_users(&self, _deadline: Deadline) -> Result<Vec<User>, AppError> {
        Err(self.error())
    }

    async fn insert_user(&self, _user: &UserPayload, _deadline: Deadline) -> Result<ObjectId, AppError> {
        Err(self.error())
    }

    async fn update_user_by_name(
        &self,
        _name: &str,
        _update: &UserPayload,
        _deadline: Deadline,
    ) -> Result<u64, AppError> {
        Err(self.error())
    }

    async fn delete_user_by_name(&self, _name: &str, _deadline: Deadline) -> Result<u64, AppError> {
        Err(self.error())
    }

    async fn ping(&self, _deadline: Deadline) -> Result<(), AppError> {
        Err(self.error())
    }
}
