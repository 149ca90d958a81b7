use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::{options::ClientOptions, Client, Collection};

use crate::config::Settings;
use crate::models::{User, UserPayload};
use crate::utils::{AppError, Deadline, CONNECT_TIMEOUT, SHUTDOWN_TIMEOUT};

#[cfg(test)]
pub mod memory;

/// Operations the HTTP handlers need from the user store.
///
/// Every call carries the [`Deadline`] of the request that issued it.
/// Update and delete match on `name`, which is not unique: at most one
/// store-selected document is affected.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn list_users(&self, deadline: Deadline) -> Result<Vec<User>, AppError>;

    /// Inserts a new document and returns the `_id` assigned by the store
    async fn insert_user(&self, user: &UserPayload, deadline: Deadline) -> Result<ObjectId, AppError>;

    /// Replaces name/age on the first document named `name`; returns the matched count
    async fn update_user_by_name(
        &self,
        name: &str,
        update: &UserPayload,
        deadline: Deadline,
    ) -> Result<u64, AppError>;

    /// Removes the first document named `name`; returns the deleted count
    async fn delete_user_by_name(&self, name: &str, deadline: Deadline) -> Result<u64, AppError>;

    async fn ping(&self, deadline: Deadline) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    users: Collection<User>,
}

impl MongoDB {
    /// Connects and pings, both within the connection deadline.
    pub async fn connect(settings: &Settings) -> Result<Self, AppError> {
        log::info!("🔄 Connecting to MongoDB...");

        let deadline = Deadline::after(CONNECT_TIMEOUT);

        let client_options = deadline
            .run(ClientOptions::parse(&settings.mongo_uri))
            .await?
            .map_err(|e| AppError::Connection(format!("invalid MONGO_URI: {}", e)))?;

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::Connection(e.to_string()))?;

        // Client::with_options é lazy; o ping força a conexão
        deadline
            .run(client.database("admin").run_command(doc! { "ping": 1 }))
            .await?
            .map_err(|e| AppError::Connection(format!("ping failed: {}", e)))?;

        let users = client
            .database(&settings.database)
            .collection::<User>(&settings.collection);

        log::info!(
            "✅ MongoDB connected successfully! ({}.{}, {:?} of connect budget left)",
            settings.database,
            settings.collection,
            deadline.remaining()
        );

        Ok(Self { client, users })
    }

    /// Closes the client, bounded by the shutdown timeout. Never fails the caller.
    pub async fn disconnect(self) {
        match Deadline::after(SHUTDOWN_TIMEOUT).run(self.client.shutdown()).await {
            Ok(()) => log::info!("✅ MongoDB disconnected"),
            Err(e) => log::error!("❌ MongoDB disconnect error: {}", e),
        }
    }
}

#[async_trait]
impl UserStore for MongoDB {
    async fn list_users(&self, deadline: Deadline) -> Result<Vec<User>, AppError> {
        deadline
            .run(async {
                let cursor = self.users.find(doc! {}).await?;
                cursor
                    .try_collect::<Vec<User>>()
                    .await
                    .map_err(|e| AppError::Decode(e.to_string()))
            })
            .await?
    }

    async fn insert_user(&self, user: &UserPayload, deadline: Deadline) -> Result<ObjectId, AppError> {
        let result = deadline.run(self.users.insert_one(User::new(user))).await??;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::Query(format!("unexpected inserted _id: {}", result.inserted_id)))
    }

    async fn update_user_by_name(
        &self,
        name: &str,
        update: &UserPayload,
        deadline: Deadline,
    ) -> Result<u64, AppError> {
        let set: Document = doc! { "$set": { "name": update.name.as_str(), "age": update.age } };

        let result = deadline
            .run(self.users.update_one(doc! { "name": name }, set))
            .await??;

        Ok(result.matched_count)
    }

    async fn delete_user_by_name(&self, name: &str, deadline: Deadline) -> Result<u64, AppError> {
        let result = deadline
            .run(self.users.delete_one(doc! { "name": name }))
            .await??;

        Ok(result.deleted_count)
    }

    async fn ping(&self, deadline: Deadline) -> Result<(), AppError> {
        deadline
            .run(self.client.database("admin").run_command(doc! { "ping": 1 }))
            .await??;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_mongodb_roundtrip() {
        let _ = env_logger::builder().is_test(true).try_init();

        crate::config::load_env_file();
        let mut settings = Settings::load().expect("MONGO_URI must be set");
        settings.collection = format!("users_test_{}", ObjectId::new().to_hex());

        let db = MongoDB::connect(&settings).await.unwrap();
        db.ping(Deadline::for_request()).await.unwrap();

        let payload = UserPayload { name: "Alice".into(), age: 30 };
        let id = db.insert_user(&payload, Deadline::for_request()).await.unwrap();

        let users = db.list_users(Deadline::for_request()).await.unwrap();
        assert!(users.iter().any(|u| u.id == Some(id) && u.name == "Alice" && u.age == 30));

        let older = UserPayload { name: "Alice".into(), age: 31 };
        assert_eq!(db.update_user_by_name("Alice", &older, Deadline::for_request()).await.unwrap(), 1);
        assert_eq!(db.delete_user_by_name("Alice", Deadline::for_request()).await.unwrap(), 1);
        assert_eq!(db.delete_user_by_name("Alice", Deadline::for_request()).await.unwrap(), 0);

        db.users.drop().await.unwrap();
        db.disconnect().await;
    }
}
