use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::UserPayload;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Response de POST /user
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserCreatedResponse {
    pub message: String,
    /// ObjectId gerado pelo MongoDB (hex)
    pub id: String,
    pub user: UserPayload,
}

/// Response de PUT /user/{name}
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserUpdatedResponse {
    pub message: String,
    pub user: UserPayload,
}

/// Response de DELETE /user/{name}
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDeletedResponse {
    pub message: String,
    pub name: String,
}
