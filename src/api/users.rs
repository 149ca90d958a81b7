use actix_web::{web, HttpResponse};

use crate::database::UserStore;
use crate::models::{
    ErrorResponse, UserCreatedResponse, UserDeletedResponse, UserPayload, UserResponse,
    UserUpdatedResponse,
};
use crate::utils::{AppError, Deadline};

fn store_failure(e: &AppError, message: &str) -> HttpResponse {
    log::error!("❌ {}: {}", message, e);
    HttpResponse::InternalServerError().json(ErrorResponse::new(message))
}

fn user_not_found(name: &str) -> HttpResponse {
    log::info!("🔍 No user named '{}'", name);
    HttpResponse::NotFound().json(ErrorResponse::new("User not found"))
}

/// GET /users - Lista todos os usuários
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users, empty array when none", body = [UserResponse]),
        (status = 500, description = "Query or decode failure", body = ErrorResponse)
    )
)]
pub async fn get_users(store: web::Data<dyn UserStore>) -> HttpResponse {
    match store.list_users(Deadline::for_request()).await {
        Ok(users) => {
            let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
            HttpResponse::Ok().json(users)
        }
        Err(e @ AppError::Decode(_)) => store_failure(&e, "Failed to decode users"),
        Err(e) => store_failure(&e, "Failed to fetch users"),
    }
}

/// POST /user - Cria usuário
#[utoipa::path(
    post,
    path = "/user",
    tag = "Users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = UserCreatedResponse),
        (status = 400, description = "Invalid JSON or empty name", body = ErrorResponse),
        (status = 500, description = "Insert failed", body = ErrorResponse)
    )
)]
pub async fn create_user(
    store: web::Data<dyn UserStore>,
    body: web::Json<UserPayload>,
) -> HttpResponse {
    let user = body.into_inner();

    if user.name.is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse::new("Name is required"));
    }

    match store.insert_user(&user, Deadline::for_request()).await {
        Ok(id) => {
            log::info!("✅ User created: {} ({})", user.name, id);
            HttpResponse::Created().json(UserCreatedResponse {
                message: "User created successfully".to_string(),
                id: id.to_hex(),
                user,
            })
        }
        Err(e) => store_failure(&e, "Failed to create user"),
    }
}

/// PUT /user/{name} - Atualiza nome/idade do primeiro usuário com esse nome
#[utoipa::path(
    put,
    path = "/user/{name}",
    tag = "Users",
    params(
        ("name" = String, Path, description = "Current name of the user to update")
    ),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated", body = UserUpdatedResponse),
        (status = 400, description = "Invalid JSON", body = ErrorResponse),
        (status = 404, description = "No user with that name", body = ErrorResponse),
        (status = 500, description = "Update failed", body = ErrorResponse)
    )
)]
pub async fn update_user(
    store: web::Data<dyn UserStore>,
    path: web::Path<String>,
    body: web::Json<UserPayload>,
) -> HttpResponse {
    let name = path.into_inner();
    let update = body.into_inner();

    match store.update_user_by_name(&name, &update, Deadline::for_request()).await {
        Ok(0) => user_not_found(&name),
        Ok(_) => {
            log::info!("✅ User updated: {} -> {}", name, update.name);
            HttpResponse::Ok().json(UserUpdatedResponse {
                message: "User updated successfully".to_string(),
                user: update,
            })
        }
        Err(e) => store_failure(&e, "Failed to update user"),
    }
}

/// DELETE /user/{name} - Remove o primeiro usuário com esse nome
#[utoipa::path(
    delete,
    path = "/user/{name}",
    tag = "Users",
    params(
        ("name" = String, Path, description = "Name of the user to delete")
    ),
    responses(
        (status = 200, description = "User deleted", body = UserDeletedResponse),
        (status = 404, description = "No user with that name", body = ErrorResponse),
        (status = 500, description = "Delete failed", body = ErrorResponse)
    )
)]
pub async fn delete_user(store: web::Data<dyn UserStore>, path: web::Path<String>) -> HttpResponse {
    let name = path.into_inner();

    match store.delete_user_by_name(&name, Deadline::for_request()).await {
        Ok(0) => user_not_found(&name),
        Ok(_) => {
            log::info!("🗑️  User deleted: {}", name);
            HttpResponse::Ok().json(UserDeletedResponse {
                message: "User deleted successfully".to_string(),
                name,
            })
        }
        Err(e) => store_failure(&e, "Failed to delete user"),
    }
}
