use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Service API",
        version = "0.1.0",
        description = "CRUD over a single `users` collection in MongoDB.\n\nUsers are addressed by `name`, which is not unique: update and delete affect one matching document."
    ),
    paths(
        // Health
        crate::api::health::index,
        crate::api::health::health_check,

        // Users
        crate::api::users::get_users,
        crate::api::users::create_user,
        crate::api::users::update_user,
        crate::api::users::delete_user,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::models::UserPayload,
            crate::models::UserResponse,
            crate::models::ErrorResponse,
            crate::models::MessageResponse,
            crate::models::UserCreatedResponse,
            crate::models::UserUpdatedResponse,
            crate::models::UserDeletedResponse,
        )
    ),
    tags(
        (name = "Health", description = "Liveness and store connectivity."),
        (name = "Users", description = "Create, list, update and delete users."),
    )
)]
pub struct ApiDoc;
