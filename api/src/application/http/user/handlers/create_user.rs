use axum::extract::State;
use nutriscan_core::domain::user::{
    entities::User, ports::UserService, value_objects::CreateUserInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    user::validators::CreateUserRequest,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub data: User,
}

#[utoipa::path(
    post,
    path = "",
    tag = "users",
    summary = "Create a user",
    responses(
        (status = 201, body = UserResponse),
        (status = 409, description = "Email already registered")
    ),
    request_body = CreateUserRequest
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateUserRequest>,
) -> Result<Response<UserResponse>, ApiError> {
    let user = state
        .service
        .create_user(CreateUserInput {
            name: payload.name,
            email: payload.email,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(UserResponse { data: user }))
}
