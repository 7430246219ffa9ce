use axum::extract::{Path, State};
use nutriscan_core::domain::user::ports::UserService;

use crate::application::http::{
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    user::handlers::create_user::UserResponse,
};

#[utoipa::path(
    get,
    path = "/{user_id}",
    tag = "users",
    summary = "Get a user",
    responses(
        (status = 200, body = UserResponse),
        (status = 404, description = "User not found")
    ),
    params(
        ("user_id" = i64, Path, description = "User id"),
    ),
)]
pub async fn get_user(
    Path(user_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Response<UserResponse>, ApiError> {
    let user = state
        .service
        .get_user(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UserResponse { data: user }))
}
