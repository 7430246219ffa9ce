use super::handlers::{
    create_user::{__path_create_user, create_user},
    get_user::{__path_get_user, get_user},
};
use crate::application::http::{
    scan::handlers::get_user_scans::{__path_get_user_scans, get_user_scans},
    server::app_state::AppState,
};
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(create_user, get_user, get_user_scans))]
pub struct UserApiDoc;

pub fn user_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/users", state.args.server.root_path),
            post(create_user),
        )
        .route(
            &format!("{}/users/{{user_id}}", state.args.server.root_path),
            get(get_user),
        )
        .route(
            &format!("{}/users/{{user_id}}/scans", state.args.server.root_path),
            get(get_user_scans),
        )
}
