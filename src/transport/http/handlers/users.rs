use crate::domain::error::ApiResult;
use crate::transport::http::types::{AppState, MsgResponse, UserResponse, UsersResponse};
use axum::extract::{Path, State};
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users", body = UsersResponse),
        (status = 500, description = "Internal server error", body = MsgResponse)
    )
)]
pub async fn get_users_handler(State(state): State<AppState>) -> ApiResult<Json<UsersResponse>> {
    let users = state.news.list_users().await?;
    Ok(Json(UsersResponse { users }))
}

#[utoipa::path(
    get,
    path = "/api/users/{username}",
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "User", body = UserResponse),
        (status = 404, description = "user not found", body = MsgResponse)
    )
)]
pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user = state.news.user_by_username(&username).await?;
    Ok(Json(UserResponse { user }))
}
