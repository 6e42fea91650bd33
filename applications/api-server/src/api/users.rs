/// Users API routes
use crate::{
    error::{ApiError, Result},
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use roster_core::types::{NewUser, User, UserId};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/users`
///
/// Fields are optional here so that absence is reported as a validation
/// error rather than a deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl TryFrom<CreateUserRequest> for NewUser {
    type Error = ApiError;

    fn try_from(req: CreateUserRequest) -> Result<Self> {
        Ok(NewUser::from_parts(req.name, req.email)?)
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteUserResponse {
    pub message: &'static str,
    pub user: User,
}

/// GET /api/users
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<Vec<User>>> {
    tracing::info!("Fetching all users");

    let users = app_state.store.list_users().await?;
    tracing::info!("Found {} users", users.len());

    Ok(Json(users))
}

/// POST /api/users
pub async fn create_user(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<User>)> {
    let req = match payload {
        Ok(Json(req)) => req,
        // No JSON body at all carries no fields
        Err(JsonRejection::MissingJsonContentType(_)) => CreateUserRequest::default(),
        Err(rejection) => return Err(ApiError::InvalidBody(rejection.body_text())),
    };

    let new_user = NewUser::try_from(req)?;
    tracing::info!(name = %new_user.name(), email = %new_user.email(), "Creating new user");

    let user = app_state.store.create_user(new_user).await.map_err(|e| {
        tracing::warn!("Error creating user: {}", e);
        ApiError::from(e)
    })?;
    tracing::info!(id = user.id, "User created successfully");

    Ok((StatusCode::CREATED, Json(user)))
}

/// DELETE /api/users/:id
pub async fn delete_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<DeleteUserResponse>> {
    tracing::info!("Deleting user: {}", id);

    // A non-numeric id cannot match any row
    let user_id: UserId = id
        .parse()
        .map_err(|_| ApiError::NotFound("User".to_string()))?;

    let user = app_state
        .store
        .delete_user(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User".to_string()))?;
    tracing::info!(id = user.id, "User deleted successfully");

    Ok(Json(DeleteUserResponse {
        message: "User deleted successfully",
        user,
    }))
}
