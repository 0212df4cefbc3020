use crate::error::ApiError;
use crate::models::{AuthenticatedUser, Profile, UpdateProfileRequest};
use crate::state::AppState;
use rocket::serde::json::Json;
use rocket::{State, get, put};

#[get("/api/v1/profile")]
pub async fn get_profile(
    user: AuthenticatedUser,
    state: &State<AppState>,
) -> Result<Json<Profile>, ApiError> {
    let user_type = user
        .user
        .profile_kind()
        .map_err(|e| ApiError::InternalServerError(format!("Corrupt user record: {e}")))?;

    let profile = state
        .database
        .get_profile(user.user.id, user_type)
        .map_err(|e| ApiError::InternalServerError(format!("Failed to fetch profile: {e}")))?;

    profile
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Profile not found".to_string()))
}

#[put("/api/v1/profile", data = "<request>")]
pub async fn update_profile(
    request: Json<UpdateProfileRequest>,
    user: AuthenticatedUser,
    state: &State<AppState>,
) -> Result<Json<Profile>, ApiError> {
    let user_type = user
        .user
        .profile_kind()
        .map_err(|e| ApiError::InternalServerError(format!("Corrupt user record: {e}")))?;

    let request = request.into_inner();

    if request.is_empty_for(user_type) {
        return Err(ApiError::BadRequest(
            "No profile fields to update".to_string(),
        ));
    }

    let profile = state
        .database
        .update_profile(user.user.id, user_type, &request)
        .map_err(|e| match e {
            diesel::result::Error::NotFound => ApiError::NotFound("Profile not found".to_string()),
            e => ApiError::InternalServerError(format!("Failed to update profile: {e}")),
        })?;

    Ok(Json(profile))
}
