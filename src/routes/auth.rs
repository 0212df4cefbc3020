use crate::error::ApiError;
use crate::models::{
    AuthenticatedUser, BearerToken, LoginRequest, LoginResponse, LogoutResponse, RegisterResponse,
    SignUpRequest, User,
};
use crate::services::AuthService;
use crate::state::AppState;
use rocket::serde::json::Json;
use rocket::{State, get, post};

#[post("/api/v1/auth/register", data = "<request>")]
pub async fn register(
    request: Json<SignUpRequest>,
    state: &State<AppState>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let user = AuthService::sign_up(&state.database, request.into_inner())?;

    Ok(Json(RegisterResponse { ok: true, user }))
}

#[post("/api/v1/auth/login", data = "<request>")]
pub async fn login(
    request: Json<LoginRequest>,
    state: &State<AppState>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (user, token) = AuthService::sign_in(&state.database, request.into_inner())?;

    Ok(Json(LoginResponse {
        ok: true,
        token,
        user,
    }))
}

// Logout always succeeds, whatever the token resolves to.
#[post("/api/v1/auth/logout")]
pub async fn logout(
    token: BearerToken,
    state: &State<AppState>,
) -> Result<Json<LogoutResponse>, ApiError> {
    AuthService::sign_out(&state.database, &token.0)?;

    Ok(Json(LogoutResponse { ok: true }))
}

#[get("/api/v1/auth/me")]
pub async fn me(user: AuthenticatedUser) -> Json<User> {
    Json(user.user)
}
