use crate::error::ApiError;
use crate::models::{
    Admin, AdminLoginResponse, AuthenticatedAdmin, BearerToken, LoginRequest, LogoutResponse,
};
use crate::services::AuthService;
use crate::state::AppState;
use rocket::serde::json::Json;
use rocket::{State, get, post};

#[post("/api/v1/admin/login", data = "<request>")]
pub async fn admin_login(
    request: Json<LoginRequest>,
    state: &State<AppState>,
) -> Result<Json<AdminLoginResponse>, ApiError> {
    let (admin, token) = AuthService::admin_sign_in(&state.database, request.into_inner())?;

    Ok(Json(AdminLoginResponse {
        ok: true,
        token,
        admin,
    }))
}

#[post("/api/v1/admin/logout")]
pub async fn admin_logout(
    token: BearerToken,
    state: &State<AppState>,
) -> Result<Json<LogoutResponse>, ApiError> {
    AuthService::sign_out(&state.database, &token.0)?;

    Ok(Json(LogoutResponse { ok: true }))
}

#[get("/api/v1/admin/me")]
pub async fn admin_me(admin: AuthenticatedAdmin) -> Json<Admin> {
    Json(admin.admin)
}
