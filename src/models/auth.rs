use crate::models::admin::Admin;
use crate::models::profile::UserType;
use crate::models::user::User;
use rocket::serde::{Deserialize, Serialize};
use rocket::{
    State,
    http::Status,
    request::{FromRequest, Outcome, Request},
};

// Authentication request/response models
#[derive(Deserialize, Debug)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub emergency_contact: Option<String>,
    pub user_type: UserType,
}

#[derive(Deserialize, Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Debug)]
pub struct RegisterResponse {
    pub ok: bool,
    pub user: User,
}

#[derive(Serialize, Debug)]
pub struct LoginResponse {
    pub ok: bool,
    pub token: String,
    pub user: User,
}

#[derive(Serialize, Debug)]
pub struct AdminLoginResponse {
    pub ok: bool,
    pub token: String,
    pub admin: Admin,
}

#[derive(Serialize, Debug)]
pub struct LogoutResponse {
    pub ok: bool,
}

fn bearer_token<'r>(request: &'r Request<'_>) -> Option<&'r str> {
    request
        .headers()
        .get_one("Authorization")
        .and_then(|value| value.strip_prefix("Bearer "))
}

/// Raw bearer token, without validation. Used by the logout endpoints, which
/// succeed no matter what the token resolves to.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for BearerToken {
    type Error = crate::error::ApiError;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match bearer_token(request) {
            Some(token) => Outcome::Success(BearerToken(token.to_string())),
            None => Outcome::Error((
                Status::Unauthorized,
                crate::error::ApiError::Unauthorized("Authorization header required".to_string()),
            )),
        }
    }
}

/// Request guard that resolves a user-space session token to a fresh user
/// record. A token whose account has been deleted is revoked on the spot.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AuthenticatedUser {
    type Error = crate::error::ApiError;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        use crate::services::AuthService;
        use crate::state::AppState;

        let state = request.guard::<&State<AppState>>().await.unwrap();

        match bearer_token(request) {
            Some(token) => match AuthService::current_user(&state.database, token) {
                Ok(user) => Outcome::Success(AuthenticatedUser { user }),
                Err(e) => Outcome::Error((Status::Unauthorized, e)),
            },
            None => Outcome::Error((
                Status::Unauthorized,
                crate::error::ApiError::Unauthorized("Authorization header required".to_string()),
            )),
        }
    }
}

/// Admin-space counterpart of [`AuthenticatedUser`]. A user token never
/// passes this guard.
#[derive(Debug, Clone)]
pub struct AuthenticatedAdmin {
    pub admin: Admin,
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AuthenticatedAdmin {
    type Error = crate::error::ApiError;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        use crate::services::AuthService;
        use crate::state::AppState;

        let state = request.guard::<&State<AppState>>().await.unwrap();

        match bearer_token(request) {
            Some(token) => match AuthService::current_admin(&state.database, token) {
                Ok(admin) => Outcome::Success(AuthenticatedAdmin { admin }),
                Err(e) => Outcome::Error((Status::Unauthorized, e)),
            },
            None => Outcome::Error((
                Status::Unauthorized,
                crate::error::ApiError::Unauthorized("Authorization header required".to_string()),
            )),
        }
    }
}
