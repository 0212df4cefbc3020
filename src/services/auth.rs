use crate::config::AppConfig;
use crate::database::DatabaseService;
use crate::error::ApiError;
use crate::models::{
    ActorKind, Admin, LoginRequest, NewAdmin, NewUser, SignUpRequest, User,
};
use log::{debug, info, warn};

pub struct AuthService;

impl AuthService {
    /// Registers a user account plus its type-matching profile row. The
    /// email pre-check is a case-sensitive exact match against the unique
    /// column.
    pub fn sign_up(db: &DatabaseService, request: SignUpRequest) -> Result<User, ApiError> {
        let existing = db
            .find_user_by_email(&request.email)
            .map_err(|e| ApiError::InternalServerError(format!("Database query error: {e}")))?;

        if existing.is_some() {
            return Err(ApiError::Conflict(
                "User with this email already exists".to_string(),
            ));
        }

        let new_user = NewUser::new(
            request.email,
            &request.password,
            request.full_name,
            request.phone,
            request.address,
            request.emergency_contact,
            request.user_type,
        )
        .map_err(|e| ApiError::InternalServerError(format!("Password hashing error: {e}")))?;

        let user = db
            .create_user_with_profile(new_user, request.user_type)
            .map_err(|e| ApiError::InternalServerError(format!("Failed to create user: {e}")))?;

        debug!("User registered: {}", user.email);
        Ok(user)
    }

    /// Verifies user credentials and opens a session. Unknown email and
    /// wrong password are indistinguishable to the caller.
    pub fn sign_in(
        db: &DatabaseService,
        request: LoginRequest,
    ) -> Result<(User, String), ApiError> {
        let user = db
            .find_user_by_email(&request.email)
            .map_err(|e| ApiError::InternalServerError(format!("Database query error: {e}")))?
            .ok_or_else(|| ApiError::Unauthorized("Invalid email or password".to_string()))?;

        let password_valid = user.verify_password(&request.password).map_err(|e| {
            ApiError::InternalServerError(format!("Password verification error: {e}"))
        })?;

        if !password_valid {
            return Err(ApiError::Unauthorized(
                "Invalid email or password".to_string(),
            ));
        }

        let session = db
            .create_session(ActorKind::User, user.id)
            .map_err(|e| ApiError::InternalServerError(format!("Failed to create session: {e}")))?;

        debug!("User signed in: {}", user.email);
        Ok((user, session.token))
    }

    /// Admin sign-in against the separate admin credential space.
    pub fn admin_sign_in(
        db: &DatabaseService,
        request: LoginRequest,
    ) -> Result<(Admin, String), ApiError> {
        let admin = db
            .find_admin_by_email(&request.email)
            .map_err(|e| ApiError::InternalServerError(format!("Database query error: {e}")))?
            .ok_or_else(|| ApiError::Unauthorized("Invalid admin credentials".to_string()))?;

        let password_valid = admin.verify_password(&request.password).map_err(|e| {
            ApiError::InternalServerError(format!("Password verification error: {e}"))
        })?;

        if !password_valid {
            return Err(ApiError::Unauthorized(
                "Invalid admin credentials".to_string(),
            ));
        }

        let session = db
            .create_session(ActorKind::Admin, admin.id)
            .map_err(|e| ApiError::InternalServerError(format!("Failed to create session: {e}")))?;

        debug!("Admin signed in: {}", admin.email);
        Ok((admin, session.token))
    }

    /// Resolves a user session token to the current account record. The
    /// record is re-fetched from the store on every call; if the account is
    /// gone the session is revoked before reporting failure.
    pub fn current_user(db: &DatabaseService, token: &str) -> Result<User, ApiError> {
        let session = db
            .find_active_session(token, ActorKind::User)
            .map_err(|e| ApiError::InternalServerError(format!("Database query error: {e}")))?
            .ok_or_else(|| ApiError::Unauthorized("Invalid or expired session".to_string()))?;

        if session.is_expired(chrono::Utc::now().naive_utc()) {
            return Err(ApiError::Unauthorized("Session expired".to_string()));
        }

        let user = db
            .find_user_by_id(session.actor_id)
            .map_err(|e| ApiError::InternalServerError(format!("Failed to retrieve user: {e}")))?;

        match user {
            Some(user) => Ok(user),
            None => {
                // Account revoked out from under the session.
                if let Err(e) = db.revoke_sessions_for_actor(ActorKind::User, session.actor_id) {
                    warn!("Failed to revoke sessions for deleted user: {e}");
                }
                Err(ApiError::Unauthorized(
                    "Account no longer exists".to_string(),
                ))
            }
        }
    }

    /// Admin counterpart of [`Self::current_user`].
    pub fn current_admin(db: &DatabaseService, token: &str) -> Result<Admin, ApiError> {
        let session = db
            .find_active_session(token, ActorKind::Admin)
            .map_err(|e| ApiError::InternalServerError(format!("Database query error: {e}")))?
            .ok_or_else(|| ApiError::Unauthorized("Invalid or expired session".to_string()))?;

        if session.is_expired(chrono::Utc::now().naive_utc()) {
            return Err(ApiError::Unauthorized("Session expired".to_string()));
        }

        let admin = db
            .find_admin_by_id(session.actor_id)
            .map_err(|e| ApiError::InternalServerError(format!("Failed to retrieve admin: {e}")))?;

        match admin {
            Some(admin) => Ok(admin),
            None => {
                if let Err(e) = db.revoke_sessions_for_actor(ActorKind::Admin, session.actor_id) {
                    warn!("Failed to revoke sessions for deleted admin: {e}");
                }
                Err(ApiError::Unauthorized(
                    "Account no longer exists".to_string(),
                ))
            }
        }
    }

    /// Revokes a token unconditionally. Signing out with an unknown or
    /// already-revoked token still succeeds.
    pub fn sign_out(db: &DatabaseService, token: &str) -> Result<(), ApiError> {
        db.revoke_session(token)
            .map_err(|e| ApiError::InternalServerError(format!("Failed to revoke session: {e}")))?;

        debug!("Session revoked");
        Ok(())
    }

    /// Seeds the configured bootstrap admin when the admins table is empty,
    /// so a fresh deployment has an operator account.
    pub fn ensure_bootstrap_admin(
        db: &DatabaseService,
        config: &AppConfig,
    ) -> Result<(), ApiError> {
        let count = db
            .count_admins()
            .map_err(|e| ApiError::InternalServerError(format!("Database query error: {e}")))?;

        if count > 0 {
            return Ok(());
        }

        let new_admin = NewAdmin::new(
            config.admin_email.clone(),
            &config.admin_password,
            config.admin_name.clone(),
        )
        .map_err(|e| ApiError::InternalServerError(format!("Password hashing error: {e}")))?;

        let admin = db
            .create_admin(new_admin)
            .map_err(|e| ApiError::InternalServerError(format!("Failed to create admin: {e}")))?;

        info!("Seeded bootstrap admin account: {}", admin.email);
        Ok(())
    }
}
