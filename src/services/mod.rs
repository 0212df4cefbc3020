pub mod auth;

pub use crate::database::DatabaseService;
pub use auth::AuthService;
