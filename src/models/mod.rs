pub mod admin;
pub mod auth;
pub mod camp;
pub mod item_request;
pub mod profile;
pub mod session;
pub mod user;

pub use admin::*;
pub use auth::*;
pub use camp::*;
pub use item_request::*;
pub use profile::*;
pub use session::*;
pub use user::*;
