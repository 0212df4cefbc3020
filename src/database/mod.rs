//! Database module providing organized access to all persistence operations
//!
//! Sub-modules:
//! - `connection`: pool configuration, pragmas and embedded migrations
//! - `camps`: camp listings, filters and writes
//! - `item_requests`: item-request listings and writes
//! - `users` / `admins`: account lookup and creation
//! - `profiles`: volunteer/refugee profile dispatch
//! - `sessions`: session token rows
//! - `service`: the unified `DatabaseService` facade

pub mod admins;
pub mod camps;
pub mod connection;
pub mod item_requests;
pub mod profiles;
pub mod service;
pub mod sessions;
pub mod users;

pub use connection::{DbConnection, DbPool, MIGRATIONS};
pub use service::DatabaseService;

pub use admins::AdminOperations;
pub use camps::CampOperations;
pub use item_requests::ItemRequestOperations;
pub use profiles::ProfileOperations;
pub use sessions::SessionOperations;
pub use users::UserOperations;
