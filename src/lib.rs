pub mod config;
pub mod database;
pub mod error;
pub mod fairings;
pub mod models;
pub mod routes;
pub mod schema;
pub mod services;
pub mod state;

use rocket::Config;
use rocket_cors::{AllowedOrigins, CorsOptions};
use std::sync::Arc;

pub use config::AppConfig;
pub use database::DatabaseService;
pub use fairings::RequestLogger;
pub use services::AuthService;
pub use state::AppState;

pub fn create_rocket() -> rocket::Rocket<rocket::Build> {
    // Load configuration from environment
    let config = AppConfig::from_env();

    // Initialize database service
    let database =
        Arc::new(DatabaseService::new(&config.database_url).expect("Failed to initialize database"));

    // Make sure a fresh deployment has an operator account
    AuthService::ensure_bootstrap_admin(&database, &config)
        .expect("Failed to seed bootstrap admin");

    // Create app state
    let state = AppState { config, database };

    // Configure CORS; the browser frontend is served separately
    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::all())
        .to_cors()
        .expect("Failed to create CORS configuration");

    let rocket_config = Config {
        port: state.config.port,
        address: state.config.host.parse().expect("Invalid host address"),
        ..Config::default()
    };

    rocket::custom(&rocket_config)
        .manage(state)
        .attach(cors)
        .attach(RequestLogger)
        .mount("/", routes::get_routes())
}
