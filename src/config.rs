use log::info;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub host: String,
    pub data_dir: String,
    pub database_url: String,
    pub admin_email: String,
    pub admin_password: String,
    pub admin_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "127.0.0.1".to_string(),
            data_dir: "./data".to_string(),
            database_url: "./data/floodaid.db".to_string(),
            admin_email: "admin@floodaid.com".to_string(),
            admin_password: "admin123".to_string(),
            admin_name: "Relief Coordinator".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("FLOODAID_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .unwrap_or(8000);

        let host = env::var("FLOODAID_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let data_dir = env::var("FLOODAID_DATA_DIR").unwrap_or_else(|_| "./data".to_string());

        let database_url =
            env::var("FLOODAID_DATABASE_URL").unwrap_or_else(|_| format!("{data_dir}/floodaid.db"));

        let admin_email = env::var("FLOODAID_ADMIN_EMAIL")
            .unwrap_or_else(|_| "admin@floodaid.com".to_string());

        let admin_password =
            env::var("FLOODAID_ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string());

        let admin_name = env::var("FLOODAID_ADMIN_NAME")
            .unwrap_or_else(|_| "Relief Coordinator".to_string());

        info!("Configuration loaded:");
        info!("  Host: {host}");
        info!("  Port: {port}");
        info!("  Data Directory: {data_dir}");
        info!("  Database URL: {database_url}");
        info!("  Bootstrap Admin: {admin_email}");

        Self {
            port,
            host,
            data_dir,
            database_url,
            admin_email,
            admin_password,
            admin_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.data_dir, "./data");
        assert_eq!(config.database_url, "./data/floodaid.db");
        assert_eq!(config.admin_email, "admin@floodaid.com");
    }

    #[test]
    fn test_config_parsing() {
        assert_eq!("8080".parse::<u16>().unwrap_or(8000), 8080);
        assert_eq!("invalid".parse::<u16>().unwrap_or(8000), 8000);
    }
}
