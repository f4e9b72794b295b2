use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub security: SecurityConfig,
    pub app: AppConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_max_size: u32,
    pub pool_timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SecurityConfig {
    pub jwt_secret: String,
    pub jwt_expiration_seconds: u64,
}

/// Application-level settings that are not tied to one subsystem.
/// `public_origin` is the absolute origin diners reach the service on;
/// it prefixes the `/menu/{id}` URL that goes into QR codes.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub public_origin: String,
}

impl Settings {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .add_source(File::with_name("config/settings").required(true))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        Ok(settings)
    }

    /// Public URL of a restaurant's menu page, the payload every QR encodes.
    pub fn menu_url(&self, restaurant_id: &uuid::Uuid) -> String {
        format!(
            "{}/menu/{}",
            self.app.public_origin.trim_end_matches('/'),
            restaurant_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_url_strips_trailing_slash() {
        let settings = Settings {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                pool_max_size: 1,
                pool_timeout_seconds: 5,
            },
            security: SecurityConfig {
                jwt_secret: "test-secret".to_string(),
                jwt_expiration_seconds: 3600,
            },
            app: AppConfig {
                public_origin: "https://menu.example.com/".to_string(),
            },
        };

        let id = uuid::Uuid::nil();
        assert_eq!(
            settings.menu_url(&id),
            format!("https://menu.example.com/menu/{}", id)
        );
    }
}
