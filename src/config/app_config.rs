use crate::error::{AppError, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub s3: S3Config,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size: usize,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub name: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct S3Config {
    pub bucket: String,
    pub region: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .map_err(|_| AppError::ConfigError("Invalid PORT value".to_string()))?,
                max_body_size: env::var("MAX_BODY_SIZE")
                    .unwrap_or_else(|_| "10485760".to_string())
                    .parse()
                    .map_err(|_| AppError::ConfigError("Invalid MAX_BODY_SIZE value".to_string()))?,
            },
            database: DatabaseConfig {
                user: env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string()),
                password: env::var("DB_PASSWORD").unwrap_or_else(|_| "postgres".to_string()),
                // 'db' is the docker compose service name
                host: env::var("DB_HOST").unwrap_or_else(|_| "db".to_string()),
                name: env::var("DB_NAME").unwrap_or_else(|_| "marketdb".to_string()),
                max_connections: env::var("DB_MAX_CONNECTIONS")
                    .unwrap_or_else(|_| "20".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::ConfigError("Invalid DB_MAX_CONNECTIONS value".to_string())
                    })?,
            },
            s3: S3Config {
                bucket: env::var("AWS_BUCKET_NAME").unwrap_or_else(|_| "my-test-bucket".to_string()),
                region: env::var("AWS_REGION").unwrap_or_else(|_| "eu-central-1".to_string()),
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}/{}",
            self.user, self.password, self.host, self.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_url_includes_all_parts() {
        let config = DatabaseConfig {
            user: "postgres".to_string(),
            password: "secret".to_string(),
            host: "db".to_string(),
            name: "marketdb".to_string(),
            max_connections: 20,
        };

        assert_eq!(config.url(), "postgres://postgres:secret@db/marketdb");
    }

    #[test]
    fn server_address_joins_host_and_port() {
        let config = AppConfig {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
                max_body_size: 10_485_760,
            },
            database: DatabaseConfig {
                user: "postgres".to_string(),
                password: "postgres".to_string(),
                host: "db".to_string(),
                name: "marketdb".to_string(),
                max_connections: 20,
            },
            s3: S3Config {
                bucket: "my-test-bucket".to_string(),
                region: "eu-central-1".to_string(),
            },
        };

        assert_eq!(config.server_address(), "0.0.0.0:3000");
    }
}
