use serde::{Deserialize, Serialize};
use sqlx::postgres::PgConnectOptions;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Full connection URL; takes precedence over the discrete fields
    pub connection_string: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Option<String>,
    pub name: String,
    pub max_connections: Option<u32>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            connection_string: None,
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: None,
            name: "ecommerce_db".to_string(),
            max_connections: Some(20),
        }
    }
}

/// Plain environment variables honoured on top of everything else.
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("PORT", "server.port"),
    ("DB_HOST", "database.host"),
    ("DB_PORT", "database.port"),
    ("DB_USER", "database.user"),
    ("DB_PASSWORD", "database.password"),
    ("DB_DATABASE", "database.name"),
    ("DATABASE_URL", "database.connection_string"),
];

impl AppConfig {
    /// Load configuration from defaults, an optional config file and the environment
    pub fn load() -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Add default configuration
        config = config.add_source(config::Config::try_from(&AppConfig::default())?);

        // Add config file if it exists
        config = config.add_source(config::File::with_name("config").required(false));

        // Nested keys, e.g. CATALOG__SERVER__PORT
        config = config.add_source(
            config::Environment::with_prefix("CATALOG")
                .separator("__")
                .prefix_separator("__"),
        );

        for (var, key) in ENV_OVERRIDES {
            let value = std::env::var(var).ok().filter(|v| !v.is_empty());
            config = config.set_override_option(*key, value)?;
        }

        let config = config.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        Ok(app_config)
    }

    /// Get the server bind address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> anyhow::Result<PgConnectOptions> {
        if let Some(url) = &self.connection_string {
            return Ok(url.parse::<PgConnectOptions>()?);
        }

        let mut options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.name);
        if let Some(password) = &self.password {
            options = options.password(password);
        }
        Ok(options)
    }

    pub fn pool_size(&self) -> u32 {
        self.max_connections.unwrap_or(20)
    }
}
