use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub data: DataConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding regions.json, instances.json, instanceTypes.json and images.json
    pub directory: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8083,
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("data"),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, an optional config file and environment variables
    pub fn load() -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Add default configuration
        config = config.add_source(config::Config::try_from(&AppConfig::default())?);

        // Add config file if it exists
        config = config.add_source(config::File::with_name("config").required(false));

        // Add environment variables with prefix "CATALOG_", e.g. CATALOG_SERVER_PORT
        config = config.add_source(
            config::Environment::with_prefix("CATALOG")
                .separator("_")
                .prefix_separator("_"),
        );

        let config = config.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        // Plain PORT wins, as most container platforms only set that one
        if let Ok(port) = std::env::var("PORT") {
            app_config.apply_port_override(&port);
        }

        Ok(app_config)
    }

    /// Override the port from a raw string; unparsable or empty values are ignored
    pub fn apply_port_override(&mut self, raw: &str) {
        if raw.is_empty() {
            return;
        }
        match raw.parse() {
            Ok(port) => self.server.port = port,
            Err(_) => log::warn!("Ignoring invalid PORT value {:?}", raw),
        }
    }

    /// Get the server bind address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
