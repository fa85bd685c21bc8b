use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::validation::is_valid_email;

/// Provider credential and addressing, read from the conventional variables
/// used by the site deployment.
pub const ENV_API_KEY: &str = "RESEND_API_KEY";
pub const ENV_CONTACT_TO: &str = "CONTACT_TO";
pub const ENV_CONTACT_FROM: &str = "CONTACT_FROM";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub mail: MailConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_seconds: u64,
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    pub api_key: String,
    pub api_base_url: String,
    pub from: String,
    pub to: String,
    pub brand: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            mail: MailConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            request_timeout_seconds: 30,
            max_body_bytes: 64 * 1024,
        }
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base_url: "https://api.resend.com".to_string(),
            from: "Hajari Minerals <no-reply@hajariminerals.com>".to_string(),
            to: "info@hajariminerals.com".to_string(),
            brand: "Hajari Minerals".to_string(),
            timeout_seconds: 10,
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
        }
    }
}

impl MailConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Some("config"))
    }

    /// Layers defaults, an optional config file, `APP_*` variables and the
    /// provider variables, in that order.
    pub fn load_from(config_file: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?);

        if let Some(path) = config_file {
            builder = builder.add_source(File::with_name(path).required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("cors.allowed_origins")
                .try_parsing(true),
        );

        for (var, key) in [
            (ENV_API_KEY, "mail.api_key"),
            (ENV_CONTACT_TO, "mail.to"),
            (ENV_CONTACT_FROM, "mail.from"),
        ] {
            builder = builder.set_override_option(key, std::env::var(var).ok())?;
        }

        let app_config: AppConfig = builder.build()?.try_deserialize()?;

        app_config.validate()?;

        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("Server port cannot be 0".to_string()));
        }

        if self.server.request_timeout_seconds == 0 {
            return Err(ConfigError::Message(
                "Request timeout must be greater than 0".to_string(),
            ));
        }

        if self.server.max_body_bytes == 0 {
            return Err(ConfigError::Message(
                "Max body size must be greater than 0".to_string(),
            ));
        }

        if self.mail.to.trim().is_empty() || !is_valid_email(&self.mail.to) {
            return Err(ConfigError::Message(format!(
                "Recipient address '{}' is not a valid email address",
                self.mail.to
            )));
        }

        if self.mail.from.trim().is_empty() || !is_valid_email(mailbox_address(&self.mail.from)) {
            return Err(ConfigError::Message(format!(
                "Sender address '{}' is not a valid email address",
                self.mail.from
            )));
        }

        if self.mail.api_base_url.is_empty() {
            return Err(ConfigError::Message(
                "Mail API base URL cannot be empty".to_string(),
            ));
        }

        if self.mail.timeout_seconds == 0 {
            return Err(ConfigError::Message(
                "Mail timeout must be greater than 0".to_string(),
            ));
        }

        if self.mail.api_key.is_empty() {
            tracing::warn!("{} is not set - the mail provider will reject deliveries", ENV_API_KEY);
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Extracts the address from `Display Name <address>` sender strings.
fn mailbox_address(mailbox: &str) -> &str {
    match (mailbox.rfind('<'), mailbox.rfind('>')) {
        (Some(start), Some(end)) if start < end => &mailbox[start + 1..end],
        _ => mailbox,
    }
}
