use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use showcase_notification::EmailConfig;
use std::{env, time::Duration};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    pub name: String,
    pub contact_email: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Showcase".to_string(),
            contact_email: "hello@showcase.localhost".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryKind {
    /// Emit the submission as a log record
    #[default]
    Log,
    /// Forward the submission to `email.contact_address`
    Email,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContactConfig {
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    #[serde(default)]
    pub delivery: DeliveryKind,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            delivery: DeliveryKind::default(),
        }
    }
}

impl ContactConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

fn default_delay_ms() -> u64 {
    showcase_contact::DEFAULT_DELAY.as_millis() as u64
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (SHOWCASE__SERVER__PORT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("site.name", defaults.site.name)?
            .set_default("site.contact_email", defaults.site.contact_email)?
            .set_default("contact.delay_ms", defaults.contact.delay_ms as i64)?
            .set_default("contact.delivery", "log")?
            .set_default("email.smtp_host", defaults.email.smtp_host)?
            .set_default("email.smtp_port", i64::from(defaults.email.smtp_port))?
            .set_default("email.smtp_username", defaults.email.smtp_username)?
            .set_default("email.smtp_password", defaults.email.smtp_password)?
            .set_default("email.from_address", defaults.email.from_address)?
            .set_default("email.contact_address", defaults.email.contact_address)?
            .set_default("observability.log_level", defaults.observability.log_level)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("SHOWCASE")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.site.name.trim().is_empty() {
            return Err("Site name must not be empty".to_string());
        }
        if self.contact.delivery == DeliveryKind::Email && self.email.contact_address.is_empty() {
            return Err("Email delivery requires email.contact_address".to_string());
        }
        Ok(())
    }
}
