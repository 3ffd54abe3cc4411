//! Layered application configuration.
//!
//! Precedence, lowest to highest: built-in defaults, optional YAML config
//! file (`--config` / `CONFIG_FILE`, falling back to `./config.yaml`),
//! environment variables with the `SMARTASSIST` prefix (`__` separator,
//! e.g. `SMARTASSIST_SERVER__PORT=8000`), explicit CLI flags.

use std::env;
use std::time::Duration;

use clap::Parser;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use url::Url;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Base URL of the external chat backend
    #[arg(long, env = "BACKEND_URL")]
    pub backend_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    pub widget: WidgetConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

/// Settings for the external `/chat` collaborator. The backend is opaque to
/// this application; only its base URL and a request timeout are configured.
#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WidgetConfig {
    /// Delay before a sent user message flips to "read".
    pub read_receipt_delay_ms: u64,
    /// Idle time after which a widget session is evicted.
    pub session_timeout_secs: u64,
}

impl BackendConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl WidgetConfig {
    #[must_use]
    pub fn read_receipt_delay(&self) -> Duration {
        Duration::from_millis(self.read_receipt_delay_ms)
    }

    #[must_use]
    pub fn session_timeout(&self) -> Duration {
        Duration::from_secs(self.session_timeout_secs)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_args(env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("backend.base_url", "http://127.0.0.1:5000")?
            .set_default("backend.timeout_secs", 30)?
            .set_default("widget.read_receipt_delay_ms", 600)?
            .set_default("widget.session_timeout_secs", 1800)?;

        // Config file: explicit path wins, then ./config.yaml if present.
        if let Some(path) = &cli.config {
            builder = builder.add_source(File::new(path, FileFormat::Yaml));
        } else if std::path::Path::new("config.yaml").exists() {
            builder = builder.add_source(File::new("config.yaml", FileFormat::Yaml));
        }

        // Environment variables, e.g. SMARTASSIST_BACKEND__BASE_URL.
        builder = builder.add_source(
            Environment::with_prefix("SMARTASSIST")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // CLI flags (clap also resolves their companion env vars).
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(url) = &cli.backend_url {
            builder = builder.set_override("backend.base_url", url.clone())?;
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        Url::parse(&self.backend.base_url)
            .map_err(|e| ConfigError::Message(format!("invalid backend.base_url: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = AppConfig::load_from_args(["smartassist"]).expect("defaults should load");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.backend.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.widget.read_receipt_delay(), Duration::from_millis(600));
    }

    #[test]
    fn cli_overrides_defaults() {
        let config = AppConfig::load_from_args([
            "smartassist",
            "--port",
            "8080",
            "--backend-url",
            "http://backend.internal:9000",
        ])
        .expect("cli overrides should load");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.backend.base_url, "http://backend.internal:9000");
    }

    #[test]
    fn rejects_unparseable_backend_url() {
        let result =
            AppConfig::load_from_args(["smartassist", "--backend-url", "not a url at all"]);
        assert!(result.is_err());
    }
}
