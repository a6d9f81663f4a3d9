use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub gemini: GeminiSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Directory served under `/static`, relative to the working directory
    /// unless absolute.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl ServerSettings {
    /// Resolve the static directory against the working directory, falling back
    /// to the crate directory when started from the workspace root.
    pub fn static_path(&self) -> PathBuf {
        let dir = PathBuf::from(&self.static_dir);
        if dir.is_absolute() || dir.exists() {
            return dir;
        }
        PathBuf::from("legal-simplifier").join(dir)
    }
}

fn default_static_dir() -> String {
    "static".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeminiSettings {
    /// API root, e.g. `https://generativelanguage.googleapis.com/v1beta`.
    pub base_url: String,
    pub model: String,
    /// Name of the environment variable holding the API key.
    ///
    /// The key itself is never part of the settings: it is looked up on every
    /// call so a missing key surfaces as a request error, not a startup failure.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// OTLP collector endpoint. Spans are only exported when this is set.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            otlp_endpoint: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Message(format!("Cannot read current dir: {}", e)))?;

    let configuration_directory = configuration_directory(base_path);

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")).required(true))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

// Works both from the workspace root and from inside the crate directory.
fn configuration_directory(base_path: PathBuf) -> PathBuf {
    if base_path.ends_with("legal-simplifier") {
        base_path.join("config")
    } else {
        base_path.join("legal-simplifier").join("config")
    }
}
