use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub face: FaceSettings,
    #[serde(default)]
    pub gemini: GeminiSettings,
    #[serde(default)]
    pub upload: UploadSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }

/// Settings for the facial emotion analysis service
#[derive(Debug, Clone, Deserialize)]
pub struct FaceSettings {
    #[serde(default = "default_face_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_detector_backend")]
    pub detector_backend: String,
    pub timeout_secs: Option<u64>,
}

impl Default for FaceSettings {
    fn default() -> Self {
        Self {
            endpoint: default_face_endpoint(),
            detector_backend: default_detector_backend(),
            timeout_secs: None,
        }
    }
}

fn default_face_endpoint() -> String { "http://localhost:5005".to_string() }
fn default_detector_backend() -> String { "retinaface".to_string() }

/// Settings for the Gemini generative-language API
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiSettings {
    #[serde(default = "default_gemini_endpoint")]
    pub endpoint: String,
    /// Not validated at startup; a missing key surfaces on first use.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_gemini_model")]
    pub model: String,
    pub timeout_secs: Option<u64>,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            endpoint: default_gemini_endpoint(),
            api_key: String::new(),
            model: default_gemini_model(),
            timeout_secs: None,
        }
    }
}

fn default_gemini_endpoint() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}
fn default_gemini_model() -> String { "gemini-pro".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    #[serde(default = "default_max_upload_bytes")]
    pub max_bytes: usize,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self { max_bytes: default_max_upload_bytes() }
    }
}

fn default_max_upload_bytes() -> usize { 10 * 1024 * 1024 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml, config/local.toml)
    /// 3. Environment variables (prefixed with MOODTUNE_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with MOODTUNE_)
            // e.g., MOODTUNE__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("MOODTUNE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("MOODTUNE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply well-known environment variables on top of the layered config.
/// GOOGLE_API_KEY is the credential name the deployment has always used,
/// so it wins over MOODTUNE__GEMINI__API_KEY when both are set.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let google_api_key = env::var("GOOGLE_API_KEY").ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(api_key) = google_api_key {
        builder = builder.set_override("gemini.api_key", api_key)?;
    }

    builder.build()
}
