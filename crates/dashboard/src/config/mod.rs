use chrono_tz::Tz;
use clap::Parser;
use serde::Deserialize;

use crate::error::{AppError, Result};

const DEFAULT_CONFIG_PATH: &str = "config/dashboard.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Explicit API base URL. Takes precedence over origin detection.
    pub api_url: Option<String>,
    /// URL the dashboard is served from.
    pub origin: String,
    /// Telegram `initData` launch string.
    pub init_data: Option<String>,
    pub timezone: String,
    pub log_level: String,
    pub log_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            origin: "http://localhost".to_string(),
            init_data: None,
            timezone: "Asia/Tashkent".to_string(),
            log_level: "info".to_string(),
            log_file: "moliya_dashboard.log".to_string(),
        }
    }
}

impl AppConfig {
    pub fn tz(&self) -> Result<Tz> {
        self.timezone.parse::<Tz>().map_err(|err| {
            AppError::Config(config::ConfigError::Message(format!(
                "invalid timezone {:?}: {err}",
                self.timezone
            )))
        })
    }
}

#[derive(Debug, Parser)]
#[command(name = "moliya_dashboard", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override API base URL (e.g. https://api.example.uz).
    #[arg(long)]
    api_url: Option<String>,
    /// Override the origin the dashboard is served from.
    #[arg(long)]
    origin: Option<String>,
    /// Telegram initData launch string.
    #[arg(long)]
    init_data: Option<String>,
    /// Override timezone (IANA name).
    #[arg(long)]
    timezone: Option<String>,
    /// Log filter level (e.g. debug, info).
    #[arg(long)]
    log_level: Option<String>,
    /// Log file path.
    #[arg(long)]
    log_file: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("MOLIYA"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(api_url) = args.api_url {
        settings.api_url = Some(api_url);
    }
    if let Some(origin) = args.origin {
        settings.origin = origin;
    }
    if let Some(init_data) = args.init_data {
        settings.init_data = Some(init_data);
    }
    if let Some(timezone) = args.timezone {
        settings.timezone = timezone;
    }
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = log_file;
    }

    Ok(settings)
}
