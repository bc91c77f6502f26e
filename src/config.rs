use clap::{Args, Parser, ValueEnum};

#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Database connection URL
    #[arg(long, env = "SOULSPACE_DATABASE_URL", default_value = "sqlite://soulspace.db")]
    pub database_url: String,

    #[command(flatten)]
    pub server: ServerConfig,

    #[command(flatten)]
    pub session: SessionConfig,

    #[command(flatten)]
    pub telemetry: TelemetryConfig,
}

#[derive(Clone, Debug, Args)]
pub struct ServerConfig {
    /// Host to listen on
    #[arg(long, env = "SOULSPACE_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "SOULSPACE_PORT", default_value_t = 5555)]
    pub port: u16,
}

#[derive(Clone, Debug, Args)]
pub struct SessionConfig {
    /// Session time-to-live in days
    #[arg(long, env = "SOULSPACE_SESSION_TTL_DAYS", default_value_t = 30)]
    pub ttl_days: i64,

    /// Mark the session cookie as Secure (requires HTTPS in front of the server)
    #[arg(long, env = "SOULSPACE_SECURE_COOKIES", default_value_t = false)]
    pub secure_cookies: bool,
}

#[derive(Clone, Debug, Args)]
pub struct TelemetryConfig {
    /// Log output format
    #[arg(long, env = "SOULSPACE_LOG_FORMAT", value_enum, default_value = "text")]
    pub log_format: LogFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

impl Config {
    #[must_use]
    pub fn load() -> Self {
        Self::parse()
    }
}
