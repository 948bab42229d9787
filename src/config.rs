use std::fmt;
use std::net::IpAddr;
use std::sync::LazyLock;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use regex::Regex;

use crate::error::ConfigError;

const DNS1123_LABEL_MAX_LENGTH: usize = 63;
const FQDN_MAX_LENGTH: usize = 255;

static DNS1123_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9]([-a-zA-Z0-9]*[a-zA-Z0-9])?$").expect("DNS-1123 label pattern compiles")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Process settings, from flags with environment fallbacks.
#[derive(Parser, Clone)]
#[command(author, version, about = "Forwards Mixer tracespan instances to LightStep", long_about = None)]
pub struct Settings {
    /// Address the gRPC server listens on (host:port)
    #[arg(long, env = "SERVER_ADDRESS", default_value = "")]
    pub server_address: String,

    /// Access token for the satellite pool
    #[arg(long, env = "LIGHTSTEP_ACCESS_TOKEN", default_value = "", hide_env_values = true)]
    pub access_token: String,

    /// Upstream satellite pool address (host:port)
    #[arg(long, env = "SATELLITE_ADDRESS", default_value = "")]
    pub socket_address: String,

    /// Port for the health and HTTP ingestion server
    #[arg(long, env = "HTTP_PORT", default_value = "9600")]
    pub http_port: u16,

    /// Timeout for the initial collector connection, in seconds
    #[arg(long, env = "CONNECT_TIMEOUT_SECS", default_value = "10")]
    pub connect_timeout_secs: u64,

    /// Fixed reporter ID (random per process when absent)
    #[arg(long, env = "REPORTER_ID")]
    pub reporter_id: Option<u64>,

    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: LogLevel,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("server_address", &self.server_address)
            .field("access_token", &"<redacted>")
            .field("socket_address", &self.socket_address)
            .field("http_port", &self.http_port)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("reporter_id", &self.reporter_id)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl Settings {
    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let settings = Settings::try_parse_from(args)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check every setting and report all problems at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let errors: Vec<String> = [
            validate_server_address(&self.server_address)
                .map_err(|e| format!("server address: {e}")),
            validate_access_token(&self.access_token),
            validate_socket_address(&self.socket_address)
                .map_err(|e| format!("socket address: {e}")),
            if self.connect_timeout_secs == 0 {
                Err("connect timeout must be greater than 0".to_string())
            } else {
                Ok(())
            },
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(errors))
        }
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

pub fn validate_server_address(addr: &str) -> Result<(), String> {
    if addr.is_empty() {
        return Err("address cannot be empty".to_string());
    }
    validate_network_address(addr)
}

pub fn validate_access_token(token: &str) -> Result<(), String> {
    if token.is_empty() {
        return Err("access token cannot be empty".to_string());
    }
    Ok(())
}

pub fn validate_socket_address(addr: &str) -> Result<(), String> {
    if addr.is_empty() {
        return Err("address cannot be empty".to_string());
    }
    validate_network_address(addr)
}

/// `host:port` where host is an FQDN or an IP literal.
fn validate_network_address(addr: &str) -> Result<(), String> {
    let (host, port) = split_host_port(addr).map_err(|e| format!("unable to split {addr:?}: {e}"))?;
    let port: i64 = port
        .parse()
        .map_err(|e| format!("port ({port}) is not a number: {e}"))?;
    validate_port(port)?;

    if validate_fqdn(host).is_err() && host.parse::<IpAddr>().is_err() {
        return Err(format!("{host:?} is not a valid hostname or an IP address"));
    }
    Ok(())
}

fn split_host_port(addr: &str) -> Result<(&str, &str), &'static str> {
    if let Some(rest) = addr.strip_prefix('[') {
        let (host, after) = rest.split_once(']').ok_or("missing ']' in address")?;
        let port = after.strip_prefix(':').ok_or("missing port in address")?;
        return Ok((host, port));
    }

    let (host, port) = addr.rsplit_once(':').ok_or("missing port in address")?;
    if host.contains(':') {
        return Err("too many colons in address");
    }
    Ok((host, port))
}

pub fn validate_fqdn(fqdn: &str) -> Result<(), String> {
    if fqdn.len() > FQDN_MAX_LENGTH {
        return Err(format!("domain name {fqdn:?} too long (max 255)"));
    }
    if fqdn.is_empty() {
        return Err("empty domain name not allowed".to_string());
    }
    match fqdn.split('.').find(|label| !is_dns1123_label(label)) {
        Some(label) => Err(format!("domain name {fqdn:?} invalid (label {label:?} invalid)")),
        None => Ok(()),
    }
}

pub fn is_dns1123_label(value: &str) -> bool {
    value.len() <= DNS1123_LABEL_MAX_LENGTH && DNS1123_LABEL.is_match(value)
}

pub fn validate_port(port: i64) -> Result<(), String> {
    if (1..=65535).contains(&port) {
        Ok(())
    } else {
        Err(format!("port number {port} must be in the range 1..65535"))
    }
}
