use std::{
    env, fmt,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    str::FromStr,
};
use thiserror::Error;

// Runtime/server settings read from the environment.

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_TWITCH_AUTH_URL: &str = "https://id.twitch.tv/oauth2/token";
pub const DEFAULT_TWITCH_API_URL: &str = "https://api.twitch.tv/helix";

const REQUIRED_VARS: [&str; 3] = ["TWITCH_CLIENT_ID", "TWITCH_CLIENT_SECRET", "TWITCH_CHANNEL"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
}

#[derive(Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub channel: String,
    pub bind_addr: IpAddr,
    pub port: u16,
    pub auth_url: String,
    pub api_url: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("channel", &self.channel)
            .field("bind_addr", &self.bind_addr)
            .field("port", &self.port)
            .field("auth_url", &self.auth_url)
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Blank values count as missing; every missing variable is reported at once.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let missing: Vec<&'static str> = REQUIRED_VARS
            .into_iter()
            .filter(|key| value(*key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        Ok(Self {
            client_id: value("TWITCH_CLIENT_ID").unwrap_or_default(),
            client_secret: value("TWITCH_CLIENT_SECRET").unwrap_or_default(),
            channel: value("TWITCH_CHANNEL").unwrap_or_default(),
            bind_addr: parse_or_default(
                "BIND_ADDR",
                value("BIND_ADDR"),
                IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            ),
            port: parse_or_default("PORT", value("PORT"), DEFAULT_PORT),
            auth_url: value("TWITCH_AUTH_URL").unwrap_or_else(|| DEFAULT_TWITCH_AUTH_URL.into()),
            api_url: value("TWITCH_API_URL").unwrap_or_else(|| DEFAULT_TWITCH_API_URL.into()),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

// Unset values take the default quietly; unparsable ones are reported.
fn parse_or_default<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + fmt::Display,
{
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse() {
        Ok(parsed) => parsed,
        Err(_) => {
            tracing::warn!(variable = key, value = %raw, fallback = %default, "invalid value; using default.");
            default
        }
    }
}
