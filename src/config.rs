use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
pub const ENV_PREFIX: &str = "SOLAR__";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub irradiance: IrradianceConfig,
    pub weather: WeatherConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
    pub enable_cors: bool,
    pub cors_allow_origin: String,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            // four irradiance lookups per calculation, each bounded separately
            request_timeout_secs: 60,
            enable_cors: false,
            cors_allow_origin: "http://localhost:3000".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrradianceConfig {
    pub base_url: String,
    pub parameter: String,
    pub community: String,
    /// Calendar year of daily samples to average
    pub year: i32,
    pub http_timeout_seconds: u64,
    /// 0 disables the coordinate cache
    pub cache_ttl_seconds: u64,
}

impl Default for IrradianceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://power.larc.nasa.gov".to_string(),
            parameter: "ALLSKY_SFC_SW_DWN".to_string(),
            community: "RE".to_string(),
            year: 2023,
            http_timeout_seconds: 10,
            cache_ttl_seconds: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    pub base_url: String,
    pub api_key: String,
    pub http_timeout_seconds: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: "http://api.openweathermap.org".to_string(),
            api_key: "__SET_VIA_ENV__".to_string(),
            http_timeout_seconds: 10,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Built-in defaults, then the TOML file (if present), then `SOLAR__*`
    /// environment variables.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));
        Ok(figment.extract()?)
    }
}
