//! Current conditions (OpenWeatherMap)
//!
//! Used for the standalone weather panel only; the sizing pipeline does not
//! consume it.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::WeatherConfig;
use crate::domain::GeoLocation;

/// Lowest production factor reported for a fully overcast sky.
pub const MIN_SOLAR_ADJUSTMENT: f64 = 0.3;
/// Production factor reported when no observation is available.
pub const FALLBACK_SOLAR_ADJUSTMENT: f64 = 0.8;

#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Degrees Celsius
    pub temperature: f64,
    /// Relative humidity, percent
    pub humidity: f64,
    /// Cloud cover, percent
    pub cloudiness: f64,
    pub description: String,
}

impl CurrentConditions {
    /// Typical conditions substituted when the service is unavailable.
    pub fn fallback() -> Self {
        Self {
            temperature: 25.0,
            humidity: 60.0,
            cloudiness: 30.0,
            description: "partly cloudy".to_string(),
        }
    }

    /// Fraction of clear-sky output expected under the current cloud cover.
    pub fn solar_adjustment(&self) -> f64 {
        (1.0 - self.cloudiness / 100.0).max(MIN_SOLAR_ADJUSTMENT)
    }
}

#[async_trait]
pub trait CurrentWeatherSource: Send + Sync {
    async fn current_conditions(&self, location: GeoLocation) -> Result<CurrentConditions>;
}

/// Outcome of a current-weather lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherLookup {
    Observed(CurrentConditions),
    Fallback { reason: String },
}

impl WeatherLookup {
    pub async fn resolve(source: &dyn CurrentWeatherSource, location: GeoLocation) -> Self {
        match source.current_conditions(location).await {
            Ok(conditions) => Self::Observed(conditions),
            Err(e) => {
                let reason = format!("{e:#}");
                warn!(%location, error = %reason, "weather lookup failed, using fallback");
                Self::Fallback { reason }
            }
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    pub fn into_report(self) -> WeatherReport {
        match self {
            Self::Observed(conditions) => WeatherReport {
                solar_adjustment: conditions.solar_adjustment(),
                current_weather: conditions,
            },
            Self::Fallback { .. } => WeatherReport {
                current_weather: CurrentConditions::fallback(),
                solar_adjustment: FALLBACK_SOLAR_ADJUSTMENT,
            },
        }
    }
}

#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub current_weather: CurrentConditions,
    pub solar_adjustment: f64,
}

/// OpenWeatherMap current weather client
#[derive(Clone)]
pub struct OpenWeatherClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn from_config(cfg: &WeatherConfig) -> Result<Self> {
        Self::new(cfg, Duration::from_secs(cfg.http_timeout_seconds))
    }

    pub fn new(cfg: &WeatherConfig, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("solar-planner/0.1"));
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;
        Ok(Self {
            client,
            base_url: cfg.base_url.clone(),
            api_key: cfg.api_key.clone(),
        })
    }
}

#[async_trait]
impl CurrentWeatherSource for OpenWeatherClient {
    async fn current_conditions(&self, location: GeoLocation) -> Result<CurrentConditions> {
        let url = format!("{}/data/2.5/weather", self.base_url.trim_end_matches('/'));
        let latitude = location.latitude.to_string();
        let longitude = location.longitude.to_string();

        debug!(%location, "fetching current weather");

        let resp = self
            .client
            .get(url)
            .query(&[
                ("lat", latitude.as_str()),
                ("lon", longitude.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .context("weather GET failed")?;

        if !resp.status().is_success() {
            anyhow::bail!("weather API error: HTTP {}", resp.status());
        }

        let raw: OwmResponse = resp.json().await.context("weather JSON parse failed")?;
        let description = raw
            .weather
            .into_iter()
            .next()
            .map(|w| w.description)
            .context("weather response has no condition entries")?;

        info!(%location, cloudiness = raw.clouds.all, "fetched current weather");

        Ok(CurrentConditions {
            temperature: raw.main.temp,
            humidity: raw.main.humidity,
            cloudiness: raw.clouds.all,
            description,
        })
    }
}

// OpenWeatherMap response structures
#[derive(Debug, Deserialize)]
struct OwmResponse {
    main: OwmMain,
    clouds: OwmClouds,
    weather: Vec<OwmCondition>,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwmClouds {
    all: f64,
}

#[derive(Debug, Deserialize)]
struct OwmCondition {
    description: String,
}
