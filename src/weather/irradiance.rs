//! Historical irradiance lookup (NASA POWER daily point API)
//!
//! A year of daily surface irradiance is fetched for the site and averaged.
//! Any failure on the way is folded into [`IrradianceLookup::Fallback`] so the
//! production estimate always has a figure to work with.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::IrradianceConfig;
use crate::domain::GeoLocation;
use crate::sizing::constants::FALLBACK_IRRADIANCE;

#[async_trait]
pub trait IrradianceSource: Send + Sync {
    /// Daily irradiance samples for the configured period, in date order.
    async fn daily_irradiance(&self, location: GeoLocation) -> Result<Vec<f64>>;
}

/// Outcome of an irradiance lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum IrradianceLookup {
    /// Usable samples returned by the service
    Measured(Vec<f64>),
    /// The service could not be used; the constant average applies
    Fallback { reason: String },
}

impl IrradianceLookup {
    /// Query `source`, converting every error into the fallback branch.
    pub async fn resolve(source: &dyn IrradianceSource, location: GeoLocation) -> Self {
        match source.daily_irradiance(location).await {
            Ok(series) => Self::from_series(series),
            Err(e) => {
                let reason = format!("{e:#}");
                warn!(%location, error = %reason, "irradiance lookup failed, using fallback");
                Self::Fallback { reason }
            }
        }
    }

    /// Keep finite non-negative samples; the service reports missing days
    /// with a negative fill value.
    pub fn from_series(series: Vec<f64>) -> Self {
        let total = series.len();
        let samples: Vec<f64> = series
            .into_iter()
            .filter(|v| v.is_finite() && *v >= 0.0)
            .collect();

        if samples.is_empty() {
            warn!(total, "irradiance series has no usable samples, using fallback");
            return Self::Fallback {
                reason: "empty irradiance series".to_string(),
            };
        }
        if samples.len() < total {
            debug!(dropped = total - samples.len(), "discarded fill values");
        }
        Self::Measured(samples)
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    /// Mean daily irradiance.
    pub fn average(&self) -> f64 {
        match self {
            Self::Measured(samples) => samples.iter().sum::<f64>() / samples.len() as f64,
            Self::Fallback { .. } => FALLBACK_IRRADIANCE,
        }
    }
}

/// NASA POWER API client
#[derive(Clone)]
pub struct NasaPowerClient {
    client: reqwest::Client,
    base_url: String,
    parameter: String,
    community: String,
    year: i32,
}

impl NasaPowerClient {
    pub fn from_config(cfg: &IrradianceConfig) -> Result<Self> {
        Self::new(cfg, Duration::from_secs(cfg.http_timeout_seconds))
    }

    pub fn new(cfg: &IrradianceConfig, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("solar-planner/0.1"));
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;
        Ok(Self {
            client,
            base_url: cfg.base_url.clone(),
            parameter: cfg.parameter.clone(),
            community: cfg.community.clone(),
            year: cfg.year,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/api/temporal/daily/point",
            self.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl IrradianceSource for NasaPowerClient {
    async fn daily_irradiance(&self, location: GeoLocation) -> Result<Vec<f64>> {
        let latitude = location.latitude.to_string();
        let longitude = location.longitude.to_string();
        let start = format!("{:04}0101", self.year);
        let end = format!("{:04}1231", self.year);

        debug!(%location, year = self.year, "fetching irradiance from NASA POWER");

        let resp = self
            .client
            .get(self.endpoint())
            .query(&[
                ("parameters", self.parameter.as_str()),
                ("community", self.community.as_str()),
                ("longitude", longitude.as_str()),
                ("latitude", latitude.as_str()),
                ("start", start.as_str()),
                ("end", end.as_str()),
                ("format", "JSON"),
            ])
            .send()
            .await
            .context("irradiance GET failed")?;
        let status = resp.status();
        let body = resp.text().await.context("irradiance read failed")?;
        if !status.is_success() {
            anyhow::bail!("irradiance API error: HTTP {status}");
        }

        let mut raw: PowerResponse =
            serde_json::from_str(&body).context("irradiance JSON parse failed")?;
        let series = raw
            .properties
            .parameter
            .remove(&self.parameter)
            .with_context(|| format!("parameter {} missing from response", self.parameter))?;

        Ok(series.into_values().collect())
    }
}

// NASA POWER response structures
#[derive(Debug, Deserialize)]
struct PowerResponse {
    properties: PowerProperties,
}

#[derive(Debug, Deserialize)]
struct PowerProperties {
    /// parameter name -> (YYYYMMDD -> value)
    parameter: HashMap<String, BTreeMap<String, f64>>,
}
