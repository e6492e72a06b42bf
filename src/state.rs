use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::config::Config;
use crate::sizing::SolarCalculator;
use crate::weather::{
    CachedIrradianceSource, CurrentWeatherSource, IrradianceSource, NasaPowerClient,
    OpenWeatherClient,
};

#[derive(Clone)]
pub struct AppState {
    pub cfg: Config,
    pub calculator: Arc<SolarCalculator>,
    pub weather: Arc<dyn CurrentWeatherSource>,
}

impl AppState {
    /// Wire the HTTP-backed collaborators described by `cfg`.
    pub fn new(cfg: Config) -> Result<Self> {
        let nasa: Arc<dyn IrradianceSource> = Arc::new(NasaPowerClient::from_config(&cfg.irradiance)?);
        let irradiance: Arc<dyn IrradianceSource> = if cfg.irradiance.cache_ttl_seconds > 0 {
            info!(ttl_seconds = cfg.irradiance.cache_ttl_seconds, "irradiance cache enabled");
            Arc::new(CachedIrradianceSource::new(
                nasa,
                Duration::from_secs(cfg.irradiance.cache_ttl_seconds),
            ))
        } else {
            nasa
        };
        let weather: Arc<dyn CurrentWeatherSource> =
            Arc::new(OpenWeatherClient::from_config(&cfg.weather)?);

        Ok(Self::with_sources(cfg, irradiance, weather))
    }

    pub fn with_sources(
        cfg: Config,
        irradiance: Arc<dyn IrradianceSource>,
        weather: Arc<dyn CurrentWeatherSource>,
    ) -> Self {
        Self {
            cfg,
            calculator: Arc::new(SolarCalculator::new(irradiance)),
            weather,
        }
    }
}
