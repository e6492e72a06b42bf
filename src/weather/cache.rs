use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;

use crate::domain::GeoLocation;

use super::IrradianceSource;

type CoordinateKey = (u64, u64);

/// TTL cache in front of an [`IrradianceSource`], keyed by exact coordinate.
///
/// Only successful lookups are stored, so a failing service is retried on
/// the next request.
pub struct CachedIrradianceSource {
    inner: Arc<dyn IrradianceSource>,
    ttl: Duration,
    entries: RwLock<HashMap<CoordinateKey, (Instant, Vec<f64>)>>,
}

impl CachedIrradianceSource {
    pub fn new(inner: Arc<dyn IrradianceSource>, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    fn key(location: GeoLocation) -> CoordinateKey {
        (location.latitude.to_bits(), location.longitude.to_bits())
    }
}

#[async_trait]
impl IrradianceSource for CachedIrradianceSource {
    async fn daily_irradiance(&self, location: GeoLocation) -> Result<Vec<f64>> {
        let key = Self::key(location);
        {
            let entries = self.entries.read().await;
            if let Some((fetched_at, series)) = entries.get(&key) {
                if fetched_at.elapsed() < self.ttl {
                    debug!(%location, "irradiance cache hit");
                    return Ok(series.clone());
                }
            }
        }

        let series = self.inner.daily_irradiance(location).await?;

        let mut entries = self.entries.write().await;
        let ttl = self.ttl;
        entries.retain(|_, (fetched_at, _)| fetched_at.elapsed() < ttl);
        entries.insert(key, (Instant::now(), series.clone()));
        Ok(series)
    }
}
