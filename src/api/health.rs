use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::{config::Config, state::AppState};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    timestamp: chrono::DateTime<chrono::Utc>,
    checks: HealthChecks,
}

/// Individual health checks
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    calculator: ComponentHealth,
    irradiance: ComponentHealth,
    weather: ComponentHealth,
}

/// Health status of a component
///
/// Outbound services are reported from configuration only; the pipeline
/// keeps serving with fallback values when they are down, so they are never
/// probed here.
#[derive(Debug, Serialize)]
pub struct ComponentHealth {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timeout_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

impl ComponentHealth {
    fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            endpoint: None,
            timeout_seconds: None,
            note: None,
        }
    }

    fn outbound(endpoint: &str, timeout_seconds: u64) -> Self {
        Self {
            endpoint: Some(endpoint.to_string()),
            timeout_seconds: Some(timeout_seconds),
            ..Self::healthy()
        }
    }

    fn fallback_only(mut self, note: &str) -> Self {
        self.status = "fallback_only".to_string();
        self.note = Some(note.to_string());
        self
    }
}

fn collect_checks(cfg: &Config) -> HealthChecks {
    let irradiance = ComponentHealth::outbound(
        &cfg.irradiance.base_url,
        cfg.irradiance.http_timeout_seconds,
    );

    let mut weather =
        ComponentHealth::outbound(&cfg.weather.base_url, cfg.weather.http_timeout_seconds);
    if cfg.weather.api_key.is_empty() || cfg.weather.api_key.starts_with("__SET_VIA_ENV") {
        weather = weather.fallback_only("api key not configured");
    }

    HealthChecks {
        calculator: ComponentHealth::healthy(),
        irradiance,
        weather,
    }
}

/// GET /health - Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let checks = collect_checks(&state.cfg);
    let degraded = [&checks.irradiance, &checks.weather]
        .iter()
        .any(|c| c.status != "healthy");

    let response = HealthResponse {
        status: if degraded { "degraded" } else { "healthy" }.to_string(),
        timestamp: chrono::Utc::now(),
        checks,
    };

    tracing::debug!(degraded, "Health check completed");

    // fallbacks keep every endpoint usable, so degraded still answers 200
    (StatusCode::OK, Json(response))
}

/// GET /health/ready - Readiness probe
pub async fn readiness_check() -> impl IntoResponse {
    StatusCode::OK
}

/// GET /health/live - Liveness probe
pub async fn liveness_check() -> impl IntoResponse {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_key_is_fallback_only() {
        let checks = collect_checks(&Config::default());
        assert_eq!(checks.calculator.status, "healthy");
        assert_eq!(checks.irradiance.status, "healthy");
        assert_eq!(checks.weather.status, "fallback_only");
        assert_eq!(checks.weather.note.as_deref(), Some("api key not configured"));
    }

    #[test]
    fn test_configured_key_is_healthy() {
        let mut cfg = Config::default();
        cfg.weather.api_key = "0123456789abcdef".to_string();
        let checks = collect_checks(&cfg);
        assert_eq!(checks.weather.status, "healthy");
        assert_eq!(checks.irradiance.timeout_seconds, Some(10));
        assert_eq!(
            checks.irradiance.endpoint.as_deref(),
            Some("https://power.larc.nasa.gov")
        );
    }
}
