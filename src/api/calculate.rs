use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

use crate::{
    api::error::ApiError,
    domain::{lenient, ApplianceLoad, CalculationResult, GeoLocation},
    state::AppState,
};

pub const DEFAULT_BUDGET: f64 = 10_000.0;

/// Body of `POST /api/calculate`
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Deserialize)]
pub struct CalculationRequest {
    #[serde(default)]
    pub appliances: Vec<ApplianceLoad>,
    #[serde(default, deserialize_with = "lenient::coordinate")]
    pub latitude: f64,
    #[serde(default, deserialize_with = "lenient::coordinate")]
    pub longitude: f64,
    /// Accepted for the dashboard's sake; sizing does not depend on it
    #[serde(default = "default_budget", deserialize_with = "budget")]
    pub budget: f64,
}

impl CalculationRequest {
    pub fn location(&self) -> GeoLocation {
        GeoLocation::new(self.latitude, self.longitude)
    }
}

fn default_budget() -> f64 {
    DEFAULT_BUDGET
}

fn budget<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(lenient::number_or(&value, DEFAULT_BUDGET))
}

/// POST /api/calculate - Size a system for a load list and location
#[cfg_attr(feature = "swagger", utoipa::path(
    post,
    path = "/api/calculate",
    request_body = CalculationRequest,
    responses(
        (status = 200, description = "Sizing, cost and environmental estimates", body = CalculationResult),
        (status = 400, description = "Body is not a JSON object of the expected shape")
    ),
    tag = "solar"
))]
pub async fn calculate_system(
    State(st): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Result<Json<CalculationResult>, ApiError> {
    let Json(req) = payload?;
    debug!(
        appliances = req.appliances.len(),
        budget = req.budget,
        "calculation requested"
    );

    let result = st.calculator.calculate(&req.appliances, req.location()).await;
    Ok(Json(result))
}
