//! Current weather endpoint

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;

use crate::{
    api::error::ApiError,
    domain::{lenient, GeoLocation},
    state::AppState,
    weather::{WeatherLookup, WeatherReport},
};

/// Body of `POST /api/weather`
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherRequest {
    #[serde(default, deserialize_with = "lenient::coordinate")]
    pub latitude: f64,
    #[serde(default, deserialize_with = "lenient::coordinate")]
    pub longitude: f64,
}

/// POST /api/weather - Current conditions and the matching production factor
///
/// Falls back to typical conditions when the weather service cannot be used.
#[cfg_attr(feature = "swagger", utoipa::path(
    post,
    path = "/api/weather",
    request_body = WeatherRequest,
    responses(
        (status = 200, description = "Observed or fallback conditions", body = WeatherReport),
        (status = 400, description = "Body is not a JSON object of the expected shape")
    ),
    tag = "solar"
))]
pub async fn current_weather(
    State(st): State<AppState>,
    payload: Result<Json<WeatherRequest>, JsonRejection>,
) -> Result<Json<WeatherReport>, ApiError> {
    let Json(req) = payload?;
    let location = GeoLocation::new(req.latitude, req.longitude);
    let lookup = WeatherLookup::resolve(st.weather.as_ref(), location).await;
    Ok(Json(lookup.into_report()))
}
