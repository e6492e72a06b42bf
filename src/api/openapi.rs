use utoipa::OpenApi;

use crate::api::{calculate::CalculationRequest, weather::WeatherRequest};
use crate::domain::{
    ApplianceLoad, BatterySizing, CalculationResult, Co2Savings, ComparisonEntry, CostRoi,
    DegradationPoint, GridAnalysis, LoadSummary, MaintenanceSchedule, ProductionEstimate,
    TiltAngles,
};
use crate::weather::{CurrentConditions, WeatherReport};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::calculate::calculate_system,
        crate::api::weather::current_weather,
    ),
    components(
        schemas(
            CalculationRequest, ApplianceLoad, CalculationResult, LoadSummary, TiltAngles,
            ProductionEstimate, BatterySizing, CostRoi, Co2Savings, DegradationPoint,
            GridAnalysis, ComparisonEntry, MaintenanceSchedule, WeatherRequest,
            WeatherReport, CurrentConditions
        )
    ),
    tags((name = "solar", description = "Solar Planner API"))
)]
pub struct ApiDoc;
