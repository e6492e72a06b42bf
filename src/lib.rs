//! Solar Planner: residential PV sizing, cost and environmental estimates.

pub mod api;
pub mod config;
pub mod domain;
pub mod sizing;
pub mod state;
pub mod telemetry;
pub mod weather;
