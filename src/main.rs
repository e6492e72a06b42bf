use anyhow::Result;
use axum::Router;
use solar_planner::{api, config, state, telemetry};
use config::Config;
use state::AppState;
use telemetry::init_tracing;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cfg = Config::load()?;

    if cfg.weather.api_key.is_empty() || cfg.weather.api_key.starts_with("__SET_VIA_ENV") {
        warn!("SOLAR__WEATHER__API_KEY is not set - /api/weather will serve fallback conditions");
    }

    let app_state = AppState::new(cfg.clone())?;

    #[allow(unused_mut)]
    let mut app: Router = api::router(app_state, &cfg);

    #[cfg(feature = "swagger")]
    {
        app = api::with_swagger(app);
    }

    #[cfg(feature = "metrics")]
    {
        app = api::with_metrics(app);
    }

    let addr = cfg.server.socket_addr()?;

    if cfg.server.host == "0.0.0.0" {
        warn!(
            "Server binding to 0.0.0.0 - service will be accessible from the network. \
            Bind to 127.0.0.1 unless behind a firewall/reverse proxy."
        );
    }

    info!(%addr, irradiance = %cfg.irradiance.base_url, "starting Solar Planner");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(telemetry::shutdown_signal())
        .await?;

    warn!("shutdown complete");
    Ok(())
}
