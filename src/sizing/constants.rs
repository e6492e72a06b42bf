// Panel model
pub const PANEL_RATED_KW: f64 = 0.3;                 // 300 W nameplate module
pub const PEAK_SUN_HOURS_ASSUMED: f64 = 4.5;         // used for array sizing only
pub const SYSTEM_EFFICIENCY: f64 = 0.85;             // inverter, wiring and soiling losses

// Irradiance
pub const FALLBACK_IRRADIANCE: f64 = 4.5;            // substituted when the lookup fails
pub const HOURS_PER_DAY: f64 = 24.0;

// Production calendar
pub const DAYS_PER_WEEK: f64 = 7.0;
pub const DAYS_PER_MONTH: f64 = 30.0;
pub const DAYS_PER_YEAR: f64 = 365.0;

// Battery
pub const DEFAULT_BACKUP_DAYS: u32 = 2;
pub const DEPTH_OF_DISCHARGE: f64 = 0.8;             // lithium chemistry

// Unit costs (USD)
pub const PANEL_COST_PER_KW: f64 = 1000.0;
pub const INVERTER_COST_PER_KW: f64 = 200.0;
pub const INSTALLATION_COST_PER_KW: f64 = 300.0;
pub const BATTERY_COST_PER_KWH: f64 = 500.0;

// Savings
pub const ELECTRICITY_RATE_PER_KWH: f64 = 0.12;
pub const MONTHS_PER_YEAR: f64 = 12.0;

// Environment
pub const CO2_KG_PER_KWH: f64 = 0.5;                 // flat grid average
pub const CO2_KG_PER_TREE_YEAR: f64 = 22.0;

// Degradation
pub const ANNUAL_DEGRADATION_RATE: f64 = 0.005;
pub const DEFAULT_DEGRADATION_YEARS: u32 = 25;
pub const REPORTED_DEGRADATION_YEARS: u32 = 10;

// Comparison
pub const COMPARISON_SIZES_KW: [f64; 2] = [3.0, 5.0];
pub const COMPARISON_BATTERY_SCALE: f64 = 0.7;

// Tilt
pub const TROPICAL_LATITUDE_LIMIT: f64 = 25.0;
pub const TILT_SLOPE: f64 = 0.87;
pub const TILT_OFFSET_DEG: f64 = 3.1;
pub const SEASONAL_TILT_SWING_DEG: f64 = 15.0;
