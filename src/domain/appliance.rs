use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient::{count_or, magnitude_or};

/// One line of the household load list.
///
/// Deserialization is permissive: hours may be given as `hours` or
/// `hours_per_day`, and malformed numbers contribute nothing instead of
/// failing the request.
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawApplianceLoad")]
pub struct ApplianceLoad {
    pub name: String,
    pub wattage: f64,
    pub hours_per_day: f64,
    pub quantity: u32,
}

impl ApplianceLoad {
    pub fn new(name: impl Into<String>, wattage: f64, hours_per_day: f64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            wattage,
            hours_per_day,
            quantity,
        }
    }

    /// Energy drawn per day in Wh.
    pub fn daily_energy_wh(&self) -> f64 {
        self.wattage * self.hours_per_day * self.quantity as f64
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawApplianceLoad {
    #[serde(default)]
    name: Value,
    #[serde(default)]
    wattage: Value,
    #[serde(default)]
    hours: Value,
    #[serde(default)]
    hours_per_day: Value,
    #[serde(default)]
    quantity: Value,
}

impl From<RawApplianceLoad> for ApplianceLoad {
    fn from(raw: RawApplianceLoad) -> Self {
        let name = match raw.name {
            Value::String(s) => s,
            Value::Null => String::new(),
            other => other.to_string(),
        };

        // `hours` wins when it carries a usable non-zero value
        let hours = magnitude_or(&raw.hours, 0.0);
        let hours_per_day = if hours > 0.0 {
            hours
        } else {
            magnitude_or(&raw.hours_per_day, 0.0)
        };

        Self {
            name,
            wattage: magnitude_or(&raw.wattage, 0.0),
            hours_per_day,
            quantity: count_or(&raw.quantity, 1),
        }
    }
}

/// Geographic coordinate in decimal degrees.
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl std::fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> ApplianceLoad {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_full_entry() {
        let a = parse(json!({
            "name": "Fridge",
            "wattage": 150,
            "hours_per_day": 24,
            "quantity": 2
        }));
        assert_eq!(a, ApplianceLoad::new("Fridge", 150.0, 24.0, 2));
        assert_eq!(a.daily_energy_wh(), 7200.0);
    }

    #[test]
    fn test_quantity_defaults_to_one() {
        let a = parse(json!({ "name": "TV", "wattage": 100, "hours_per_day": 5 }));
        assert_eq!(a.quantity, 1);
        assert_eq!(a.daily_energy_wh(), 500.0);
    }

    #[test]
    fn test_hours_alias_takes_precedence() {
        let a = parse(json!({ "wattage": 10, "hours": 3, "hours_per_day": 8 }));
        assert_eq!(a.hours_per_day, 3.0);

        let b = parse(json!({ "wattage": 10, "hours": 0, "hours_per_day": 8 }));
        assert_eq!(b.hours_per_day, 8.0);
    }

    #[test]
    fn test_malformed_numbers_contribute_zero() {
        let a = parse(json!({ "name": "Mystery", "wattage": "lots", "hours_per_day": null }));
        assert_eq!(a.wattage, 0.0);
        assert_eq!(a.hours_per_day, 0.0);
        assert_eq!(a.daily_energy_wh(), 0.0);
    }

    #[test]
    fn test_numeric_strings_are_accepted() {
        let a = parse(json!({ "name": "Fan", "wattage": "75", "hours_per_day": "8.5" }));
        assert_eq!(a.wattage, 75.0);
        assert_eq!(a.hours_per_day, 8.5);
    }

    #[test]
    fn test_empty_object() {
        let a = parse(json!({}));
        assert_eq!(a, ApplianceLoad::new("", 0.0, 0.0, 1));
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(serde_json::from_value::<ApplianceLoad>(json!("fridge")).is_err());
    }
}
