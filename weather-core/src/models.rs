use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::zip::PostalCode;

/// The geocoder's best match for a postal code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub place_name: String,
    /// State or province code, e.g. `WI`.
    pub region_code: String,
    pub latitude: Decimal,
    pub longitude: Decimal,
}

/// Raw observation values as reported by the weather service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature_c: Decimal,
    pub wind_speed_mph: Decimal,
    /// Degrees clockwise from north, `[0, 360)`.
    pub wind_direction_deg: Decimal,
}

/// Everything one search produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Forecast {
    pub postal_code: PostalCode,
    pub location: Location,
    pub reading: WeatherReading,
}
