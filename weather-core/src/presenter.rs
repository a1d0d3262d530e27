//! Turns raw weather readings into display categories.
//!
//! Temperatures are shown in Fahrenheit and flagged cold or hot; wind speed is
//! flagged windy above a threshold and its direction is named by the nearest
//! of the 16 compass points.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// At or below this many °F a reading is cold.
pub const COLD_BOUND_F: i64 = 34;
/// At or above this many °F a reading is hot.
pub const HEAT_BOUND_F: i64 = 83;
/// Above this many mph a reading is windy.
pub const WIND_BOUND_MPH: i64 = 15;
/// Width of one compass sector in degrees.
pub const COMPASS_SECTOR_DEG: Decimal = Decimal::from_parts(225, 0, 0, false, 1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureCategory {
    Cold,
    Normal,
    Hot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemperatureReading {
    pub fahrenheit: i64,
    pub category: TemperatureCategory,
}

/// The 16 points of the compass, clockwise from north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompassPoint {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

impl CompassPoint {
    pub const ALL: [CompassPoint; 16] = [
        CompassPoint::N,
        CompassPoint::NNE,
        CompassPoint::NE,
        CompassPoint::ENE,
        CompassPoint::E,
        CompassPoint::ESE,
        CompassPoint::SE,
        CompassPoint::SSE,
        CompassPoint::S,
        CompassPoint::SSW,
        CompassPoint::SW,
        CompassPoint::WSW,
        CompassPoint::W,
        CompassPoint::WNW,
        CompassPoint::NW,
        CompassPoint::NNW,
    ];

    /// The compass point whose 22.5° sector contains `degrees`.
    ///
    /// Sector index is `round(degrees / 22.5) mod 16`, so 360° (and any
    /// multiple of it) is north.
    pub fn from_degrees(degrees: Decimal) -> Self {
        let index = round_half_up(degrees / COMPASS_SECTOR_DEG).rem_euclid(16);
        // rem_euclid(16) is always in 0..16
        Self::ALL[index as usize]
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompassPoint::N => "N",
            CompassPoint::NNE => "NNE",
            CompassPoint::NE => "NE",
            CompassPoint::ENE => "ENE",
            CompassPoint::E => "E",
            CompassPoint::ESE => "ESE",
            CompassPoint::SE => "SE",
            CompassPoint::SSE => "SSE",
            CompassPoint::S => "S",
            CompassPoint::SSW => "SSW",
            CompassPoint::SW => "SW",
            CompassPoint::WSW => "WSW",
            CompassPoint::W => "W",
            CompassPoint::WNW => "WNW",
            CompassPoint::NW => "NW",
            CompassPoint::NNW => "NNW",
        }
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindReading {
    pub speed_mph: Decimal,
    pub compass: CompassPoint,
    pub is_windy: bool,
}

/// Thresholds used to categorise readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenterBounds {
    pub cold_bound_f: i64,
    pub heat_bound_f: i64,
    pub wind_bound_mph: Decimal,
}

impl Default for PresenterBounds {
    fn default() -> Self {
        Self {
            cold_bound_f: COLD_BOUND_F,
            heat_bound_f: HEAT_BOUND_F,
            wind_bound_mph: Decimal::from(WIND_BOUND_MPH),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WeatherPresenter {
    bounds: PresenterBounds,
}

impl WeatherPresenter {
    pub fn new(bounds: PresenterBounds) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> &PresenterBounds {
        &self.bounds
    }

    /// Converts Celsius to whole Fahrenheit and picks a category.
    ///
    /// Cold is inclusive of the cold bound, hot inclusive of the heat bound.
    pub fn classify_temperature(
        &self,
        temp_c: Decimal,
    ) -> TemperatureReading {
        let fahrenheit = round_half_up(
            temp_c.saturating_mul(Decimal::from(9)) / Decimal::from(5) + Decimal::from(32),
        );
        let category = if fahrenheit <= self.bounds.cold_bound_f {
            TemperatureCategory::Cold
        } else if fahrenheit >= self.bounds.heat_bound_f {
            TemperatureCategory::Hot
        } else {
            TemperatureCategory::Normal
        };

        TemperatureReading {
            fahrenheit,
            category,
        }
    }

    /// Names the wind direction and flags speeds strictly above the wind bound.
    pub fn classify_wind(
        &self,
        speed_mph: Decimal,
        direction_deg: Decimal,
    ) -> WindReading {
        WindReading {
            speed_mph,
            compass: CompassPoint::from_degrees(direction_deg),
            is_windy: speed_mph > self.bounds.wind_bound_mph,
        }
    }
}

/// [`WeatherPresenter::classify_temperature`] with the default bounds.
pub fn classify_temperature(temp_c: Decimal) -> TemperatureReading {
    WeatherPresenter::default().classify_temperature(temp_c)
}

/// [`WeatherPresenter::classify_wind`] with the default bounds.
pub fn classify_wind(
    speed_mph: Decimal,
    direction_deg: Decimal,
) -> WindReading {
    WeatherPresenter::default().classify_wind(speed_mph, direction_deg)
}

/// Rounds to the nearest integer, halves toward positive infinity.
fn round_half_up(value: Decimal) -> i64 {
    let rounded = value.saturating_add(Decimal::new(5, 1)).floor();
    rounded.to_i64().unwrap_or(if rounded.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // classify_temperature tests
    // =========================================================================

    #[test]
    fn one_celsius_is_cold() {
        // 33.8°F rounds to 34, which is on the cold bound
        assert_eq!(
            classify_temperature(dec!(1)),
            TemperatureReading {
                fahrenheit: 34,
                category: TemperatureCategory::Cold,
            }
        );
    }

    #[test]
    fn thirty_celsius_is_hot() {
        assert_eq!(
            classify_temperature(dec!(30)),
            TemperatureReading {
                fahrenheit: 86,
                category: TemperatureCategory::Hot,
            }
        );
    }

    #[test]
    fn twenty_celsius_is_normal() {
        assert_eq!(
            classify_temperature(dec!(20)),
            TemperatureReading {
                fahrenheit: 68,
                category: TemperatureCategory::Normal,
            }
        );
    }

    #[test]
    fn normal_band_edges() {
        // 35°F and 82°F are the first and last normal readings
        assert_eq!(classify_temperature(dec!(1.7)).fahrenheit, 35);
        assert_eq!(classify_temperature(dec!(1.7)).category, TemperatureCategory::Normal);
        assert_eq!(classify_temperature(dec!(27.8)).fahrenheit, 82);
        assert_eq!(classify_temperature(dec!(27.8)).category, TemperatureCategory::Normal);
        assert_eq!(classify_temperature(dec!(28.4)).fahrenheit, 83);
        assert_eq!(classify_temperature(dec!(28.4)).category, TemperatureCategory::Hot);
    }

    #[test]
    fn negative_half_degrees_round_toward_positive() {
        // -8.5°F -> -8
        assert_eq!(classify_temperature(dec!(-22.5)).fahrenheit, -8);
    }

    #[test]
    fn extreme_temperatures_saturate() {
        assert_eq!(classify_temperature(Decimal::MAX).fahrenheit, i64::MAX);
        assert_eq!(classify_temperature(Decimal::MIN).fahrenheit, i64::MIN);
        assert_eq!(classify_temperature(Decimal::MAX).category, TemperatureCategory::Hot);
    }

    #[test]
    fn custom_bounds_shift_categories() {
        let presenter = WeatherPresenter::new(PresenterBounds {
            cold_bound_f: 50,
            heat_bound_f: 70,
            wind_bound_mph: dec!(5),
        });

        assert_eq!(presenter.classify_temperature(dec!(10)).category, TemperatureCategory::Cold);
        assert_eq!(presenter.classify_temperature(dec!(25)).category, TemperatureCategory::Hot);
        assert!(presenter.classify_wind(dec!(6), dec!(0)).is_windy);
    }

    // =========================================================================
    // classify_wind tests
    // =========================================================================

    #[test]
    fn strong_north_wind_is_windy() {
        let wind = classify_wind(dec!(20), dec!(0));

        assert!(wind.is_windy);
        assert_eq!(wind.compass.label(), "N");
    }

    #[test]
    fn light_south_wind_is_calm() {
        let wind = classify_wind(dec!(5), dec!(180));

        assert!(!wind.is_windy);
        assert_eq!(wind.compass.label(), "S");
    }

    #[test]
    fn wind_bound_is_exclusive() {
        assert!(!classify_wind(dec!(15), dec!(90)).is_windy);
        assert!(classify_wind(dec!(15.1), dec!(90)).is_windy);
    }

    #[test]
    fn full_circle_wraps_to_north() {
        assert_eq!(classify_wind(dec!(1), dec!(360)).compass, CompassPoint::N);
        assert_eq!(classify_wind(dec!(1), dec!(0)).compass, CompassPoint::N);
        assert_eq!(classify_wind(dec!(1), dec!(355)).compass, CompassPoint::N);
    }

    #[test]
    fn sector_boundaries_round_half_up() {
        // 11.25° is exactly half a sector
        assert_eq!(CompassPoint::from_degrees(dec!(11.24)), CompassPoint::N);
        assert_eq!(CompassPoint::from_degrees(dec!(11.25)), CompassPoint::NNE);
        assert_eq!(CompassPoint::from_degrees(dec!(348.74)), CompassPoint::NNW);
        assert_eq!(CompassPoint::from_degrees(dec!(348.75)), CompassPoint::N);
    }

    #[test]
    fn every_sector_center_maps_to_its_point() {
        for (index, point) in CompassPoint::ALL.iter().enumerate() {
            let center = Decimal::from(index as i64) * COMPASS_SECTOR_DEG;
            assert_eq!(CompassPoint::from_degrees(center), *point, "at {center}");
        }
    }

    #[test]
    fn labels_match_variant_names() {
        let labels: Vec<_> = CompassPoint::ALL.iter().map(CompassPoint::label).collect();

        assert_eq!(
            labels,
            vec![
                "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W",
                "WNW", "NW", "NNW",
            ]
        );
    }
}
