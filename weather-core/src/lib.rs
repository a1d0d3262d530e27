//! Zip-code weather lookup.
//!
//! A postal code is geocoded, the nearest weather observation is fetched for
//! the resulting coordinates, and the raw readings are classified for display.

pub mod error;
pub mod geonames;
pub mod lookup;
pub mod models;
pub mod presenter;
pub mod service;
pub mod zip;

pub use error::{LookupError, Stage};
pub use geonames::{GeoNamesClient, GeoNamesConfig};
pub use lookup::WeatherLookup;
pub use models::{Forecast, Location, WeatherReading};
pub use presenter::{
    CompassPoint, PresenterBounds, TemperatureCategory, TemperatureReading, WeatherPresenter,
    WindReading, classify_temperature, classify_wind,
};
pub use service::WeatherService;
pub use zip::PostalCode;
