//! The seam between the lookup pipeline and the remote services.

use async_trait::async_trait;

use crate::error::LookupError;
use crate::models::{Location, WeatherReading};
use crate::zip::PostalCode;

/// A geocoder plus a weather observation source.
///
/// [`GeoNamesClient`](crate::GeoNamesClient) is the HTTP implementation;
/// tests substitute in-memory ones.
#[async_trait]
pub trait WeatherService: Send + Sync {
    /// Resolve a postal code to its best-matching place.
    async fn locate(
        &self,
        postal_code: &PostalCode,
    ) -> Result<Location, LookupError>;

    /// Fetch the observation nearest to `location`.
    async fn observe(
        &self,
        location: &Location,
    ) -> Result<WeatherReading, LookupError>;
}
