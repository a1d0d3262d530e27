use tracing::{debug, info};

use crate::error::LookupError;
use crate::models::Forecast;
use crate::service::WeatherService;
use crate::zip::PostalCode;

/// Runs one search: validate the postal code, geocode it, then fetch weather
/// for the returned coordinates.
///
/// Both remote calls share a single error boundary; if either fails the
/// search yields no forecast. Nothing is retried.
pub struct WeatherLookup<S> {
    service: S,
}

impl<S: WeatherService> WeatherLookup<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub async fn search(
        &self,
        input: &str,
    ) -> Result<Forecast, LookupError> {
        let postal_code = PostalCode::parse(input)?;

        debug!(%postal_code, "geocoding");
        let location = self.service.locate(&postal_code).await?;

        debug!(place = %location.place_name, lat = %location.latitude, lng = %location.longitude, "fetching weather");
        let reading = self.service.observe(&location).await?;

        info!(%postal_code, place = %location.place_name, "search complete");
        Ok(Forecast {
            postal_code,
            location,
            reading,
        })
    }
}
