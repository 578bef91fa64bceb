use super::error::ResolutionError;
use super::geocode::{Coordinate, PlaceId};
use super::provider::GoogleMapsProvider;
use super::route::{self, RawRoute, RoutePath};
use super::service::{PlaceResolver, RouteFetcher};
use crate::sdk::config::MapsConfig;

/// Sequences resolve → fetch → decode for one origin/destination pair.
///
/// Holds no per-request state, so one pipeline can serve any number of
/// concurrent invocations.
pub struct DirectionsPipeline<R, F> {
    resolver: R,
    fetcher: F,
}

impl DirectionsPipeline<GoogleMapsProvider, GoogleMapsProvider> {
    /// Both stages served by the Google Maps web services.
    pub fn google(config: MapsConfig) -> Self {
        let provider = GoogleMapsProvider::new(config);
        Self::new(provider.clone(), provider)
    }
}

impl<R: PlaceResolver, F: RouteFetcher> DirectionsPipeline<R, F> {
    pub fn new(resolver: R, fetcher: F) -> Self {
        Self { resolver, fetcher }
    }

    pub async fn resolve(&self, coordinate: Coordinate) -> Result<PlaceId, ResolutionError> {
        self.resolver.resolve(coordinate).await
    }

    pub async fn fetch_route(
        &self,
        origin: &PlaceId,
        destination: &PlaceId,
    ) -> Result<RawRoute, ResolutionError> {
        self.fetcher.fetch_route(origin, destination).await
    }

    pub fn decode(&self, route: &RawRoute) -> Option<RoutePath> {
        route::decode(route)
    }

    /// Drivable path from the user's position to an already identified destination.
    ///
    /// The first failing stage's error is returned as is. A route that was
    /// fetched but carries no usable geometry counts as `NotFound`.
    pub async fn directions_to_search_result(
        &self,
        user_coordinate: Coordinate,
        destination: &PlaceId,
    ) -> Result<RoutePath, ResolutionError> {
        let origin = self.resolve(user_coordinate).await?;
        log::debug!("User at {} resolved to place {}", user_coordinate, origin);

        let raw = self.fetch_route(&origin, destination).await?;

        match self.decode(&raw) {
            Some(path) => {
                log::info!(
                    "Route {} -> {} decoded into {} points",
                    origin,
                    destination,
                    path.len()
                );
                Ok(path)
            }
            None => {
                log::warn!(
                    "Route {} -> {} has no usable geometry",
                    origin,
                    destination
                );
                Err(ResolutionError::NotFound(format!(
                    "Route from {} to {} has no drawable geometry",
                    origin, destination
                )))
            }
        }
    }
}
