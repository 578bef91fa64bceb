use async_trait::async_trait;
use std::sync::Arc;

use super::error::ResolutionError;
use super::geocode::{Coordinate, PlaceId, SearchResult};
use super::route::RawRoute;

#[async_trait]
pub trait PlaceResolver: Send + Sync {
    /// Resolves a coordinate to the identifier of the first matching place.
    async fn resolve(&self, coordinate: Coordinate) -> Result<PlaceId, ResolutionError>;
}

#[async_trait]
pub trait RouteFetcher: Send + Sync {
    /// Fetches the first driving route between two places.
    async fn fetch_route(
        &self,
        origin: &PlaceId,
        destination: &PlaceId,
    ) -> Result<RawRoute, ResolutionError>;
}

#[async_trait]
pub trait PlaceSearch: Send + Sync {
    /// Resolves a free-text address to a single place.
    async fn search(&self, query: &str) -> Result<SearchResult, ResolutionError>;
}

#[async_trait]
impl<T: PlaceResolver + ?Sized> PlaceResolver for Arc<T> {
    async fn resolve(&self, coordinate: Coordinate) -> Result<PlaceId, ResolutionError> {
        (**self).resolve(coordinate).await
    }
}

#[async_trait]
impl<T: RouteFetcher + ?Sized> RouteFetcher for Arc<T> {
    async fn fetch_route(
        &self,
        origin: &PlaceId,
        destination: &PlaceId,
    ) -> Result<RawRoute, ResolutionError> {
        (**self).fetch_route(origin, destination).await
    }
}

#[async_trait]
impl<T: PlaceSearch + ?Sized> PlaceSearch for Arc<T> {
    async fn search(&self, query: &str) -> Result<SearchResult, ResolutionError> {
        (**self).search(query).await
    }
}
