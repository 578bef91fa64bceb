pub mod error;
pub mod geocode;
pub mod pipeline;
pub mod polyline;
pub mod provider;
pub mod route;
pub mod service;

pub use error::ResolutionError;
pub use geocode::{Coordinate, CoordinateError, PlaceId, SearchResult};
pub use pipeline::DirectionsPipeline;
pub use provider::GoogleMapsProvider;
pub use route::{decode, RawRoute, RoutePath, RouteSummary};
pub use service::{PlaceResolver, PlaceSearch, RouteFetcher};
