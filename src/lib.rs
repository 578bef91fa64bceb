pub mod sdk;

pub use sdk::config::MapsConfig;
pub use sdk::host::{DirectionsSession, LocationSource, MapProvider, RouteOverlay, RouteSink};
pub use sdk::routing::{
    Coordinate, DirectionsPipeline, GoogleMapsProvider, PlaceId, RawRoute, ResolutionError,
    RoutePath,
};
pub use sdk::util::latest::{LatestRequest, RequestTicket};
