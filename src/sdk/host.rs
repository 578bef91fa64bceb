//! Seams between the directions pipeline and the UI shell that hosts it.
//!
//! The shell owns rendering and the location sensor; it hands both in
//! explicitly, together with whichever map provider is currently shown.

use serde::Serialize;

use super::routing::error::ResolutionError;
use super::routing::geocode::{Coordinate, PlaceId};
use super::routing::pipeline::DirectionsPipeline;
use super::routing::route::RoutePath;
use super::routing::service::{PlaceResolver, RouteFetcher};
use super::util::latest::LatestRequest;

/// Map renderer currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MapProvider {
    Apple,
    Google,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrokeStyle {
    pub width: f32,
    /// RGB, 0-255 per channel.
    pub color: [u8; 3],
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            width: 3.0,
            color: [0, 0, 255],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteOverlay {
    pub path: RoutePath,
    pub style: StrokeStyle,
}

impl RouteOverlay {
    pub fn new(path: RoutePath) -> Self {
        Self {
            path,
            style: StrokeStyle::default(),
        }
    }
}

pub trait LocationSource: Send + Sync {
    /// Last known device position, `None` while unknown or not permitted.
    fn current_location(&self) -> Option<Coordinate>;
}

pub trait RouteSink {
    /// Removes the route overlay previously drawn on `provider`, if any.
    fn clear(&mut self, provider: MapProvider);

    fn draw(&mut self, provider: MapProvider, overlay: RouteOverlay);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Drawn { points: usize },
    /// A newer request was issued while this one was in flight.
    Superseded,
    /// The device position is not available yet.
    NoLocation,
}

/// Runs "directions from here to the searched place" for a UI shell.
///
/// Only the newest request's route reaches the sink; older ones finishing
/// late are dropped.
pub struct DirectionsSession<R, F, L> {
    pipeline: DirectionsPipeline<R, F>,
    location: L,
    latest: LatestRequest,
}

impl<R, F, L> DirectionsSession<R, F, L>
where
    R: PlaceResolver,
    F: RouteFetcher,
    L: LocationSource,
{
    pub fn new(pipeline: DirectionsPipeline<R, F>, location: L) -> Self {
        Self {
            pipeline,
            location,
            latest: LatestRequest::new(),
        }
    }

    pub fn pipeline(&self) -> &DirectionsPipeline<R, F> {
        &self.pipeline
    }

    /// Fetches the route and hands it to `sink` unless it went stale.
    ///
    /// Errors are only reported for the newest request.
    pub async fn show_directions<S: RouteSink>(
        &self,
        destination: &PlaceId,
        provider: MapProvider,
        sink: &mut S,
    ) -> Result<SessionOutcome, ResolutionError> {
        let ticket = self.latest.issue();

        let Some(user) = self.location.current_location() else {
            log::info!("No device location yet, skipping directions to {}", destination);
            return Ok(SessionOutcome::NoLocation);
        };

        let result = self
            .pipeline
            .directions_to_search_result(user, destination)
            .await;

        let Some(result) = self.latest.settle(ticket, result) else {
            return Ok(SessionOutcome::Superseded);
        };

        let path = result?;
        let points = path.len();
        sink.clear(provider);
        sink.draw(provider, RouteOverlay::new(path));
        Ok(SessionOutcome::Drawn { points })
    }
}
