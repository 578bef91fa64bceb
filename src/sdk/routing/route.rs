use serde::{Deserialize, Serialize};

use super::geocode::Coordinate;
use super::polyline;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteSummary {
    pub distance_km: f64,
    pub duration_hours: f64,
}

/// One route exactly as the directions service returned it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRoute {
    #[serde(default)]
    pub overview_polyline: Option<EncodedPolyline>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub legs: Option<Vec<RouteLeg>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EncodedPolyline {
    #[serde(default)]
    pub points: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    #[serde(default)]
    pub distance: Option<Measure>,
    #[serde(default)]
    pub duration: Option<Measure>,
}

/// A `{ "value": .., "text": .. }` pair; metres for distance, seconds for duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub text: Option<String>,
}

impl RawRoute {
    /// Builds a route carrying only an encoded overview polyline.
    pub fn with_polyline(points: impl Into<String>) -> Self {
        Self {
            overview_polyline: Some(EncodedPolyline {
                points: Some(points.into()),
            }),
            ..Self::default()
        }
    }

    pub fn encoded_points(&self) -> Option<&str> {
        self.overview_polyline.as_ref()?.points.as_deref()
    }

    /// Total distance and duration over all legs, if every leg reports both.
    pub fn summary(&self) -> Option<RouteSummary> {
        let legs = self.legs.as_deref().filter(|legs| !legs.is_empty())?;
        let mut metres = 0.0;
        let mut seconds = 0.0;
        for leg in legs {
            metres += leg.distance.as_ref()?.value?;
            seconds += leg.duration.as_ref()?.value?;
        }
        Some(RouteSummary {
            distance_km: metres / 1000.0,
            duration_hours: seconds / 3600.0,
        })
    }
}

/// Drawable path: at least one point, in travel order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RoutePath(Vec<Coordinate>);

impl RoutePath {
    pub fn points(&self) -> &[Coordinate] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_points(self) -> Vec<Coordinate> {
        self.0
    }
}

/// Decodes the route's overview polyline into a drawable path.
///
/// `None` when the polyline is missing or does not decode to at least one
/// complete point.
pub fn decode(route: &RawRoute) -> Option<RoutePath> {
    let encoded = route.encoded_points()?;
    polyline::decode(encoded).map(RoutePath)
}
