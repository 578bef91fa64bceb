use serde::Deserialize;

use crate::sdk::routing::route::RawRoute;

// --- Data Structures for parsing Maps web service responses ---

#[derive(Deserialize)]
pub struct GeocodingResponse {
    pub results: Vec<GeocodingResult>,
}
#[derive(Deserialize)]
pub struct GeocodingResult {
    pub place_id: String,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub geometry: Option<ResultGeometry>,
}
#[derive(Deserialize)]
pub struct ResultGeometry {
    pub location: LatLng,
}
#[derive(Deserialize, Clone, Copy)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Deserialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub routes: Option<Vec<RawRoute>>,
}
