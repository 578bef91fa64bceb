use super::types::{DirectionsResponse, GeocodingResponse};
use crate::sdk::config::MapsConfig;
use crate::sdk::routing::error::{MapsStatusPayload, ResolutionError};
use crate::sdk::routing::geocode::{Coordinate, PlaceId, SearchResult};
use crate::sdk::routing::route::RawRoute;
use crate::sdk::routing::service::{PlaceResolver, PlaceSearch, RouteFetcher};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

const GEOCODE_PATH: &str = "/maps/api/geocode/json";
const DIRECTIONS_PATH: &str = "/maps/api/directions/json";

// A search matching this many places or more is too vague to pick from.
const MAX_SEARCH_RESULTS: usize = 5;

/// Geocoding and directions backed by the Google Maps web services.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone)]
pub struct GoogleMapsProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GoogleMapsProvider {
    pub fn new(config: MapsConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: MapsConfig, client: Client) -> Self {
        Self {
            client,
            api_key: config.api_key,
            base_url: config.base_url,
        }
    }

    /// Issues one GET and returns the JSON body once the service reported success.
    async fn get_json(&self, path: &str, params: &[(&str, String)]) -> Result<Value, ResolutionError> {
        let url = format!("{}{}", self.base_url, path);

        let response = match self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                let e = e.without_url();
                log::error!(
                    "Failed to send GET request. URL: {}\nParams: {:?}\nError: {}",
                    url,
                    params,
                    e
                );
                return Err(ResolutionError::Transport(format!(
                    "request to {} failed: {}",
                    url, e
                )));
            }
        };

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            // Try to parse the structured error first
            if let Some(err) = serde_json::from_str::<MapsStatusPayload>(&text)
                .ok()
                .and_then(MapsStatusPayload::into_error)
            {
                return Err(err);
            }
            log::error!(
                "API returned non-success status: {}. Unparseable Body: {}",
                status,
                text
            );
            return Err(ResolutionError::Transport(format!(
                "{} returned status {}",
                url, status
            )));
        }

        let body: Value = serde_json::from_str(&text).map_err(|e| {
            log::error!(
                "Failed to parse response. URL: {}\nError: {}. Body: {}",
                url,
                e,
                text
            );
            e
        })?;

        let envelope = MapsStatusPayload::deserialize(&body).unwrap_or_default();
        if let Some(err) = envelope.into_error() {
            log::warn!("{} rejected the request: {}", url, err);
            return Err(err);
        }

        Ok(body)
    }
}

fn parse<'a, T: Deserialize<'a>>(body: &'a Value, what: &str) -> Result<T, ResolutionError> {
    T::deserialize(body).map_err(|e| {
        log::error!("Failed to parse {}. Error: {}. Body: {}", what, e, body);
        ResolutionError::MalformedResponse(format!("{}: {}", what, e))
    })
}

#[async_trait]
impl PlaceResolver for GoogleMapsProvider {
    async fn resolve(&self, coordinate: Coordinate) -> Result<PlaceId, ResolutionError> {
        log::debug!("[PROVIDER] Calling remote geocode for coordinate: {}", coordinate);

        let body = self
            .get_json(GEOCODE_PATH, &[("latlng", coordinate.to_string())])
            .await?;
        let response: GeocodingResponse = parse(&body, "GeocodingResponse")?;

        let first = response
            .results
            .into_iter()
            .next()
            .ok_or_else(|| ResolutionError::NotFound(format!("No place found at {}", coordinate)))?;
        Ok(PlaceId::new(first.place_id))
    }
}

#[async_trait]
impl RouteFetcher for GoogleMapsProvider {
    async fn fetch_route(
        &self,
        origin: &PlaceId,
        destination: &PlaceId,
    ) -> Result<RawRoute, ResolutionError> {
        log::debug!(
            "[PROVIDER] Calling remote directions for {} -> {}",
            origin,
            destination
        );

        let body = self
            .get_json(
                DIRECTIONS_PATH,
                &[
                    ("origin", format!("place_id:{}", origin)),
                    ("destination", format!("place_id:{}", destination)),
                    ("mode", "driving".to_string()),
                ],
            )
            .await?;
        let response: DirectionsResponse = parse(&body, "DirectionsResponse")?;

        response
            .routes
            .and_then(|routes| routes.into_iter().next())
            .ok_or_else(|| {
                ResolutionError::NotFound(format!("No route from {} to {}", origin, destination))
            })
    }
}

#[async_trait]
impl PlaceSearch for GoogleMapsProvider {
    async fn search(&self, query: &str) -> Result<SearchResult, ResolutionError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ResolutionError::NotFound("Empty search query".to_string()));
        }
        log::debug!("[PROVIDER] Calling remote address search for: \"{}\"", query);

        let body = self
            .get_json(GEOCODE_PATH, &[("address", query.to_string())])
            .await?;
        let response: GeocodingResponse = parse(&body, "GeocodingResponse")?;

        let count = response.results.len();
        if count >= MAX_SEARCH_RESULTS {
            return Err(ResolutionError::TooManyResults { count });
        }

        let first = response
            .results
            .into_iter()
            .next()
            .ok_or_else(|| ResolutionError::NotFound(format!("No place matches \"{}\"", query)))?;

        let location = first
            .geometry
            .ok_or_else(|| {
                ResolutionError::MalformedResponse(format!(
                    "Search result {} has no geometry",
                    first.place_id
                ))
            })?
            .location;
        let coordinate = Coordinate::new(location.lat, location.lng)
            .map_err(|e| ResolutionError::MalformedResponse(e.to_string()))?;

        Ok(SearchResult {
            name: first.formatted_address.unwrap_or_else(|| query.to_string()),
            place_id: PlaceId::new(first.place_id),
            coordinate,
        })
    }
}
