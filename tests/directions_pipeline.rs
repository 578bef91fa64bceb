use bimap_directions::sdk::routing::polyline;
use bimap_directions::{
    Coordinate, DirectionsPipeline, GoogleMapsProvider, MapsConfig, PlaceId, ResolutionError,
};
use mockito::{Matcher, Server, ServerGuard};

const GEOCODE_PATH: &str = "/maps/api/geocode/json";
const DIRECTIONS_PATH: &str = "/maps/api/directions/json";

fn pipeline(server: &ServerGuard) -> DirectionsPipeline<GoogleMapsProvider, GoogleMapsProvider> {
    DirectionsPipeline::google(MapsConfig::new("integration-key", server.url()))
}

fn coord(lat: f64, lon: f64) -> Coordinate {
    Coordinate::new(lat, lon).unwrap()
}

#[tokio::test]
async fn resolves_fetches_and_decodes() {
    let mut server = Server::new_async().await;
    let path = vec![
        coord(50.45012, 30.52341),
        coord(50.44871, 30.51902),
        coord(50.40123, 30.61234),
    ];

    let geocode = server
        .mock("GET", GEOCODE_PATH)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("latlng".into(), "50.45012,30.52341".into()),
            Matcher::UrlEncoded("key".into(), "integration-key".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"OK","results":[{"place_id":"ChIJuser"},{"place_id":"ChIJother"}]}"#)
        .expect(1)
        .create_async()
        .await;

    let body = serde_json::json!({
        "status": "OK",
        "routes": [
            {
                "summary": "E40",
                "overview_polyline": { "points": polyline::encode(&path) },
                "legs": [{ "distance": { "value": 9200 }, "duration": { "value": 1260 } }]
            },
            { "summary": "alternate", "overview_polyline": { "points": "??" } }
        ]
    });
    let directions = server
        .mock("GET", DIRECTIONS_PATH)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("origin".into(), "place_id:ChIJuser".into()),
            Matcher::UrlEncoded("destination".into(), "place_id:ChIJdest".into()),
            Matcher::UrlEncoded("key".into(), "integration-key".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(1)
        .create_async()
        .await;

    let result = pipeline(&server)
        .directions_to_search_result(path[0], &PlaceId::new("ChIJdest"))
        .await
        .unwrap();

    assert_eq!(result.into_points(), path);
    geocode.assert_async().await;
    directions.assert_async().await;
}

#[tokio::test]
async fn failed_resolution_never_requests_directions() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", GEOCODE_PATH)
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;
    let directions = server
        .mock("GET", DIRECTIONS_PATH)
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let err = pipeline(&server)
        .directions_to_search_result(coord(1.0, 1.0), &PlaceId::new("dest"))
        .await
        .unwrap_err();

    assert!(matches!(err, ResolutionError::Transport(_)));
    directions.assert_async().await;
}

#[tokio::test]
async fn route_with_null_polyline_is_not_found() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", GEOCODE_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"results":[{"place_id":"origin"}]}"#)
        .create_async()
        .await;
    server
        .mock("GET", DIRECTIONS_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"routes":[{"overview_polyline":{"points":null}}]}"#)
        .create_async()
        .await;

    let err = pipeline(&server)
        .directions_to_search_result(coord(1.0, 1.0), &PlaceId::new("dest"))
        .await
        .unwrap_err();

    assert!(matches!(err, ResolutionError::NotFound(_)));
}

#[tokio::test]
async fn standalone_stages_are_usable() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", DIRECTIONS_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"routes":[{"overview_polyline":{"points":"_p~iF~ps|U_ulLnnqC_mqNvxq`@"}}]}"#)
        .create_async()
        .await;

    let pipeline = pipeline(&server);
    let raw = pipeline
        .fetch_route(&PlaceId::new("known-origin"), &PlaceId::new("known-dest"))
        .await
        .unwrap();
    let path = pipeline.decode(&raw).unwrap();
    assert_eq!(Some(&path), bimap_directions::sdk::routing::decode(&raw).as_ref());

    assert_eq!(path.len(), 3);
    assert_eq!(path.points()[0], coord(38.5, -120.2));
}
