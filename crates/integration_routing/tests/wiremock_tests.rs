//! Integration tests for the geocoding and routing clients (wiremock-based)

use std::time::{Duration, Instant};

use domain::Coordinate;
use wiremock::matchers::{header, method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_routing::{
    FetchConfig, FetchError, GeocodingClient, GeocodingError, NominatimConfig,
    NominatimGeocodingClient, OsrmConfig, OsrmRoutingClient, RoutingClient, RoutingError,
};

fn geocoding_config(base_url: &str) -> NominatimConfig {
    NominatimConfig {
        base_url: base_url.to_string(),
        ..NominatimConfig::for_testing()
    }
}

fn routing_config(base_url: &str) -> OsrmConfig {
    OsrmConfig {
        timeout_secs: 5,
        ..OsrmConfig::new(base_url)
    }
}

fn houten() -> Coordinate {
    Coordinate::new(52.0277, 5.1683).unwrap()
}

fn amersfoort() -> Coordinate {
    Coordinate::new(52.1561, 5.3878).unwrap()
}

const fn sample_search_json() -> &'static str {
    r#"[{
        "place_id": 1,
        "lat": "52.0277",
        "lon": "5.1683",
        "display_name": "Houten, Utrecht, Nederland"
    }]"#
}

const fn sample_route_json() -> &'static str {
    r#"{
        "code": "Ok",
        "routes": [{ "distance": 20000.0, "duration": 1080.0, "weight": 1080.0, "legs": [] }],
        "waypoints": []
    }"#
}

#[tokio::test]
async fn test_geocode_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "3992, Houten, Netherlands"))
        .and(query_param("format", "json"))
        .and(query_param("limit", "1"))
        .and(query_param("countrycodes", "nl"))
        .and(header("user-agent", "Afstand-Checker/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_search_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client =
        NominatimGeocodingClient::new(&geocoding_config(&server.uri()), FetchConfig::for_testing())
            .unwrap();

    let coord = client.geocode("3992, Houten, Netherlands").await.unwrap();
    assert!((coord.latitude() - 52.0277).abs() < 1e-9);
    assert!((coord.longitude() - 5.1683).abs() < 1e-9);
}

#[tokio::test]
async fn test_geocode_without_country_filter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Antwerpen"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"[{ "lat": "51.2194", "lon": "4.4025" }]"#,
        ))
        .mount(&server)
        .await;

    let config = NominatimConfig {
        country_filter: String::new(),
        ..geocoding_config(&server.uri())
    };
    let client = NominatimGeocodingClient::new(&config, FetchConfig::for_testing()).unwrap();

    let coord = client.geocode("Antwerpen").await.unwrap();
    assert!((coord.latitude() - 51.2194).abs() < 1e-9);

    let requests = server.received_requests().await.unwrap();
    assert!(
        requests[0]
            .url
            .query_pairs()
            .all(|(key, _)| key != "countrycodes")
    );
}

#[tokio::test]
async fn test_geocode_empty_result_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&server)
        .await;

    let client =
        NominatimGeocodingClient::new(&geocoding_config(&server.uri()), FetchConfig::for_testing())
            .unwrap();

    let err = client.geocode("Atlantis, Netherlands").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_geocode_forbidden_is_request_failed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&server)
        .await;

    let client =
        NominatimGeocodingClient::new(&geocoding_config(&server.uri()), FetchConfig::for_testing())
            .unwrap();

    let err = client.geocode("Houten").await.unwrap_err();
    assert!(matches!(err, GeocodingError::RequestFailed(403)));
}

#[tokio::test]
async fn test_geocode_server_error_exhausts_retries() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&server)
        .await;

    let client =
        NominatimGeocodingClient::new(&geocoding_config(&server.uri()), FetchConfig::for_testing())
            .unwrap();

    let err = client.geocode("Houten").await.unwrap_err();
    match err {
        GeocodingError::Transport(fetch) => assert_eq!(fetch.attempts(), Some(3)),
        other => panic!("expected transport failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_geocode_malformed_body_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client =
        NominatimGeocodingClient::new(&geocoding_config(&server.uri()), FetchConfig::for_testing())
            .unwrap();

    let err = client.geocode("Houten").await.unwrap_err();
    assert!(matches!(err, GeocodingError::ParseError(_)));
}

#[tokio::test]
async fn test_route_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/route/v1/driving/5.1683,52.0277;5.3878,52.1561"))
        .and(query_param("overview", "false"))
        .and(query_param("alternatives", "false"))
        .and(query_param("steps", "false"))
        .and(query_param("annotations", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_route_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client =
        OsrmRoutingClient::new(&routing_config(&server.uri()), FetchConfig::for_testing()).unwrap();

    let summary = client.route(&houten(), &amersfoort()).await.unwrap();
    assert!((summary.distance_km - 20.0).abs() < 1e-9);
    assert!((summary.duration_minutes - 18.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_route_custom_profile() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/route/v1/bike/.+;.+$"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_route_json()))
        .expect(1)
        .mount(&server)
        .await;

    let config = OsrmConfig {
        profile: "bike".to_string(),
        ..routing_config(&server.uri())
    };
    let client = OsrmRoutingClient::new(&config, FetchConfig::for_testing()).unwrap();

    assert!(client.route(&houten(), &amersfoort()).await.is_ok());
}

#[tokio::test]
async fn test_route_no_route_code() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/route/v1/driving/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{ "code": "NoRoute", "message": "Impossible route between points" }"#,
        ))
        .mount(&server)
        .await;

    let client =
        OsrmRoutingClient::new(&routing_config(&server.uri()), FetchConfig::for_testing()).unwrap();

    let err = client.route(&houten(), &amersfoort()).await.unwrap_err();
    assert!(matches!(err, RoutingError::NoRoute { .. }));
}

#[tokio::test]
async fn test_route_empty_routes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/route/v1/driving/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{ "code": "Ok", "routes": [] }"#))
        .mount(&server)
        .await;

    let client =
        OsrmRoutingClient::new(&routing_config(&server.uri()), FetchConfig::for_testing()).unwrap();

    let err = client.route(&houten(), &amersfoort()).await.unwrap_err();
    assert!(matches!(err, RoutingError::NoRoute { .. }));
}

#[tokio::test]
async fn test_route_client_error_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/route/v1/driving/"))
        .respond_with(ResponseTemplate::new(400).set_body_string(
            r#"{ "code": "InvalidQuery", "message": "Query string malformed" }"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client =
        OsrmRoutingClient::new(&routing_config(&server.uri()), FetchConfig::for_testing()).unwrap();

    let err = client.route(&houten(), &amersfoort()).await.unwrap_err();
    assert!(matches!(err, RoutingError::RequestFailed(400)));
}

#[tokio::test]
async fn test_route_server_error_three_times_is_transport_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/route/v1/driving/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&server)
        .await;

    let fetch = FetchConfig::for_testing();
    let base = fetch.backoff_base();
    let client = OsrmRoutingClient::new(&routing_config(&server.uri()), fetch).unwrap();

    let start = Instant::now();
    let err = client.route(&houten(), &amersfoort()).await.unwrap_err();
    let elapsed = start.elapsed();

    match err {
        RoutingError::Transport(FetchError::Exhausted { attempts, last }) => {
            assert_eq!(attempts, 3);
            assert!(matches!(*last, FetchError::ServerError { status: 500, .. }));
        },
        other => panic!("expected exhausted transport failure, got {other:?}"),
    }

    // Slept base * 1 before attempt 2 and base * 2 before attempt 3
    assert!(elapsed >= base * 3);
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_route_recovers_after_transient_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/route/v1/driving/"))
        .respond_with(ResponseTemplate::new(502))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/route/v1/driving/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_route_json()))
        .mount(&server)
        .await;

    let client =
        OsrmRoutingClient::new(&routing_config(&server.uri()), FetchConfig::for_testing()).unwrap();

    let summary = client.route(&houten(), &amersfoort()).await.unwrap();
    assert!((summary.duration_minutes - 18.0).abs() < 1e-9);
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_route_timeout_is_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/route/v1/driving/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(sample_route_json())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = OsrmConfig {
        timeout_secs: 1,
        ..routing_config(&server.uri())
    };
    let client = OsrmRoutingClient::new(&config, FetchConfig::new(2, 10)).unwrap();

    let err = client.route(&houten(), &amersfoort()).await.unwrap_err();
    match err {
        RoutingError::Transport(fetch) => assert_eq!(fetch.attempts(), Some(2)),
        other => panic!("expected transport failure, got {other:?}"),
    }
}
