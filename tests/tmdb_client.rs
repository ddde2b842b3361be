use malix::browse::{BrowseParams, BrowseState};
use malix::error::TmdbError;
use malix::tmdb::{TmdbApi, TmdbClient};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> TmdbClient {
    TmdbClient::new("test-key", server.uri()).expect("client")
}

fn popular_body(total_pages: i64) -> serde_json::Value {
    json!({
        "page": 1,
        "results": [{
            "id": 1,
            "title": "Stub Movie",
            "poster_path": "/stub.jpg",
            "backdrop_path": null,
            "release_date": "2024-01-01",
            "overview": "Stubbed.",
            "vote_average": 6.5,
            "genre_ids": [18]
        }],
        "total_pages": total_pages,
        "total_results": 12000
    })
}

#[tokio::test]
async fn popular_passes_language_page_and_key_upstream() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/popular"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("language", "en-US"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(popular_body(600)))
        .expect(1)
        .mount(&server)
        .await;

    let data = client(&server)
        .fetch_popular("en-US", 1)
        .await
        .expect("popular");
    assert_eq!(data.results.len(), 1);
    assert_eq!(data.results[0].title, "Stub Movie");
    assert_eq!(data.total_pages, 600);

    let (mut view, token) = BrowseState::new(BrowseParams {
        language: "en-US".to_string(),
        page: 1,
    });
    view.resolve(token, Ok(data));
    assert_eq!(view.total_pages(), 500);
}

#[tokio::test]
async fn successful_responses_are_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/popular"))
        .respond_with(ResponseTemplate::new(200).set_body_json(popular_body(3)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    client.fetch_popular("id-ID", 2).await.expect("first");
    let second = client.fetch_popular("id-ID", 2).await.expect("second");
    assert_eq!(second.total_pages, 3);
}

#[tokio::test]
async fn non_success_embeds_status_and_upstream_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/popular"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "status_code": 7,
            "status_message": "Invalid API key: You must be granted a valid key.",
            "success": false
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .fetch_popular("en-US", 1)
        .await
        .expect_err("should fail");
    assert_eq!(err.status(), Some(401));
    assert_eq!(
        err.to_string(),
        "Failed to fetch popular movies: 401 - Invalid API key: You must be granted a valid key."
    );
}

#[tokio::test]
async fn non_json_error_falls_back_to_reason_phrase() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/popular"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let err = client(&server)
        .fetch_popular("en-US", 1)
        .await
        .expect_err("should fail");
    assert_eq!(
        err.to_string(),
        "Failed to fetch popular movies: 500 - Internal Server Error"
    );
}

#[tokio::test]
async fn details_404_is_reported_as_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/424242"))
        .and(query_param("language", "ja-JP"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status_code": 34,
            "status_message": "The resource you requested could not be found.",
            "success": false
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .fetch_details("424242", "ja-JP")
        .await
        .expect_err("should fail");
    assert!(err.is_not_found());
    assert!(err.to_string().starts_with("Failed to fetch movie details 424242: 404"));
}

#[tokio::test]
async fn details_and_videos_deserialize() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/27205"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 27205,
            "title": "Inception",
            "poster_path": "/p.jpg",
            "backdrop_path": "/b.jpg",
            "release_date": "2010-07-15",
            "overview": "Cobb steals secrets.",
            "vote_average": 8.4,
            "genres": [{ "id": 28, "name": "Action" }],
            "runtime": 148,
            "tagline": "Your mind is the scene of the crime."
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/movie/27205/videos"))
        .and(query_param("api_key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 27205,
            "results": [
                { "id": "a", "key": "abc", "name": "Trailer", "site": "YouTube", "type": "Trailer" },
                { "id": "b", "key": "xyz", "name": "Trailer", "site": "Vimeo", "type": "Trailer" }
            ]
        })))
        .mount(&server)
        .await;

    let client = client(&server);
    let movie = client.fetch_details("27205", "en-US").await.expect("details");
    assert_eq!(movie.runtime, Some(148));
    assert_eq!(movie.genres[0].name, "Action");
    let videos = client.fetch_videos("27205").await.expect("videos");
    assert_eq!(videos.results.len(), 2);
    let trailer = malix::tmdb::select_trailer(&videos).expect("trailer");
    assert_eq!(trailer.key, "abc");
}

#[tokio::test]
async fn malformed_body_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/1/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client(&server)
        .fetch_videos("1")
        .await
        .expect_err("should fail");
    assert!(matches!(err, TmdbError::Malformed { .. }));
    assert!(err.to_string().starts_with("Failed to fetch movie videos 1"));
}
