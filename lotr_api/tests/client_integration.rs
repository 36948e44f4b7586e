use lotr_api::{Client, Error, Filter, FilterComparison, MovieField, MovieQuery, QuoteField, QuoteQuery};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn construction_requires_base_url() {
    let err = Client::new("", "some-token").err().unwrap();
    assert_eq!(err.to_string(), "Base API URL is missing.");
}

#[test]
fn construction_requires_token() {
    let err = Client::new("http://localhost", "").err().unwrap();
    assert_eq!(err.to_string(), "Authentication token is missing.");
}

#[tokio::test]
async fn get_movies_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("movies.json");

    Mock::given(method("GET"))
        .and(path("/movie"))
        .and(header("Authorization", "Bearer some-token"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri(), "some-token").unwrap();
    let resp = client.get_movies(None).await.unwrap();

    assert_eq!(resp.docs.len(), 3);
    assert_eq!(resp.docs[0].name, "The Fellowship of the Ring");
    assert_eq!(resp.total, 3);
}

#[tokio::test]
async fn get_movies_with_filter_sends_query() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("movies.json");

    Mock::given(method("GET"))
        .and(path("/movie"))
        .and(query_param("name", "The Two Towers"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri(), "some-token").unwrap();
    let query = MovieQuery::default().with_filter(
        MovieField::Name,
        Filter::new(FilterComparison::Equal, "The Two Towers"),
    );
    let result = client.get_movies(Some(&query)).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn get_quotes_exists_filter_sends_bare_field() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("quotes.json");

    Mock::given(method("GET"))
        .and(path("/quote"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri(), "some-token").unwrap();
    let query = QuoteQuery::default().with_filter(QuoteField::Dialog, Filter::exists());
    client.get_quotes(Some(&query)).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), Some("dialog"));
}

#[tokio::test]
async fn get_movie_by_id() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("movies.json");

    Mock::given(method("GET"))
        .and(path("/movie/5cd95395de30eff6ebccde5c"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri(), "some-token").unwrap();
    let result = client.get_movie("5cd95395de30eff6ebccde5c").await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn get_quotes_for_movie() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("quotes.json");

    Mock::given(method("GET"))
        .and(path("/movie/5cd95395de30eff6ebccde5c/quote"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri(), "some-token").unwrap();
    let resp = client
        .get_movie_quotes("5cd95395de30eff6ebccde5c")
        .await
        .unwrap();
    assert_eq!(resp.docs.len(), 2);
    assert_eq!(resp.docs[0].movie, "5cd95395de30eff6ebccde5c");
}

#[tokio::test]
async fn get_quote_by_id() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("quotes.json");

    Mock::given(method("GET"))
        .and(path("/quote/5cd96e05de30eff6ebcce7e9"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri(), "some-token").unwrap();
    let result = client.get_quote("5cd96e05de30eff6ebcce7e9").await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn non_success_status_carries_status_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri(), "some-token").unwrap();
    let err = client.get_movies(None).await.err().unwrap();
    assert!(matches!(err, Error::RequestFailed(_)));
    assert_eq!(err.to_string(), "Request failed: Not Found");
}

#[tokio::test]
async fn malformed_json_body_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::new(mock_server.uri(), "some-token").unwrap();
    let err = client.get_movies(None).await.err().unwrap();
    assert!(matches!(err, Error::Json(_)));
}

#[tokio::test]
async fn cleared_token_fails_before_sending() {
    let mock_server = MockServer::start().await;

    let mut client = Client::new(mock_server.uri(), "some-token").unwrap();
    client.clear_token();

    let err = client.get_movies(None).await.err().unwrap();
    assert!(matches!(err, Error::AuthenticationRequired));
    assert_eq!(err.to_string(), "Request failed: Authentication required.");

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}
