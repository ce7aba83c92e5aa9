use playscout_lib::{search, serialize, Client, Error, SearchQuery, SelectorConfig};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn listing_page(hrefs: &[&str]) -> String {
    let cards: String = hrefs
        .iter()
        .map(|href| format!(r#"<a class="card-click-target" href="{}"></a>"#, href))
        .collect();
    format!("<html><body>{}</body></html>", cards)
}

fn detail_page(name: &str, description: &str) -> String {
    format!(
        r#"<html><body>
        <a class="document-subtitle primary">Some Author</a>
        <a class="document-subtitle category">Communication</a>
        <div class="main-content"><div>
          <div itemprop="name">{}</div>
          <div itemprop="description">{}</div>
        </div></div>
    </body></html>"#,
        name, description
    )
}

async fn mount_listing(server: &MockServer, term: &str, body: String) {
    Mock::given(method("GET"))
        .and(path("/store/search"))
        .and(query_param("q", term))
        .and(query_param("c", "apps"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn fan_out_visits_every_candidate_once() {
    let server = MockServer::start().await;
    mount_listing(
        &server,
        "telegram",
        listing_page(&["/apps/a1", "/apps/a2", "/apps/a3"]),
    )
    .await;

    for (p, name) in [
        ("/apps/a1", "Telegram"),
        ("/apps/a2", "Telegram X"),
        ("/apps/a3", "Signal"),
    ] {
        Mock::given(method("GET"))
            .and(path(p))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(detail_page(name, "a messenger")),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = Client::with_base_url(&server.uri()).unwrap();
    let query = SearchQuery::new("telegram").unwrap();
    let outcome = search(&client, &query, &SelectorConfig::default())
        .await
        .unwrap();

    assert_eq!(outcome.dropped, 0);
    let mut names: Vec<&str> = outcome.records.iter().map(|r| r.name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["Telegram", "Telegram X"]);
}

#[tokio::test]
async fn description_match_is_enough_for_inclusion() {
    let server = MockServer::start().await;
    mount_listing(&server, "telegram", listing_page(&["/apps/a1"])).await;
    Mock::given(method("GET"))
        .and(path("/apps/a1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(detail_page(
            "Some Client",
            "An unofficial Telegram client",
        )))
        .mount(&server)
        .await;

    let client = Client::with_base_url(&server.uri()).unwrap();
    let query = SearchQuery::new("telegram").unwrap();
    let outcome = search(&client, &query, &SelectorConfig::default())
        .await
        .unwrap();

    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].name, "Some Client");
}

#[tokio::test]
async fn listing_failure_is_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/store/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = Client::with_base_url(&server.uri()).unwrap();
    let query = SearchQuery::new("telegram").unwrap();
    let result = search(&client, &query, &SelectorConfig::default()).await;
    assert!(matches!(result, Err(Error::ListingUnreachable)));
}

#[tokio::test]
async fn detail_failure_drops_only_that_candidate() {
    let server = MockServer::start().await;
    mount_listing(&server, "telegram", listing_page(&["/apps/ok", "/apps/broken"])).await;
    Mock::given(method("GET"))
        .and(path("/apps/ok"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(detail_page("Telegram", "a messenger")),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/apps/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = Client::with_base_url(&server.uri()).unwrap();
    let query = SearchQuery::new("telegram").unwrap();
    let outcome = search(&client, &query, &SelectorConfig::default())
        .await
        .unwrap();

    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.dropped, 1);
}

#[tokio::test]
async fn listing_without_cards_yields_empty_outcome() {
    let server = MockServer::start().await;
    mount_listing(
        &server,
        "telegram",
        r#"<html><body><a class="nav" href="/store/home"></a></body></html>"#.to_string(),
    )
    .await;

    let client = Client::with_base_url(&server.uri()).unwrap();
    let query = SearchQuery::new("telegram").unwrap();
    let outcome = search(&client, &query, &SelectorConfig::default())
        .await
        .unwrap();

    assert!(outcome.records.is_empty());
    assert_eq!(outcome.dropped, 0);
}

#[tokio::test]
async fn accepted_records_serialize_to_one_entry_per_app() {
    let server = MockServer::start().await;
    mount_listing(&server, "telegram", listing_page(&["/apps/a1", "/apps/a1"])).await;
    Mock::given(method("GET"))
        .and(path("/apps/a1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(detail_page("Telegram", "a messenger")),
        )
        .mount(&server)
        .await;

    let client = Client::with_base_url(&server.uri()).unwrap();
    let query = SearchQuery::new("telegram").unwrap();
    let outcome = search(&client, &query, &SelectorConfig::default())
        .await
        .unwrap();

    // The listing repeated the same card, so two records came back but the
    // keyed document collapses them.
    assert_eq!(outcome.records.len(), 2);
    let bytes = serialize::to_keyed_json(&outcome.records).unwrap();
    let doc: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(doc.as_object().unwrap().len(), 1);
}
