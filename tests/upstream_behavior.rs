//! Behaviour tests for the upstream adapter.
//!
//! These drive `PokeApiAdapter` through a canned transport and check what the
//! gateway sees: ids, ordering, sentinels and error shapes.

mod support;

use dexgate_core::{
    CreatureSource, HttpError, HttpErrorKind, HttpResponse, PageRequest, UpstreamErrorKind,
};
use support::{adapter, page_json, FixtureHttpClient, BASE_URL};

// =============================================================================
// Listing
// =============================================================================

#[tokio::test]
async fn list_derives_ids_from_item_urls_in_upstream_order() {
    let client = FixtureHttpClient::new();
    client.respond_json(
        "/creature?limit=20&offset=0",
        page_json(3, &[("bulbasaur", 1), ("charmander", 4), ("squirtle", 7)]),
    );
    let adapter = adapter(client);

    let list = adapter
        .list_creatures(PageRequest::default())
        .await
        .expect("fixture page should parse");

    let ids: Vec<u32> = list.results.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![1, 4, 7]);
    let names: Vec<&str> = list.results.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["bulbasaur", "charmander", "squirtle"]);
    assert_eq!(list.count, 3);
}

#[tokio::test]
async fn list_passes_paging_links_through() {
    let client = FixtureHttpClient::new();
    client.respond_json(
        "/creature?limit=2&offset=2",
        serde_json::json!({
            "count": 1302,
            "next": format!("{BASE_URL}/creature?offset=4&limit=2"),
            "previous": format!("{BASE_URL}/creature?offset=0&limit=2"),
            "results": [
                { "name": "ivysaur", "url": format!("{BASE_URL}/creature/2/") },
                { "name": "oddity", "url": format!("{BASE_URL}/creature/unknown/") }
            ]
        })
        .to_string(),
    );
    let adapter = adapter(client);

    let list = adapter
        .list_creatures(PageRequest::new(2, 2))
        .await
        .expect("fixture page should parse");

    assert_eq!(list.count, 1302);
    assert_eq!(
        list.next.as_deref(),
        Some("https://upstream.test/api/creature?offset=4&limit=2")
    );
    assert!(list.previous.is_some());
    assert_eq!(list.results[0].id, 2);
    assert_eq!(list.results[1].id, 0, "unmatched URL falls back to 0");
}

#[tokio::test]
async fn list_failure_carries_status_and_reason() {
    let client = FixtureHttpClient::new();
    client.respond_status("/creature?limit=20&offset=0", 500);
    let adapter = adapter(client);

    let error = adapter
        .list_creatures(PageRequest::default())
        .await
        .expect_err("500 must fail");

    assert_eq!(error.kind(), UpstreamErrorKind::Status);
    assert_eq!(error.http_status(), Some(500));
    assert_eq!(
        error.message(),
        "failed to fetch creature list: 500 - Internal Server Error"
    );
}

#[tokio::test]
async fn list_treats_missing_collection_as_failure() {
    let client = FixtureHttpClient::new();
    let adapter = adapter(client);

    let error = adapter
        .list_creatures(PageRequest::default())
        .await
        .expect_err("404 on a collection is unexpected");

    assert_eq!(error.http_status(), Some(404));
}

// =============================================================================
// Detail
// =============================================================================

#[tokio::test]
async fn get_returns_normalized_creature() {
    let client = FixtureHttpClient::new();
    client.with_creature(25, "pikachu");
    let adapter = adapter(client);

    let creature = adapter
        .get_creature("pikachu")
        .await
        .expect("fixture should parse")
        .expect("creature exists");

    assert_eq!(creature.id, 25);
    assert_eq!(creature.base_experience, Some(112));
    assert_eq!(
        creature.sprites.official_artwork.as_deref(),
        Some("https://img.test/art/25.png")
    );
    assert_eq!(creature.types[0].slot, 1);
}

#[tokio::test]
async fn get_reports_404_as_sentinel_not_error() {
    let client = FixtureHttpClient::new();
    let adapter = adapter(client.clone());

    let found = adapter.get_creature("9999").await.expect("404 is not an error");

    assert!(found.is_none());
    assert_eq!(
        client.recorded_urls(),
        vec![String::from("https://upstream.test/api/creature/9999")]
    );
}

#[tokio::test]
async fn get_surfaces_other_statuses_as_errors() {
    let client = FixtureHttpClient::new();
    client.respond_status("/creature/25", 503);
    let adapter = adapter(client);

    let error = adapter.get_creature("25").await.expect_err("503 must fail");

    assert_eq!(error.kind(), UpstreamErrorKind::Status);
    assert_eq!(error.reason(), Some("Service Unavailable"));
    assert_eq!(
        error.message(),
        "failed to fetch creature '25': 503 - Service Unavailable"
    );
}

#[tokio::test]
async fn network_failure_is_distinguished_as_no_response() {
    let client = FixtureHttpClient::new();
    client.respond(
        "/creature/25",
        Err(HttpError::new(HttpErrorKind::Connect, "connection refused")),
    );
    let adapter = adapter(client);

    let error = adapter.get_creature("25").await.expect_err("must fail");

    assert_eq!(error.kind(), UpstreamErrorKind::NoResponse);
    assert_eq!(error.http_status(), None);
    assert!(error.message().contains("no response from upstream"));
}

#[tokio::test(start_paused = true)]
async fn stalled_upstream_times_out() {
    let client = FixtureHttpClient::stalled();
    let adapter = adapter(client);

    let error = adapter.get_creature("25").await.expect_err("must time out");

    assert_eq!(error.kind(), UpstreamErrorKind::NoResponse);
    assert!(error.message().contains("timed out"), "{}", error.message());
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn search_filters_one_bounded_page_case_insensitively() {
    let client = FixtureHttpClient::new();
    client.respond_json(
        "/creature?limit=1000&offset=0",
        page_json(
            5,
            &[
                ("pichu", 172),
                ("bulbasaur", 1),
                ("pikachu", 25),
                ("raichu", 26),
                ("pikipek", 731),
            ],
        ),
    );
    let adapter = adapter(client.clone());

    let results = adapter.search_creatures("  PiK ").await.expect("search works");

    let found: Vec<(u32, &str)> = results
        .iter()
        .map(|item| (item.id, item.name.as_str()))
        .collect();
    assert_eq!(found, vec![(25, "pikachu"), (731, "pikipek")]);
    assert_eq!(client.request_count(), 1);
}

#[tokio::test]
async fn search_without_matches_is_empty() {
    let client = FixtureHttpClient::new();
    client.respond_json(
        "/creature?limit=1000&offset=0",
        page_json(1, &[("bulbasaur", 1)]),
    );
    let adapter = adapter(client);

    let results = adapter.search_creatures("zzz").await.expect("search works");
    assert!(results.is_empty());
}

#[tokio::test]
async fn search_failure_names_the_operation() {
    let client = FixtureHttpClient::new();
    client.respond(
        "/creature?limit=1000&offset=0",
        Ok(HttpResponse::new(502, "")),
    );
    let adapter = adapter(client);

    let error = adapter.search_creatures("pika").await.expect_err("must fail");
    assert!(error.message().starts_with("failed to search creatures: 502"));
}

#[tokio::test]
async fn malformed_page_is_a_decode_error() {
    let client = FixtureHttpClient::new();
    client.respond_json("/creature?limit=20&offset=0", "{\"results\": 3}");
    let adapter = adapter(client);

    let error = adapter
        .list_creatures(PageRequest::default())
        .await
        .expect_err("must not parse");
    assert_eq!(error.kind(), UpstreamErrorKind::Decode);
}
