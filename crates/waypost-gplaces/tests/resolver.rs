//! Integration tests for the resolution flow using wiremock HTTP mocks.

use waypost_core::{Catalog, CatalogEntry, DisambiguationPolicy, PlacesApi};
use waypost_gplaces::{PlacesClient, PlacesError, ResolveOutcome, Resolver};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn resolver(base_url: &str, policy: DisambiguationPolicy) -> Resolver {
    let client = PlacesClient::with_base_url("test-key", 30, "en", PlacesApi::Legacy, base_url)
        .expect("client construction should not fail");
    Resolver::new(client, policy)
}

fn search_result(name: &str, address: &str, id: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "formatted_address": address,
        "place_id": id
    })
}

async fn mock_search(server: &MockServer, results: Vec<serde_json::Value>) {
    let status = if results.is_empty() {
        "ZERO_RESULTS"
    } else {
        "OK"
    };
    Mock::given(method("GET"))
        .and(path("/place/textsearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": status,
            "results": results
        })))
        .mount(server)
        .await;
}

async fn mock_details(server: &MockServer, id: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/place/details/json"))
        .and(query_param("place_id", id))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "OK",
            "result": body
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn single_result_confirms_with_verbatim_fields() {
    let server = MockServer::start().await;
    mock_search(
        &server,
        vec![search_result(
            "Eiffel Tower",
            "Champ de Mars, 5 Av. Anatole France, 75007 Paris, France",
            "id-eiffel",
        )],
    )
    .await;
    mock_details(
        &server,
        "id-eiffel",
        serde_json::json!({
            "name": "Eiffel Tower",
            "formatted_address": "Champ de Mars, 5 Av. Anatole France, 75007 Paris, France",
            "rating": 4.6,
            "user_ratings_total": 300_000
        }),
    )
    .await;

    let resolver = resolver(&server.uri(), DisambiguationPolicy::AlwaysDisambiguate);
    let outcome = resolver
        .resolve("Eiffel Tower")
        .await
        .expect("resolve should succeed");

    let (details, candidates) = match outcome {
        ResolveOutcome::Confirmed {
            details,
            candidates,
        } => (details, candidates),
        other => panic!("expected Confirmed, got {other:?}"),
    };
    assert_eq!(details.name, "Eiffel Tower");
    assert_eq!(
        details.address,
        "Champ de Mars, 5 Av. Anatole France, 75007 Paris, France"
    );
    assert_eq!(details.rating, Some(4.6));
    assert_eq!(details.review_count, Some(300_000));
    assert_eq!(candidates.len(), 1);

    // confirmed entries land in the catalog exactly once
    let mut catalog = Catalog::new();
    let entry = CatalogEntry {
        query: "Eiffel Tower".to_string(),
        selected: candidates[0].place_id.clone(),
        candidates,
        details,
    };
    assert!(catalog.append(entry.clone()));
    assert!(!catalog.append(entry));
    assert_eq!(catalog.len(), 1);
}

#[tokio::test]
async fn many_results_truncate_to_five_in_provider_order() {
    let server = MockServer::start().await;
    let results: Vec<serde_json::Value> = (0..7)
        .map(|i| {
            search_result(
                "Starbucks",
                &format!("{i} Main St, Springfield"),
                &format!("id-{i}"),
            )
        })
        .collect();
    mock_search(&server, results).await;

    let resolver = resolver(&server.uri(), DisambiguationPolicy::AlwaysDisambiguate);
    let outcome = resolver
        .resolve("Starbucks")
        .await
        .expect("resolve should succeed");

    let candidates = match outcome {
        ResolveOutcome::Ambiguous { candidates } => candidates,
        other => panic!("expected Ambiguous, got {other:?}"),
    };
    assert_eq!(candidates.len(), 5);
    for (i, candidate) in candidates.iter().enumerate() {
        assert_eq!(candidate.place_id, format!("id-{i}"));
        assert_eq!(candidate.rank, i);
    }
}

#[tokio::test]
async fn auto_accept_first_confirms_but_keeps_the_candidate_list() {
    let server = MockServer::start().await;
    mock_search(
        &server,
        vec![
            search_result("Starbucks", "1 Main St", "id-0"),
            search_result("Starbucks", "2 Main St", "id-1"),
            search_result("Starbucks", "3 Main St", "id-2"),
        ],
    )
    .await;
    mock_details(
        &server,
        "id-0",
        serde_json::json!({
            "name": "Starbucks",
            "formatted_address": "1 Main St",
            "rating": 4.1,
            "user_ratings_total": 210
        }),
    )
    .await;

    let resolver = resolver(&server.uri(), DisambiguationPolicy::AutoAcceptFirst);
    let outcome = resolver
        .resolve("Starbucks")
        .await
        .expect("resolve should succeed");

    let (details, candidates) = match outcome {
        ResolveOutcome::Confirmed {
            details,
            candidates,
        } => (details, candidates),
        other => panic!("expected Confirmed, got {other:?}"),
    };
    assert_eq!(details.address, "1 Main St");
    assert_eq!(candidates.len(), 3);
    assert_eq!(candidates[2].place_id, "id-2");
}

#[tokio::test]
async fn zero_results_falls_back_to_autocomplete_suggestions() {
    let server = MockServer::start().await;
    mock_search(&server, vec![]).await;

    Mock::given(method("GET"))
        .and(path("/place/autocomplete/json"))
        .and(query_param("input", "eifel tower"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "OK",
            "predictions": [
                { "description": "Eiffel Tower, Paris, France", "place_id": "id-eiffel" },
                { "description": "Eiffel Tower Viewing Deck, Paris, France", "place_id": "id-deck" }
            ]
        })))
        .mount(&server)
        .await;

    let resolver = resolver(&server.uri(), DisambiguationPolicy::AutoAcceptFirst);
    let outcome = resolver
        .resolve("eifel tower")
        .await
        .expect("resolve should succeed");

    // suggestions are unconfirmed, so even auto-accept asks the user
    let candidates = match outcome {
        ResolveOutcome::Ambiguous { candidates } => candidates,
        other => panic!("expected Ambiguous, got {other:?}"),
    };
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].label, "Eiffel Tower, Paris, France");
}

#[tokio::test]
async fn zero_results_from_both_searches_is_not_found() {
    let server = MockServer::start().await;
    mock_search(&server, vec![]).await;

    Mock::given(method("GET"))
        .and(path("/place/autocomplete/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "ZERO_RESULTS",
            "predictions": []
        })))
        .mount(&server)
        .await;

    let resolver = resolver(&server.uri(), DisambiguationPolicy::AutoAcceptFirst);
    let outcome = resolver
        .resolve("qwzx no such place")
        .await
        .expect("resolve should succeed");

    assert!(matches!(outcome, ResolveOutcome::NotFound));
}

#[tokio::test]
async fn blank_query_short_circuits_without_a_provider_call() {
    let server = MockServer::start().await;
    // no mocks mounted: any request would 404 and fail the resolve

    let resolver = resolver(&server.uri(), DisambiguationPolicy::AutoAcceptFirst);
    let outcome = resolver
        .resolve("   ")
        .await
        .expect("blank query should not error");

    assert!(matches!(outcome, ResolveOutcome::NotFound));
}

#[tokio::test]
async fn provider_failure_is_surfaced_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/place/textsearch/json"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let resolver = resolver(&server.uri(), DisambiguationPolicy::AutoAcceptFirst);
    let result = resolver.resolve("anywhere").await;

    assert!(matches!(result, Err(PlacesError::Http(_))));
    // the mock's expect(1) verifies exactly one attempt was made
}

#[tokio::test]
async fn swapping_a_catalog_entry_keeps_its_position() {
    let server = MockServer::start().await;
    mock_search(
        &server,
        vec![
            search_result("Cafe Uno", "1 First St", "id-0"),
            search_result("Cafe Due", "2 Second St", "id-1"),
            search_result("Cafe Tre", "3 Third St", "id-2"),
        ],
    )
    .await;
    mock_details(
        &server,
        "id-0",
        serde_json::json!({ "name": "Cafe Uno", "formatted_address": "1 First St" }),
    )
    .await;
    mock_details(
        &server,
        "id-2",
        serde_json::json!({
            "name": "Cafe Tre",
            "formatted_address": "3 Third St",
            "rating": 3.9,
            "user_ratings_total": 41
        }),
    )
    .await;

    let resolver = resolver(&server.uri(), DisambiguationPolicy::AutoAcceptFirst);
    let ResolveOutcome::Confirmed {
        details,
        candidates,
    } = resolver.resolve("cafe").await.expect("resolve succeeds")
    else {
        panic!("expected Confirmed");
    };

    let mut catalog = Catalog::new();
    catalog.append(CatalogEntry {
        query: "cafe".to_string(),
        selected: candidates[0].place_id.clone(),
        candidates: candidates.clone(),
        details,
    });
    catalog.append(CatalogEntry {
        query: "other".to_string(),
        candidates: vec![],
        selected: "id-other".to_string(),
        details: waypost_core::PlaceDetails {
            name: "Other".to_string(),
            address: "99 Elsewhere Ave".to_string(),
            rating: None,
            review_count: None,
        },
    });

    // user reopens entry 0 and picks the third kept candidate
    let replacement = &candidates[2];
    let new_details = resolver
        .fetch_details(&replacement.place_id)
        .await
        .expect("details fetch succeeds");
    let entry = catalog.get(0).expect("entry 0 exists");
    let swapped = CatalogEntry {
        query: entry.query.clone(),
        candidates: entry.candidates.clone(),
        selected: replacement.place_id.clone(),
        details: new_details,
    };
    catalog.replace_at(0, swapped).expect("index 0 in bounds");

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.entries()[0].details.name, "Cafe Tre");
    assert_eq!(catalog.entries()[0].selected_rank(), Some(2));
    assert_eq!(catalog.entries()[1].details.name, "Other");
}
