//! Aggregation integration tests.
//!
//! Every source is served by a local wiremock server so the full
//! scrape → fallback → merge pipeline runs over real HTTP without touching
//! the live sites. Covers the fallback law, absent-vs-empty definitions,
//! total-failure containment, and the fast empty-word rejection.

use lexiscope::aggregate::WordLookup;
use lexiscope::extract::Selectors;
use lexiscope::model::LookupError;
use lexiscope::sources::Endpoints;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TIMEOUT_MS: u64 = 5_000;

fn endpoints(server: &MockServer) -> Endpoints {
    let base = Url::parse(&server.uri()).unwrap();
    Endpoints {
        synonym_scrape_base: base.join("synonyms").unwrap(),
        synonym_api_base: base.join("words").unwrap(),
        dictionary_api_base: base.join("define").unwrap(),
        etymology_base: base.join("word").unwrap(),
    }
}

fn lookup_against(server: &MockServer) -> WordLookup {
    WordLookup::with_config(endpoints(server), Selectors::default(), TIMEOUT_MS)
}

fn synonym_page(groups: &str) -> String {
    format!(
        r#"<html><body><div class="engthes"><div>{groups}</div></div></body></html>"#
    )
}

fn etymology_page(entries: &str) -> String {
    format!("<html><body>{entries}</body></html>")
}

async fn mount_scrape(server: &MockServer, word: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(format!("/synonyms/{word}")))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn end_to_end_happy_collapses_duplicates() {
    let server = MockServer::start().await;

    mount_scrape(
        &server,
        "happy",
        synonym_page(
            r#"<div><span>joyful</span><span>joyful</span><span>content</span></div>"#,
        ),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/define/happy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "word": "happy",
            "meanings": [{
                "partOfSpeech": "adjective",
                "definitions": [
                    {"definition": "feeling or showing pleasure"},
                    {"definition": "fortunate and convenient"}
                ]
            }]
        }])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/word/happy"))
        .respond_with(ResponseTemplate::new(200).set_body_string(etymology_page(
            r#"<div class="word--C9UPa">
                <h1 class="word__name--TTbAA">happy (adj.)</h1>
                <section class="word__defination--2q7ZH"><p>late 14c., lucky.</p></section>
            </div>"#,
        )))
        .mount(&server)
        .await;

    let result = lookup_against(&server).lookup("happy").await.unwrap();

    assert_eq!(result.word, "happy");
    assert_eq!(
        result.synonyms.iter().collect::<Vec<_>>(),
        vec!["joyful", "content"]
    );

    let definitions = result.definitions.as_ref().unwrap();
    assert_eq!(definitions.len(), 1);
    assert_eq!(definitions[0].part_of_speech, "adjective");
    assert_eq!(definitions[0].definitions.len(), 2);

    assert_eq!(result.etymology.get("happy (adj.)"), Some("late 14c., lucky."));
}

#[tokio::test]
async fn empty_scrape_takes_fallback_list_exactly() {
    let server = MockServer::start().await;

    // Scrape succeeds but has no synonym containers at all.
    mount_scrape(&server, "rare", "<html><body><p>nothing</p></body></html>".to_string()).await;

    Mock::given(method("GET"))
        .and(path("/words"))
        .and(query_param("rel_syn", "rare"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"word": "scarce", "score": 2271},
            {"word": "uncommon", "score": 1991}
        ])))
        .mount(&server)
        .await;

    let result = lookup_against(&server).lookup("rare").await.unwrap();
    assert_eq!(
        result.synonyms.iter().collect::<Vec<_>>(),
        vec!["scarce", "uncommon"]
    );
}

#[tokio::test]
async fn failed_scrape_takes_fallback_too() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/synonyms/rare"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/words"))
        .and(query_param("rel_syn", "rare"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"word": "scarce"}
        ])))
        .mount(&server)
        .await;

    let result = lookup_against(&server).lookup("rare").await.unwrap();
    assert_eq!(result.synonyms.iter().collect::<Vec<_>>(), vec!["scarce"]);
}

#[tokio::test]
async fn nonempty_scrape_never_mixes_in_fallback() {
    let server = MockServer::start().await;

    mount_scrape(
        &server,
        "big",
        synonym_page(r#"<div><span>large</span></div>"#),
    )
    .await;

    // If the adapter consulted the API anyway, these would leak in.
    Mock::given(method("GET"))
        .and(path("/words"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"word": "huge"}
        ])))
        .mount(&server)
        .await;

    let result = lookup_against(&server).lookup("big").await.unwrap();
    assert_eq!(result.synonyms.iter().collect::<Vec<_>>(), vec!["large"]);
}

#[tokio::test]
async fn definitions_empty_array_is_absent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/define/blorp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let result = lookup_against(&server).lookup("blorp").await.unwrap();
    assert!(result.definitions.is_none());
}

#[tokio::test]
async fn etymology_404_is_empty_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/word/blorp"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = lookup_against(&server).lookup("blorp").await.unwrap();
    assert!(result.etymology.is_empty());
}

#[tokio::test]
async fn total_failure_still_returns_a_result() {
    let server = MockServer::start().await;

    // Every endpoint answers 500, including the synonym fallback.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = lookup_against(&server).lookup("happy").await.unwrap();
    assert_eq!(result.word, "happy");
    assert!(result.synonyms.is_empty());
    assert!(result.definitions.is_none());
    assert!(result.etymology.is_empty());
}

#[tokio::test]
async fn empty_word_fails_before_any_request() {
    let server = MockServer::start().await;

    let err = lookup_against(&server).lookup("").await.unwrap_err();
    assert!(matches!(err, LookupError::EmptyWord));

    let err = lookup_against(&server).lookup("  \t ").await.unwrap_err();
    assert!(matches!(err, LookupError::EmptyWord));

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn struck_through_scrape_groups_are_excluded_end_to_end() {
    let server = MockServer::start().await;

    mount_scrape(
        &server,
        "glad",
        synonym_page(
            r#"<div><span>pleased</span></div>
               <div style="text-decoration:line-through"><span>unhappy</span></div>"#,
        ),
    )
    .await;

    let result = lookup_against(&server).lookup("glad").await.unwrap();
    assert_eq!(result.synonyms.iter().collect::<Vec<_>>(), vec!["pleased"]);
}
