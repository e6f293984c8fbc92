use httpmock::prelude::*;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use word_lookup::{server, AppState, LookupProxy, ReqwestClient};

struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestServer {
    async fn start(upstream_base: &str) -> Self {
        let client = ReqwestClient::new(Duration::from_secs(5)).unwrap();
        let proxy = LookupProxy::new(client, upstream_base).unwrap();
        let state = Arc::new(AppState::new(proxy, 4096));

        let listener = server::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            server::serve(listener, state, async move {
                let _ = rx.await;
            })
            .await
            .unwrap();
        });

        Self {
            addr,
            shutdown: Some(tx),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

async fn get_json(url: &str) -> (u16, serde_json::Value) {
    let response = reqwest::get(url).await.unwrap();
    let status = response.status().as_u16();
    let body = response.json::<serde_json::Value>().await.unwrap();
    (status, body)
}

#[tokio::test]
async fn test_lookup_relays_upstream_array() {
    let upstream = MockServer::start();
    let payload = serde_json::json!([
        {
            "word": "hello",
            "phonetics": [{"text": "/həˈloʊ/"}],
            "meanings": [{"partOfSpeech": "noun", "definitions": [{"definition": "\"Hello!\" or an equivalent greeting."}]}]
        }
    ]);
    let api_mock = upstream.mock(|when, then| {
        when.method(GET).path("/api/v2/entries/en/hello");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(payload.clone());
    });

    let app = TestServer::start(&upstream.url("/api/v2/entries/en")).await;
    let (status, body) = get_json(&app.url("/api/v1/words/hello")).await;

    api_mock.assert();
    assert_eq!(status, 200);
    assert_eq!(body, payload);
}

#[tokio::test]
async fn test_lookup_not_found() {
    let upstream = MockServer::start();
    let api_mock = upstream.mock(|when, then| {
        when.method(GET).path("/api/v2/entries/en/zzzxx");
        then.status(404).json_body(serde_json::json!({
            "title": "No Definitions Found",
            "message": "Sorry pal, we couldn't find definitions for the word you were looking for."
        }));
    });

    let app = TestServer::start(&upstream.url("/api/v2/entries/en")).await;
    let (status, body) = get_json(&app.url("/api/v1/words/zzzxx")).await;

    api_mock.assert();
    assert_eq!(status, 404);
    assert_eq!(body, serde_json::json!({"error": "Word not found"}));
}

#[tokio::test]
async fn test_empty_word_never_reaches_upstream() {
    let upstream = MockServer::start();
    let api_mock = upstream.mock(|when, then| {
        when.method(GET);
        then.status(200).json_body(serde_json::json!([]));
    });

    let app = TestServer::start(&upstream.url("/api/v2/entries/en")).await;
    let (status, body) = get_json(&app.url("/api/v1/words/")).await;

    assert_eq!(status, 400);
    assert_eq!(body, serde_json::json!({"error": "Word parameter is required"}));
    api_mock.assert_hits(0);
}

#[tokio::test]
async fn test_upstream_error_status_is_forwarded() {
    let upstream = MockServer::start();
    let api_mock = upstream.mock(|when, then| {
        when.method(GET).path("/api/v2/entries/en/hello");
        then.status(503).body("Service Unavailable");
    });

    let app = TestServer::start(&upstream.url("/api/v2/entries/en")).await;
    let (status, body) = get_json(&app.url("/api/v1/words/hello")).await;

    api_mock.assert();
    assert_eq!(status, 503);
    assert_eq!(
        body,
        serde_json::json!({"error": "Failed to fetch data from upstream API"})
    );
}

#[tokio::test]
async fn test_unreachable_upstream_is_internal_error() {
    // Bind then drop to get a port nothing is listening on.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let app = TestServer::start(&format!("http://127.0.0.1:{}/api/v2/entries/en", port)).await;
    let (status, body) = get_json(&app.url("/api/v1/words/hello")).await;

    assert_eq!(status, 500);
    assert_eq!(body, serde_json::json!({"error": "Internal Server Error"}));
}

#[tokio::test]
async fn test_space_in_word_is_percent_encoded_upstream() {
    let upstream = MockServer::start();
    let api_mock = upstream.mock(|when, then| {
        when.method(GET).path("/api/v2/entries/en/ice%20cream");
        then.status(200).json_body(serde_json::json!([{"word": "ice cream"}]));
    });

    let app = TestServer::start(&upstream.url("/api/v2/entries/en")).await;
    let (status, body) = get_json(&app.url("/api/v1/words/ice%20cream")).await;

    api_mock.assert();
    assert_eq!(status, 200);
    assert_eq!(body, serde_json::json!([{"word": "ice cream"}]));
}

#[tokio::test]
async fn test_head_on_words_route_is_answered() {
    let upstream = MockServer::start();
    let api_mock = upstream.mock(|when, then| {
        when.method(GET).path("/api/v2/entries/en/hello");
        then.status(200).json_body(serde_json::json!([{"word": "hello"}]));
    });

    let app = TestServer::start(&upstream.url("/api/v2/entries/en")).await;
    let response = reqwest::Client::new()
        .head(app.url("/api/v1/words/hello"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/json"
    );
    assert!(response.bytes().await.unwrap().is_empty());
    api_mock.assert();
}

#[tokio::test]
async fn test_each_request_hits_upstream() {
    let upstream = MockServer::start();
    let api_mock = upstream.mock(|when, then| {
        when.method(GET).path("/api/v2/entries/en/hello");
        then.status(200).json_body(serde_json::json!([]));
    });

    let app = TestServer::start(&upstream.url("/api/v2/entries/en")).await;
    for _ in 0..3 {
        let (status, _) = get_json(&app.url("/api/v1/words/hello")).await;
        assert_eq!(status, 200);
    }

    api_mock.assert_hits(3);
}

#[tokio::test]
async fn test_form_submission() {
    let upstream = MockServer::start();
    let api_mock = upstream.mock(|when, then| {
        when.method(GET).path("/api/v2/entries/en/well-being");
        then.status(200).json_body(serde_json::json!([{"word": "well-being"}]));
    });

    let app = TestServer::start(&upstream.url("/api/v2/entries/en")).await;
    let client = reqwest::Client::new();

    let page = client.get(app.url("/")).send().await.unwrap();
    assert_eq!(page.status().as_u16(), 200);
    assert!(page.text().await.unwrap().contains("<form"));

    let rejected = client
        .post(app.url("/"))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body("word=well_being")
        .send()
        .await
        .unwrap();
    assert_eq!(rejected.status().as_u16(), 400);
    assert!(rejected
        .text()
        .await
        .unwrap()
        .contains("Only letters, hyphens, and spaces are allowed"));
    api_mock.assert_hits(0);

    let accepted = client
        .post(app.url("/"))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body("word=+well-being+")
        .send()
        .await
        .unwrap();
    assert_eq!(accepted.status().as_u16(), 200);
    assert!(accepted.text().await.unwrap().contains("well-being"));
    api_mock.assert_hits(1);
}
