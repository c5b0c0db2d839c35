//! API Integration Tests
//!
//! Each test serves its own temporary `channels.conf`, no external services
//! are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, assert_text, content_type, fixtures::*, TestServer,
};
use reqwest::{Method, StatusCode};

const METHOD_MESSAGE: &str = "To retrieve information use the GET method!";
const FORMAT_MESSAGE: &str =
    "Resources are not available for the selected format. (Use: .json, .html or .xml)";

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: ReadinessBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.status, "ready");
    assert_eq!(body.checks.channels, "healthy");
    assert_eq!(body.checks.channel_count, SAMPLE_CHANNEL_NAMES.len());
}

#[tokio::test]
async fn test_health_not_ready_without_channels() {
    let server = TestServer::start_with_channels(SEPARATORS_ONLY_CONF.as_bytes(), "UTF-8")
        .await
        .expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: ReadinessBody = assert_json(response, StatusCode::SERVICE_UNAVAILABLE)
        .await
        .unwrap();

    assert_eq!(body.status, "not_ready");
    assert_eq!(body.checks.channel_count, 0);
}

// ============================================================================
// Channel List Tests
// ============================================================================

#[tokio::test]
async fn test_channels_json() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/channels.json").await.expect("Request failed");
    assert_eq!(
        content_type(&response).as_deref(),
        Some("application/json; charset=utf-8")
    );

    let doc: ChannelsDocument = assert_json(response, StatusCode::OK).await.unwrap();
    let names: Vec<&str> = doc.channels.rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, SAMPLE_CHANNEL_NAMES);

    let numbers: Vec<i32> = doc.channels.rows.iter().map(|r| r.number).collect();
    assert_eq!(numbers, [1, 2, 3, 100, 101]);
}

#[tokio::test]
async fn test_channels_json_row_fields() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/channels.json").await.expect("Request failed");
    let doc: ChannelsDocument = assert_json(response, StatusCode::OK).await.unwrap();
    let rows = &doc.channels.rows;

    // Horizontal satellite transponder
    assert_eq!(rows[0].transponder, 111_494);
    assert_eq!(rows[0].stream, "S19.2E-1-1019-10301.ts");
    assert!(rows[0].is_sat);
    assert!(!rows[0].is_cable && !rows[0].is_terr && !rows[0].is_atsc);

    let news = &rows[2];
    assert_eq!(news.name, "News & Sport");
    assert_eq!(news.transponder, 12);
    assert_eq!(news.stream, "S19.2E-1-2-3.ts");

    let radio = &rows[3];
    assert_eq!(radio.transponder, 522);
    assert_eq!(radio.stream, "T-8468-514-769-1.ts");
    assert!(radio.is_terr && !radio.is_sat);

    let cable = &rows[4];
    assert_eq!(cable.transponder, 346);
    assert_eq!(cable.stream, "C-61441-1201-17502.ts");
    assert!(cable.is_cable);
}

#[tokio::test]
async fn test_channels_html() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/channels.html").await.expect("Request failed");
    assert_eq!(
        content_type(&response).as_deref(),
        Some("text/html; charset=utf-8")
    );

    let html = assert_text(response, StatusCode::OK).await.unwrap();
    assert!(html.starts_with("<html><head>"));
    assert!(html.ends_with("</ul></body></html>"));
    assert_eq!(html.matches("<li>").count(), SAMPLE_CHANNEL_NAMES.len());
    assert!(html.contains("<li>Das Erste HD</li>"));
    assert!(!html.contains("Regional"));
}

#[tokio::test]
async fn test_channels_xml() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/channels.xml").await.expect("Request failed");
    assert_eq!(
        content_type(&response).as_deref(),
        Some("text/xml; charset=utf-8")
    );

    let xml = assert_text(response, StatusCode::OK).await.unwrap();
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>"));
    assert_eq!(xml.matches("<channel>").count(), SAMPLE_CHANNEL_NAMES.len());
    assert!(xml.contains("<param name=\"name\">News &amp; Sport</param>"));
    assert!(xml.contains("<param name=\"stream\">S19.2E-1-2-3.ts</param>"));
    assert!(xml.ends_with("</channels>"));
}

#[tokio::test]
async fn test_channels_suffix_after_sub_path() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/channels/all.json").await.expect("Request failed");
    let doc: ChannelsDocument = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(doc.channels.rows.len(), SAMPLE_CHANNEL_NAMES.len());
}

#[tokio::test]
async fn test_separators_only_renders_empty_documents() {
    let server = TestServer::start_with_channels(SEPARATORS_ONLY_CONF.as_bytes(), "UTF-8")
        .await
        .expect("Failed to start server");

    let response = server.get("/channels.json").await.expect("Request failed");
    let json = assert_text(response, StatusCode::OK).await.unwrap();
    assert_eq!(json, r#"{"channels":{"rows":[]}}"#);

    let response = server.get("/channels.html").await.expect("Request failed");
    let html = assert_text(response, StatusCode::OK).await.unwrap();
    assert!(html.contains("<ul></ul>"));
}

#[tokio::test]
async fn test_channels_decoded_from_charset() {
    let server = TestServer::start_with_channels(&latin9_channels_conf(), "ISO-8859-15")
        .await
        .expect("Failed to start server");

    let response = server.get("/channels.json").await.expect("Request failed");
    let doc: ChannelsDocument = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(doc.channels.rows[0].name, "Radio Köln");
}

// ============================================================================
// Rejection Tests
// ============================================================================

#[tokio::test]
async fn test_non_get_methods_forbidden() {
    let server = TestServer::start().await.expect("Failed to start server");

    for method in [Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
        let response = server
            .request(method.clone(), "/channels.json")
            .await
            .expect("Request failed");
        let body = assert_text(response, StatusCode::FORBIDDEN).await.unwrap();
        assert_eq!(body, METHOD_MESSAGE, "method {method}");
    }
}

#[tokio::test]
async fn test_cors_preflight_forbidden() {
    let server = TestServer::start().await.expect("Failed to start server");

    for path in ["/channels.json", "/channels.csv"] {
        let response = server
            .client
            .request(Method::OPTIONS, format!("{}{}", server.base_url(), path))
            .header("origin", "http://example.com")
            .header("access-control-request-method", "GET")
            .send()
            .await
            .expect("Request failed");
        let body = assert_text(response, StatusCode::FORBIDDEN).await.unwrap();
        assert_eq!(body, METHOD_MESSAGE, "path {path}");
    }
}

#[tokio::test]
async fn test_head_forbidden() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .request(Method::HEAD, "/channels.json")
        .await
        .expect("Request failed");
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_unsupported_formats_forbidden() {
    let server = TestServer::start().await.expect("Failed to start server");

    for path in ["/channels", "/channels.txt", "/channels.csv", "/channels/"] {
        let response = server.get(path).await.expect("Request failed");
        assert_eq!(
            content_type(&response).as_deref(),
            Some("text/plain; charset=utf-8")
        );
        let body = assert_text(response, StatusCode::FORBIDDEN).await.unwrap();
        assert_eq!(body, FORMAT_MESSAGE, "path {path}");
    }
}

#[tokio::test]
async fn test_unknown_path_not_found() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/recordings.json").await.expect("Request failed");
    let body: ErrorEnvelope = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();

    assert_eq!(body.error.code, "NOT_FOUND");
    assert!(body.error.message.contains("/recordings.json"));
}

// ============================================================================
// Middleware Tests
// ============================================================================

#[tokio::test]
async fn test_cors_headers_on_get() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .client
        .get(format!("{}/channels.json", server.base_url()))
        .header("origin", "http://example.com")
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn test_rate_limit_replenishes_per_second() {
    let server = TestServer::start_with_env(
        SAMPLE_CHANNELS_CONF.as_bytes(),
        "UTF-8",
        &[
            ("RATE_LIMIT_REQUESTS_PER_SECOND", "10"),
            ("RATE_LIMIT_BURST", "5"),
        ],
    )
    .await
    .expect("Failed to start server");

    // Drain the burst
    let mut limited = false;
    for _ in 0..20 {
        let response = server.get("/channels.json").await.expect("Request failed");
        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            limited = true;
            break;
        }
        assert_eq!(response.status(), StatusCode::OK);
    }
    assert!(limited, "burst of 5 was never exhausted");

    // 10 requests per second refill the burst of 5 well within a second
    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;

    let mut ok = 0;
    for _ in 0..5 {
        let response = server.get("/channels.json").await.expect("Request failed");
        if response.status() == StatusCode::OK {
            ok += 1;
        }
    }
    assert_eq!(ok, 5);
}

#[tokio::test]
async fn test_request_id_is_set() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/channels.json").await.expect("Request failed");
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .client
        .get(format!("{}/channels.json", server.base_url()))
        .header("x-request-id", "test-request-42")
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.headers()["x-request-id"], "test-request-42");
}
