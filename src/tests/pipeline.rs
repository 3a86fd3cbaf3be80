use super::TestUtils;
use crate::artifact::{ArtifactKind, GenerationRequest};
use crate::extract::Language;
use crate::generator::generate;
use mockito::Server;
use serde_json::json;

fn post_request() -> GenerationRequest {
    GenerationRequest::resource(
        "Post".to_string(),
        vec!["title:string".parse().unwrap()],
        vec![ArtifactKind::Model, ArtifactKind::Controller],
    )
    .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_end_to_end_generation() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/v1/messages")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "content": [{ "text": TestUtils::two_file_response() }] }).to_string())
        .create_async()
        .await;

    let config = TestUtils::test_config(format!("{}/v1/messages", server.url()));
    let files = generate(&post_request(), &config).await;

    assert_eq!(files.len(), 2);
    assert_eq!(files[0].filename, "Post.php");
    assert_eq!(files[1].filename, "PostController.php");
    mock.assert_async().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_empty_content_array_yields_diagnostic_record() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("POST", "/v1/messages")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "content": [] }).to_string())
        .create_async()
        .await;

    let config = TestUtils::test_config(format!("{}/v1/messages", server.url()));
    let files = generate(&post_request(), &config).await;

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].filename, "generation_error.txt");
    assert_eq!(files[0].language, Language::Text);
    assert!(files[0].content.contains("no content"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_server_error_yields_diagnostic_record() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("POST", "/v1/messages")
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let config = TestUtils::test_config(format!("{}/v1/messages", server.url()));
    let files = generate(&post_request(), &config).await;

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].filename, "generation_error.txt");
    assert!(files[0].content.contains("API error"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_malformed_body_yields_diagnostic_record() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("POST", "/v1/messages")
        .with_status(200)
        .with_body("not json at all")
        .create_async()
        .await;

    let config = TestUtils::test_config(format!("{}/v1/messages", server.url()));
    let files = generate(&post_request(), &config).await;

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].filename, "generation_error.txt");
    assert!(files[0].content.contains("response shape"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_degraded_reply_still_produces_renderable_batch() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("POST", "/v1/messages")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({ "content": [{ "text": "Sorry, please give me more details." }] }).to_string(),
        )
        .create_async()
        .await;

    let config = TestUtils::test_config(format!("{}/v1/messages", server.url()));
    let files = generate(&post_request(), &config).await;

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].content, "Sorry, please give me more details.");
}
