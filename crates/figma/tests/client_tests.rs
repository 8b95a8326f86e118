//! Figma client tests against a mocked REST API

use figsync_core::{Error, IconNaming};
use figsync_figma::{
    DesignSource, FigmaClient, FigmaConfig, fetch_icon_contents, list_icons,
};
use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FILE_KEY: &str = "FILEKEY";
const TOKEN: &str = "test-token";

fn client(server: &MockServer) -> FigmaClient {
    let config = FigmaConfig::new(FILE_KEY, SecretString::from(TOKEN.to_string()))
        .with_api_base(server.uri());
    FigmaClient::new(config).unwrap()
}

fn document() -> serde_json::Value {
    json!({
        "name": "UI Kit",
        "document": {
            "id": "0:0",
            "name": "Document",
            "type": "DOCUMENT",
            "children": [{
                "id": "0:1",
                "name": "05 - Icons",
                "type": "CANVAS",
                "children": [{
                    "id": "1:1",
                    "name": "Arrows",
                    "type": "FRAME",
                    "children": [
                        {
                            "id": "2:1",
                            "name": "Left",
                            "type": "COMPONENT",
                            "children": [{ "id": "3:1", "name": "Vector", "type": "VECTOR" }]
                        },
                        {
                            "id": "2:2",
                            "name": "Title",
                            "type": "INSTANCE",
                            "componentId": "9:1",
                            "children": [{ "id": "3:2", "name": "Arrows", "type": "TEXT" }]
                        },
                        {
                            "id": "2:3",
                            "name": "Right",
                            "type": "COMPONENT",
                            "children": [{ "id": "3:3", "name": "Group", "type": "GROUP" }]
                        }
                    ]
                }]
            }]
        },
        "components": {
            "9:1": { "key": "k1", "name": "Title", "description": "" }
        }
    })
}

#[tokio::test]
async fn test_fetch_document_sends_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/v1/files/{FILE_KEY}")))
        .and(header("X-Figma-Token", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(document()))
        .expect(1)
        .mount(&server)
        .await;

    let file = client(&server).fetch_document().await.unwrap();
    assert_eq!(file.name, "UI Kit");
    assert_eq!(file.find_title_marker_id().unwrap(), "9:1");
}

#[tokio::test]
async fn test_fetch_document_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/v1/files/{FILE_KEY}")))
        .respond_with(ResponseTemplate::new(403).set_body_string("Invalid token"))
        .mount(&server)
        .await;

    let err = client(&server).fetch_document().await.unwrap_err();
    assert!(matches!(err, Error::Fetch { ref message, .. } if message.contains("403")));
}

#[tokio::test]
async fn test_fetch_document_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/v1/files/{FILE_KEY}")))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client(&server).fetch_document().await.unwrap_err();
    assert!(matches!(err, Error::Fetch { .. }));
}

#[tokio::test]
async fn test_fetch_image_urls_batches_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/v1/images/{FILE_KEY}")))
        .and(query_param("ids", "2:1,2:3"))
        .and(query_param("format", "svg"))
        .and(header("X-Figma-Token", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "err": null,
            "images": { "2:1": "https://cdn.example/2-1.svg", "2:3": null }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let export = client(&server).fetch_image_urls(&["2:1", "2:3"]).await.unwrap();
    assert_eq!(export.url("2:1"), Some("https://cdn.example/2-1.svg"));
    assert_eq!(export.url("2:3"), None);
}

#[tokio::test]
async fn test_fetch_image_urls_reported_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/v1/images/{FILE_KEY}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "err": "Render timeout",
            "images": {}
        })))
        .mount(&server)
        .await;

    let err = client(&server).fetch_image_urls(&["2:1"]).await.unwrap_err();
    assert!(matches!(err, Error::Fetch { ref message, .. } if message == "Render timeout"));
}

#[tokio::test]
async fn test_list_icons_skips_title_marker() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/v1/files/{FILE_KEY}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(document()))
        .mount(&server)
        .await;

    let client = client(&server);
    let icons = list_icons(&client, "05 - Icons", &IconNaming::new("oui-icon", false))
        .await
        .unwrap();

    let names: Vec<_> = icons.iter().map(|i| i.component_name()).collect();
    assert_eq!(names, ["OuiIconLeft", "OuiIconRight"]);
    assert!(icons[0].is_font_compatible());
    assert!(!icons[1].is_font_compatible());
}

#[tokio::test]
async fn test_list_icons_unknown_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/v1/files/{FILE_KEY}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(document()))
        .mount(&server)
        .await;

    let client = client(&server);
    let err = list_icons(&client, "07 - Emojis", &IconNaming::new("oui-emoji", true))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("07 - Emojis"));
}

async fn mount_document_and_images(server: &MockServer, images: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/v1/files/{FILE_KEY}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(document()))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/v1/images/{FILE_KEY}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "images": images })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_icon_contents_in_order() {
    let server = MockServer::start().await;
    let base = server.uri();
    mount_document_and_images(
        &server,
        json!({
            "2:1": format!("{base}/svg/left.svg"),
            "2:3": format!("{base}/svg/right.svg"),
        }),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/svg/left.svg"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<svg id=\"left\"/>"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/svg/right.svg"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<svg id=\"right\"/>"))
        .mount(&server)
        .await;

    let client = client(&server);
    let icons = list_icons(&client, "05 - Icons", &IconNaming::new("oui-icon", false))
        .await
        .unwrap();
    let contents = fetch_icon_contents(&client, icons).await.unwrap();

    assert_eq!(contents.len(), 2);
    assert_eq!(contents[0].descriptor.file_name(), "oui-icon-left");
    assert_eq!(contents[0].svg, "<svg id=\"left\"/>");
    assert_eq!(contents[1].svg, "<svg id=\"right\"/>");

    // Export URLs are pre-signed and must not receive the API token
    let requests = server.received_requests().await.unwrap();
    for request in requests.iter().filter(|r| r.url.path().starts_with("/svg/")) {
        assert!(request.headers.get("x-figma-token").is_none());
    }
}

#[tokio::test]
async fn test_fetch_icon_contents_missing_url() {
    let server = MockServer::start().await;
    let base = server.uri();
    mount_document_and_images(&server, json!({ "2:1": format!("{base}/svg/left.svg") })).await;
    Mock::given(method("GET"))
        .and(path("/svg/left.svg"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<svg/>"))
        .mount(&server)
        .await;

    let client = client(&server);
    let icons = list_icons(&client, "05 - Icons", &IconNaming::new("oui-icon", false))
        .await
        .unwrap();
    let err = fetch_icon_contents(&client, icons).await.unwrap_err();

    assert!(matches!(
        err,
        Error::MissingAsset { ref id, ref component_name } if id == "2:3" && component_name == "OuiIconRight"
    ));
}

#[tokio::test]
async fn test_fetch_icon_contents_download_failure_names_url() {
    let server = MockServer::start().await;
    let base = server.uri();
    let broken = format!("{base}/svg/right.svg");
    mount_document_and_images(
        &server,
        json!({ "2:1": format!("{base}/svg/left.svg"), "2:3": broken.clone() }),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/svg/left.svg"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<svg/>"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/svg/right.svg"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client(&server);
    let icons = list_icons(&client, "05 - Icons", &IconNaming::new("oui-icon", false))
        .await
        .unwrap();
    let err = fetch_icon_contents(&client, icons).await.unwrap_err();

    assert!(matches!(err, Error::Fetch { ref target, .. } if *target == broken));
}
