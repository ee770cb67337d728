use futures::executor::block_on;
use mockito::{Matcher, Server};
use serde_json::json;
use tracker_client::{Error, TrackerClient, UreqClient};
use tracker_tests::TRACKER_TOKEN;

#[test]
fn ureq_client_posts_new_story() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/services/v5/projects/42/stories")
        .match_header("content-type", "application/json")
        .match_header("x-trackertoken", TRACKER_TOKEN)
        .match_body(Matcher::Json(json!({"name": "Fix login", "story_type": "bug"})))
        .with_status(200)
        .with_body(r#"{"id": 555, "name": "Fix login"}"#)
        .create();

    let client =
        TrackerClient::with_base_url(&server.url(), TRACKER_TOKEN, UreqClient::new()).unwrap();
    let story = block_on(
        client.create_story("42", &json!({"name": "Fix login", "story_type": "bug"})),
    )
    .unwrap();

    mock.assert();
    assert_eq!(story["id"], 555);
}

#[test]
fn ureq_client_gets_project() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/services/v5/projects/42")
        .match_query(Matcher::Missing)
        .match_header("x-trackertoken", TRACKER_TOKEN)
        .with_status(200)
        .with_body(r#"{"id": 42, "name": "Extension"}"#)
        .create();

    let client =
        TrackerClient::with_base_url(&server.url(), TRACKER_TOKEN, UreqClient::new()).unwrap();
    let project = block_on(client.get_project("42")).unwrap();

    mock.assert();
    assert_eq!(project["name"], "Extension");
}

#[test]
fn ureq_client_reports_error_status_as_transport_error() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/services/v5/projects")
        .with_status(500)
        .with_body(r#"{"code": "internal_error"}"#)
        .create();

    let client =
        TrackerClient::with_base_url(&server.url(), TRACKER_TOKEN, UreqClient::new()).unwrap();
    let err = block_on(client.get_all_projects()).unwrap_err();

    mock.assert();
    assert!(matches!(err, Error::Transport(_)));
}
