use mockito::{Matcher, Server};
use serde_json::json;
use tracker_client::{Error, ReqwestClient, TrackerClient};
use tracker_tests::{PROJECT_ID, TRACKER_TOKEN};

#[tokio::test]
async fn reqwest_client_sends_story_lookup_on_the_wire() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "GET",
            format!("/services/v5/projects/{PROJECT_ID}/stories").as_str(),
        )
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("someParamKey".into(), "\"someParamValue\"".into()),
            Matcher::UrlEncoded("limit".into(), "1".into()),
        ]))
        .match_header("content-type", "application/json")
        .match_header("x-trackertoken", TRACKER_TOKEN)
        .with_status(200)
        .with_body(r#"[{"id": 1, "name": "first"}]"#)
        .create_async()
        .await;

    let client =
        TrackerClient::with_base_url(&server.url(), TRACKER_TOKEN, ReqwestClient::new()).unwrap();
    let stories = client
        .get_story(PROJECT_ID, &json!({"someParamKey": "someParamValue"}))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(stories, json!([{"id": 1, "name": "first"}]));
}

#[tokio::test]
async fn reqwest_client_sends_update_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/services/v5/projects/7/stories/11")
        .match_header("x-trackertoken", TRACKER_TOKEN)
        .match_body(Matcher::PartialJson(json!({"description": "new text"})))
        .with_status(200)
        .with_body(r#"{"id": 11, "description": "new text"}"#)
        .create_async()
        .await;

    let client =
        TrackerClient::with_base_url(&server.url(), TRACKER_TOKEN, ReqwestClient::new()).unwrap();
    let story = client.update_story("7", "11", "new text").await.unwrap();

    mock.assert_async().await;
    assert_eq!(story["id"], 11);
}

#[tokio::test]
async fn reqwest_client_reports_error_status_as_transport_error() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/services/v5/projects")
        .with_status(403)
        .with_body(r#"{"code": "invalid_authentication"}"#)
        .create_async()
        .await;

    let client =
        TrackerClient::with_base_url(&server.url(), TRACKER_TOKEN, ReqwestClient::new()).unwrap();
    let err = client.get_all_projects().await.unwrap_err();

    mock.assert_async().await;
    assert!(matches!(err, Error::Transport(_)));
}
