/// Browser host integration tests
/// Drive the router with form posts against a mock remote collection
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use roster_client::{CollectionConfig, RestUserClient};
use roster_web::{create_router, AppState};
use serde_json::json;
use std::sync::Arc;
use tower::util::ServiceExt;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock collection with two users
async fn mock_collection() -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "Leanne Graham", "username": "Bret",
              "email": "Sincere@april.biz", "website": "hildegard.org" },
            { "id": 2, "name": "Ervin Howell", "username": "Antonette",
              "email": "Shanna@melissa.tv", "website": "anastasia.net" }
        ])))
        .mount(&mock_server)
        .await;

    mock_server
}

/// Helper to create test app router
fn create_test_app(mock_server: &MockServer) -> (Router, AppState) {
    let client = RestUserClient::new(CollectionConfig::new(mock_server.uri())).unwrap();
    let state = AppState::new(Arc::new(client));
    (create_router(state.clone()), state)
}

async fn get_page(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn post_form(app: &Router, uri: &str, body: &str) -> StatusCode {
    let request = Request::builder()
        .uri(uri)
        .method("POST")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    if response.status() == StatusCode::SEE_OTHER {
        assert_eq!(response.headers()[header::LOCATION], "/");
    }
    response.status()
}

/// Test the page before the initial read settles
#[tokio::test]
async fn test_page_shows_loading_before_mount() {
    let mock_server = mock_collection().await;
    let (app, _state) = create_test_app(&mock_server);

    let page = get_page(&app).await;

    assert!(page.contains("Loading..."));
    assert!(page.contains("http-equiv=\"refresh\""));
    assert!(!page.contains("<table"));
}

/// Test the page after mounting
#[tokio::test]
async fn test_page_lists_users_after_mount() {
    let mock_server = mock_collection().await;
    let (app, state) = create_test_app(&mock_server);

    state.mount().await;
    let page = get_page(&app).await;

    assert!(page.contains("<td>Leanne Graham</td>"));
    assert!(page.contains("<td>Ervin Howell</td>"));
    assert!(page.contains("Add User"));
    assert!(!page.contains("http-equiv"));
}

/// Test create through the form
#[tokio::test]
async fn test_submit_creates_user() {
    let mock_server = mock_collection().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .and(body_json(json!({
            "name": "Ann",
            "email": "a@x.com",
            "username": "ann",
            "website": "ann.dev"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 11, "name": "Ann", "email": "a@x.com",
            "username": "ann", "website": "ann.dev"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (app, state) = create_test_app(&mock_server);
    state.mount().await;

    let status = post_form(
        &app,
        "/submit",
        "name=Ann&email=a%40x.com&username=ann&website=ann.dev",
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let page = get_page(&app).await;
    assert_eq!(page.matches("<tr data-id=").count(), 3);
    assert!(page.contains(r#"class="local-only""#));
    assert!(page.contains("<td>a@x.com</td>"));
}

/// Test edit flow: start, page prefilled, commit
#[tokio::test]
async fn test_edit_and_commit() {
    let mock_server = mock_collection().await;
    Mock::given(method("PUT"))
        .and(path("/users/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 2, "name": "Ervin Howell", "email": "ervin@new.example",
            "username": "Antonette", "website": "anastasia.net"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (app, state) = create_test_app(&mock_server);
    state.mount().await;

    assert_eq!(
        post_form(&app, "/users/2/edit", "").await,
        StatusCode::SEE_OTHER
    );
    let page = get_page(&app).await;
    assert!(page.contains("Update User"));
    assert!(page.contains(r#"value="Shanna@melissa.tv""#));

    let status = post_form(
        &app,
        "/submit",
        "name=Ervin+Howell&email=ervin%40new.example&username=Antonette&website=anastasia.net",
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let page = get_page(&app).await;
    assert!(page.contains("<td>ervin@new.example</td>"));
    assert!(page.contains("Add User"));
}

/// Test a post without the required inputs creates nothing
#[tokio::test]
async fn test_submit_without_required_inputs_ignored() {
    let mock_server = mock_collection().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 11 })))
        .expect(0)
        .mount(&mock_server)
        .await;

    let (app, state) = create_test_app(&mock_server);
    state.mount().await;

    let status = post_form(&app, "/submit", "name=&email=&username=&website=x").await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let page = get_page(&app).await;
    assert_eq!(page.matches("<tr data-id=").count(), 2);
}

/// Test editing a user that is not listed
#[tokio::test]
async fn test_edit_unknown_user_not_found() {
    let mock_server = mock_collection().await;
    let (app, state) = create_test_app(&mock_server);
    state.mount().await;

    assert_eq!(
        post_form(&app, "/users/999/edit", "").await,
        StatusCode::NOT_FOUND
    );
}

/// Test cancel returns the form to create mode
#[tokio::test]
async fn test_cancel_edit() {
    let mock_server = mock_collection().await;
    let (app, state) = create_test_app(&mock_server);
    state.mount().await;

    post_form(&app, "/users/1/edit", "").await;
    assert_eq!(post_form(&app, "/cancel", "").await, StatusCode::SEE_OTHER);

    let page = get_page(&app).await;
    assert!(page.contains("Add User"));
    assert!(!page.contains(r#"value="Sincere@april.biz""#));
}

/// Test delete is honored locally even when the remote call fails
#[tokio::test]
async fn test_delete_removes_row_despite_remote_failure() {
    let mock_server = mock_collection().await;
    Mock::given(method("DELETE"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (app, state) = create_test_app(&mock_server);
    state.mount().await;

    assert_eq!(
        post_form(&app, "/users/1/delete", "").await,
        StatusCode::SEE_OTHER
    );

    let page = get_page(&app).await;
    assert!(!page.contains("Leanne Graham"));
    assert!(page.contains("Ervin Howell"));
}

/// Test GET /health before and after the initial read
#[tokio::test]
async fn test_health_reports_load_status() {
    let mock_server = mock_collection().await;
    let (app, state) = create_test_app(&mock_server);

    let body = get_health(&app).await;
    assert_eq!(body["status"], "loading");
    assert_eq!(body["users"], 0);

    state.mount().await;
    let body = get_health(&app).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["users"], 2);
}

async fn get_health(app: &Router) -> serde_json::Value {
    let response = app
        .clone()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
