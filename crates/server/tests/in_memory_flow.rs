use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use server::{routes, state::AppState};
use service::meetup::repository::mock::MockMeetupRepository;
use service::registration::repository::mock::MockRegistrationRepository;

fn app() -> Router {
    let state = AppState::from_repositories(
        Arc::new(MockMeetupRepository::default()),
        Arc::new(MockRegistrationRepository::default()),
    );
    routes::build_router(state, tower_http::cors::CorsLayer::very_permissive())
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, String) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(b.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn json(body: &str) -> Value {
    serde_json::from_str(body).unwrap()
}

#[tokio::test]
async fn registration_and_meetup_lifecycle() {
    let app = app();

    // registrant
    let (status, body) = call(
        &app,
        Method::POST,
        "/api/registrations",
        Some(json!({"name": "Ana Neri", "registration": "123", "dateOfRegistration": "10/10/2021"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let registration_id: i32 = body.parse().unwrap();

    let (status, _) = call(
        &app,
        Method::POST,
        "/api/registrations",
        Some(json!({"name": "Someone Else", "registration": "123"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = call(&app, Method::GET, &format!("/api/registrations/{registration_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["registration"], "123");

    // meetups
    let (status, body) = call(
        &app,
        Method::POST,
        "/api/meetups",
        Some(json!({"registrationAttribute": "123", "event": "Womakerscode Dados", "meetupDate": "10/10/2021"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let meetup_id: i32 = body.parse().unwrap();

    let (status, _) = call(
        &app,
        Method::POST,
        "/api/meetups",
        Some(json!({"registrationAttribute": "123", "event": "Rust Meetup"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = call(
        &app,
        Method::POST,
        "/api/meetups",
        Some(json!({"registrationAttribute": "999", "event": "Rust Meetup"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = call(&app, Method::GET, &format!("/api/meetups/{meetup_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let meetup = json(&body);
    assert_eq!(meetup["event"], "Womakerscode Dados");
    assert_eq!(meetup["registered"], false);
    assert_eq!(meetup["registration"]["id"], registration_id);

    // filters
    let (status, body) = call(&app, Method::GET, "/api/meetups", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["totalElements"], 2);

    let (_, body) = call(&app, Method::GET, "/api/meetups?event=Rust%20Meetup&registration=123", None).await;
    let page = json(&body);
    assert_eq!(page["totalElements"], 1);
    assert_eq!(page["content"][0]["event"], "Rust Meetup");

    let (_, body) = call(&app, Method::GET, "/api/meetups?registration=999", None).await;
    assert_eq!(json(&body)["totalElements"], 0);

    let (_, body) = call(&app, Method::GET, "/api/meetups?page=1&size=1", None).await;
    let page = json(&body);
    assert_eq!(page["content"].as_array().map(Vec::len), Some(1));
    assert_eq!(page["totalPages"], 2);
    assert_eq!(page["pageable"]["pageNumber"], 1);

    let (status, body) = call(&app, Method::GET, "/api/meetups?page=18446744073709551615", None).await;
    assert_eq!(status, StatusCode::OK);
    let page = json(&body);
    assert_eq!(page["totalElements"], 2);
    assert_eq!(page["content"].as_array().map(Vec::len), Some(0));

    let (status, body) = call(
        &app,
        Method::GET,
        &format!("/api/registrations/{registration_id}/meetups?page=18446744073709551615"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["content"].as_array().map(Vec::len), Some(0));

    let (status, body) = call(&app, Method::GET, &format!("/api/registrations/{registration_id}/meetups"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["totalElements"], 2);

    // update
    let (status, body) = call(
        &app,
        Method::PUT,
        &format!("/api/meetups/{meetup_id}"),
        Some(json!({"event": "test event", "meetupDate": "06/06/2022", "registered": true})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let updated = json(&body);
    assert_eq!(updated["id"], meetup_id);
    assert_eq!(updated["event"], "test event");
    assert_eq!(updated["meetupDate"], "06/06/2022");
    assert_eq!(updated["registered"], true);

    let (status, _) = call(&app, Method::PUT, &format!("/api/meetups/{meetup_id}"), Some(json!({"event": ""}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // delete
    let (status, _) = call(&app, Method::DELETE, &format!("/api/meetups/{meetup_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = call(&app, Method::GET, &format!("/api/meetups/{meetup_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = call(&app, Method::DELETE, &format!("/api/meetups/{meetup_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn metrics_exposes_meetup_counters() {
    let app = app();

    call(&app, Method::POST, "/api/registrations", Some(json!({"name": "Ana Neri", "registration": "m-1"}))).await;
    let (status, _) = call(
        &app,
        Method::POST,
        "/api/meetups",
        Some(json!({"registrationAttribute": "m-1", "event": "Metrics Night"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = call(&app, Method::GET, "/metrics", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("meetup_created_total"));
}
