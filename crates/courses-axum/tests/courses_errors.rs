//! Negative-path contract tests: missing resources, malformed input and
//! rejected writes.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::json;

use common::{TestApp, URL, course_url};
use courses_core::MAX_COURSE_NAME_LEN;

#[tokio::test]
async fn retrieve_missing_course_is_404() {
    let app = TestApp::new().await;

    let response = app.get(&course_url(999)).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    let data = response.json();
    assert_eq!(data["status"], 404);
    assert!(data["error"].as_str().unwrap().contains("999"));
}

#[tokio::test]
async fn non_numeric_id_is_404() {
    let app = TestApp::new().await;

    let response = app.get(&format!("{URL}abc/")).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn patch_missing_course_is_404() {
    let app = TestApp::new().await;

    let response = app.patch(&course_url(7), &json!({"name": "math"})).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_missing_course_is_404_and_count_unchanged() {
    let app = TestApp::new().await;
    app.courses().make_many(2, &[]).await.unwrap();

    let response = app.delete(&course_url(999)).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(app.course_count().await, 2);
}

#[tokio::test]
async fn post_blank_name_is_400() {
    let app = TestApp::new().await;

    let response = app.post(URL, &json!({"name": "   "})).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.course_count().await, 0);
}

#[tokio::test]
async fn post_missing_name_is_400() {
    let app = TestApp::new().await;

    let response = app.post(URL, &json!({"students": []})).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["status"], 400);
    assert_eq!(app.course_count().await, 0);
}

#[tokio::test]
async fn post_overlong_name_is_400() {
    let app = TestApp::new().await;
    let name = "x".repeat(MAX_COURSE_NAME_LEN + 1);

    let response = app.post(URL, &json!({"name": name})).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.course_count().await, 0);
}

#[tokio::test]
async fn post_malformed_json_is_400() {
    let app = TestApp::new().await;

    let response = app
        .send(
            Request::post(URL)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"name\": "))
                .unwrap(),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.course_count().await, 0);
}

#[tokio::test]
async fn post_unknown_student_is_400() {
    let app = TestApp::new().await;
    let students = app.students().make_many(1).await.unwrap();

    let response = app
        .post(URL, &json!({"name": "math", "students": [students[0].id, 4242]}))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.json()["error"].as_str().unwrap().contains("4242"));
    assert_eq!(app.course_count().await, 0);
}

#[tokio::test]
async fn patch_blank_name_leaves_course_unchanged() {
    let app = TestApp::new().await;
    let course = app.courses().make_many(1, &[]).await.unwrap().remove(0);

    let response = app.patch(&course_url(course.id), &json!({"name": ""})).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let current = app.get(&course_url(course.id)).await.json();
    assert_eq!(current["name"], course.name.as_str());
}

#[tokio::test]
async fn patch_unknown_student_leaves_enrolment_unchanged() {
    let app = TestApp::new().await;
    let students = app.students().make_many(2).await.unwrap();
    let course = app.courses().make_many(1, &students).await.unwrap().remove(0);
    let url = course_url(course.id);

    let response = app
        .patch(&url, &json!({"students": [students[0].id, 999]}))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.json()["error"].as_str().unwrap().contains("999"));
    assert_eq!(app.get(&url).await.json()["students"], json!(course.students));
}

#[tokio::test]
async fn put_requires_name() {
    let app = TestApp::new().await;
    let course = app.courses().make_many(1, &[]).await.unwrap().remove(0);

    let response = app.put(&course_url(course.id), &json!({"students": []})).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_integer_id_filter_is_400() {
    let app = TestApp::new().await;

    let response = app.get(&format!("{URL}?id=abc")).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["status"], 400);
}

#[tokio::test]
async fn limit_out_of_range_is_400() {
    let app = TestApp::new().await;

    for limit in ["0", "1001", "-1"] {
        let response = app.get(&format!("{URL}?limit={limit}")).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "limit={limit}");
    }
}
