mod harness;

use axum::{Json, Router, routing};
use daymemory_core::{EVENT_DATE_MESSAGE, FieldViolation, Validate, validate_event_date};
use daymemory_server::ValidatedJson;
use http::StatusCode;
use jiff::{ToSpan, Zoned};
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateEventRequest {
    title: String,
    event_date: Option<jiff::civil::Date>,
}

impl Validate for CreateEventRequest {
    fn validate(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();
        if self.title.trim().is_empty() {
            violations.push(FieldViolation::new("title", json!(self.title), "title must not be blank"));
        }
        if let Some(violation) = validate_event_date("eventDate", self.event_date) {
            violations.push(violation);
        }
        violations
    }
}

fn routes() -> Router {
    Router::new().route("/events", routing::post(create_event))
}

async fn create_event(ValidatedJson(request): ValidatedJson<CreateEventRequest>) -> (StatusCode, Json<Value>) {
    (StatusCode::CREATED, Json(json!({ "title": request.title })))
}

#[tokio::test]
async fn valid_input_reaches_the_handler() {
    let app = harness::app(routes());
    let today = Zoned::now().date();
    let body = json!({ "title": "mom's birthday", "eventDate": today.to_string() }).to_string();

    let (status, response) = harness::send_json(app, harness::post_json("/events", &body)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(response["title"], json!("mom's birthday"));
}

#[tokio::test]
async fn absent_event_date_is_valid() {
    let app = harness::app(routes());
    let body = json!({ "title": "anniversary" }).to_string();

    let (status, _) = harness::send_json(app, harness::post_json("/events", &body)).await;

    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn date_at_the_window_edge_is_valid() {
    let app = harness::app(routes());
    let edge = Zoned::now().date().saturating_add(10.years());
    let body = json!({ "title": "a distant day", "eventDate": edge.to_string() }).to_string();

    let (status, _) = harness::send_json(app, harness::post_json("/events", &body)).await;

    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn violations_are_aggregated_in_field_order() {
    let app = harness::app(routes());
    let yesterday = Zoned::now().date().yesterday().unwrap();
    let body = json!({ "title": "  ", "eventDate": yesterday.to_string() }).to_string();

    let (status, response) = harness::send_json(app, harness::post_json("/events", &body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["status"], json!(400));
    assert_eq!(response["code"], json!("VALIDATION_ERROR"));
    assert_eq!(response["message"], json!("input validation failed"));

    let errors = response["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0]["field"], json!("title"));
    assert_eq!(errors[0]["rejectedValue"], json!("  "));
    assert_eq!(errors[1]["field"], json!("eventDate"));
    assert_eq!(errors[1]["rejectedValue"], json!(yesterday.to_string()));
    assert_eq!(errors[1]["message"], json!(EVENT_DATE_MESSAGE));
}

#[tokio::test]
async fn date_past_the_window_is_a_single_violation() {
    let app = harness::app(routes());
    let too_far = Zoned::now().date().saturating_add(10.years().days(1));
    let body = json!({ "title": "far future", "eventDate": too_far.to_string() }).to_string();

    let (status, response) = harness::send_json(app, harness::post_json("/events", &body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = response["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["field"], json!("eventDate"));
}

#[tokio::test]
async fn malformed_body_is_a_classified_bad_request() {
    let app = harness::app(routes());

    let (status, response) = harness::send_json(app, harness::post_json("/events", "{not json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["code"], json!("INVALID_REQUEST"));
    assert_eq!(response["message"], json!("invalid request"));
}
