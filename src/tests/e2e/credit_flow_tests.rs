// Full registration-to-credit flow over the real router, backed by the
// in-memory stores.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::shell::{http, state::AppState};

fn app() -> Router {
    http::router(AppState::in_memory())
}

async fn post_json(app: &Router, uri: &str, body: String) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::post(uri)
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

fn customer_body(cpf: &str, email: &str) -> String {
    format!(
        r#"{{"firstName":"Joao","lastName":"Silva","cpf":"{cpf}","income":1000,"email":"{email}","password":"secret","zipCode":"12345-000","street":"Rua Um"}}"#
    )
}

fn credit_body(customer_id: i64) -> String {
    let date = (Utc::now() + Duration::days(30)).date_naive();
    format!(
        r#"{{"creditValue":1000,"firstInstallmentDate":"{date}","numberOfInstallments":12,"customerId":{customer_id}}}"#
    )
}

#[tokio::test]
async fn it_should_register_a_customer_and_originate_an_in_progress_credit() {
    let app = app();

    let (status, customer) = post_json(
        &app,
        "/api/customers",
        customer_body("12345678909", "a@b.com"),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let customer_id = customer["id"].as_i64().unwrap();

    let (status, credit) = post_json(&app, "/api/credits", credit_body(customer_id)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(credit["status"], "IN_PROGRESS");
    assert_eq!(credit["creditValue"], serde_json::json!("1000"));
    assert_eq!(credit["numberOfInstallments"], 12);

    let (status, listed) = get_json(&app, &format!("/api/credits/from/{customer_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let code = credit["creditCode"].as_str().unwrap();
    let (status, found) =
        get_json(&app, &format!("/api/credits/{code}?customerId={customer_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found["creditCode"], serde_json::json!(code));
}

#[tokio::test]
async fn it_should_hide_a_credit_from_every_other_customer() {
    let app = app();

    post_json(
        &app,
        "/api/customers",
        customer_body("12345678909", "a@b.com"),
    )
    .await;
    post_json(
        &app,
        "/api/customers",
        customer_body("11144477735", "b@c.com"),
    )
    .await;
    let (_, credit) = post_json(&app, "/api/credits", credit_body(1)).await;
    let code = credit["creditCode"].as_str().unwrap();

    let (status, body) = get_json(&app, &format!("/api/credits/{code}?customerId=2")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(
        body["summary"],
        serde_json::json!(format!("CreditCode {code} not found"))
    );
}

#[tokio::test]
async fn it_should_refuse_to_delete_a_customer_who_still_owns_credits() {
    let app = app();

    post_json(
        &app,
        "/api/customers",
        customer_body("12345678909", "a@b.com"),
    )
    .await;
    post_json(&app, "/api/credits", credit_body(1)).await;

    let response = app
        .clone()
        .oneshot(
            Request::delete("/api/customers/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // the customer is still there
    let (status, _) = get_json(&app, "/api/customers/1").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn it_should_conflict_on_a_second_customer_with_the_same_cpf() {
    let app = app();

    let (status, _) = post_json(
        &app,
        "/api/customers",
        customer_body("12345678909", "a@b.com"),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post_json(
        &app,
        "/api/customers",
        customer_body("12345678909", "other@b.com"),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["summary"], "cpf already registered");
}
