use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::modules::customers::core::customer::CustomerId;
use crate::modules::customers::core::views::CustomerView;
use crate::modules::customers::use_cases::update_customer::command::UpdateCustomer;
use crate::shared::inbound::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<CustomerId>,
    body: Result<Json<UpdateCustomer>, JsonRejection>,
) -> impl IntoResponse {
    let Json(command) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    if let Err(error) = command.validate() {
        return error_response(error);
    }

    match state.update_customer.handle(id, command.into_patch()).await {
        Ok(customer) => Json(CustomerView::from(&customer)).into_response(),
        Err(error) => error_response(error),
    }
}

#[cfg(test)]
mod update_customer_http_inbound_tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::{patch, post},
        Router,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::modules::customers::use_cases::register_customer::inbound::http as register_http;
    use crate::shell::state::AppState;

    use super::handle;

    fn app() -> Router {
        Router::new()
            .route("/api/customers", post(register_http::handle))
            .route("/api/customers/{id}", patch(handle))
            .with_state(AppState::in_memory())
    }

    async fn register(app: &Router) {
        let body = r#"{"firstName":"Joao","lastName":"Silva","cpf":"12345678909","income":1000,"email":"joao@example.com","password":"secret","zipCode":"12345-000","street":"Rua Um"}"#;
        app.clone()
            .oneshot(
                Request::post("/api/customers")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn it_should_return_200_with_the_merged_customer() {
        let app = app();
        register(&app).await;

        let body = r#"{"firstName":"Maria","lastName":"Souza","income":2500,"zipCode":"54321-000","street":"Rua Dois"}"#;
        let response = app
            .oneshot(
                Request::patch("/api/customers/1")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["firstName"], "Maria");
        assert_eq!(json["zipCode"], "54321-000");
        // identity fields survive the merge
        assert_eq!(json["cpf"], "12345678909");
        assert_eq!(json["email"], "joao@example.com");
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_id() {
        let body = r#"{"firstName":"Maria","lastName":"Souza","income":2500,"zipCode":"54321-000","street":"Rua Dois"}"#;
        let response = app()
            .oneshot(
                Request::patch("/api/customers/7")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn it_should_return_400_when_a_patch_field_is_empty() {
        let app = app();
        register(&app).await;

        let body = r#"{"firstName":"","lastName":"Souza","income":2500,"zipCode":"54321-000","street":"Rua Dois"}"#;
        let response = app
            .oneshot(
                Request::patch("/api/customers/1")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn it_should_return_422_when_a_patch_field_is_missing() {
        let app = app();
        register(&app).await;

        // partial patches are not permitted
        let body = r#"{"firstName":"Maria"}"#;
        let response = app
            .oneshot(
                Request::patch("/api/customers/1")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
