use axum::{
    extract::rejection::JsonRejection, extract::State, http::StatusCode, response::IntoResponse,
    Json,
};

use crate::modules::customers::core::views::CustomerView;
use crate::modules::customers::use_cases::register_customer::command::RegisterCustomer;
use crate::shared::inbound::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RegisterCustomer>, JsonRejection>,
) -> impl IntoResponse {
    let Json(command) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    if let Err(error) = command.validate() {
        return error_response(error);
    }

    match state.register_customer.handle(command).await {
        Ok(customer) => {
            (StatusCode::CREATED, Json(CustomerView::from(&customer))).into_response()
        }
        Err(error) => error_response(error),
    }
}
