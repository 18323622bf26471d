use axum::{
    extract::rejection::JsonRejection, extract::State, http::StatusCode, response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::modules::credits::core::views::CreditView;
use crate::modules::credits::use_cases::request_credit::command::RequestCredit;
use crate::shared::inbound::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RequestCredit>, JsonRejection>,
) -> impl IntoResponse {
    let Json(command) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    if let Err(error) = command.validate(Utc::now().date_naive()) {
        return error_response(error);
    }

    let credit = match state.request_credit.handle(command).await {
        Ok(credit) => credit,
        Err(error) => return error_response(error),
    };
    match state.find_customer_by_id.handle(credit.customer_id).await {
        Ok(owner) => {
            (StatusCode::CREATED, Json(CreditView::new(&credit, &owner))).into_response()
        }
        Err(error) => error_response(error),
    }
}
