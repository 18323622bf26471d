use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::modules::credits::core::views::CreditSummaryView;
use crate::modules::customers::core::customer::CustomerId;
use crate::shared::inbound::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(customer_id): Path<CustomerId>,
) -> impl IntoResponse {
    match state.list_credits_by_customer.handle(customer_id).await {
        Ok(credits) => {
            let views: Vec<CreditSummaryView> =
                credits.iter().map(CreditSummaryView::from).collect();
            Json(views).into_response()
        }
        Err(error) => error_response(error),
    }
}
