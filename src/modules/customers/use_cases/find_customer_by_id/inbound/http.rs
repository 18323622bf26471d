use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::modules::customers::core::customer::CustomerId;
use crate::modules::customers::core::views::CustomerView;
use crate::shared::inbound::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<CustomerId>,
) -> impl IntoResponse {
    match state.find_customer_by_id.handle(id).await {
        Ok(customer) => Json(CustomerView::from(&customer)).into_response(),
        Err(error) => error_response(error),
    }
}
