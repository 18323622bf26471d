use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::credits::core::views::CreditView;
use crate::modules::customers::core::customer::CustomerId;
use crate::shared::core::errors::DomainError;
use crate::shared::inbound::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindCreditParams {
    pub customer_id: CustomerId,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(credit_code): Path<Uuid>,
    Query(params): Query<FindCreditParams>,
) -> impl IntoResponse {
    let credit = match state
        .find_credit_by_code
        .handle(credit_code, params.customer_id)
        .await
    {
        Ok(credit) => credit,
        // A non-owner gets the exact response an absent code produces, so the
        // existence of the code is never revealed.
        Err(DomainError::OwnershipMismatch(_)) => {
            return error_response(DomainError::NotFound(format!(
                "CreditCode {credit_code} not found"
            )));
        }
        Err(error) => return error_response(error),
    };
    match state.find_customer_by_id.handle(credit.customer_id).await {
        Ok(owner) => Json(CreditView::new(&credit, &owner)).into_response(),
        Err(error) => error_response(error),
    }
}
