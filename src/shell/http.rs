use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::modules::credits::use_cases::find_credit_by_code::inbound::http as find_credit_http;
use crate::modules::credits::use_cases::list_credits_by_customer::inbound::http as list_credits_http;
use crate::modules::credits::use_cases::request_credit::inbound::http as request_credit_http;
use crate::modules::customers::use_cases::delete_customer::inbound::http as delete_customer_http;
use crate::modules::customers::use_cases::find_customer_by_id::inbound::http as find_customer_http;
use crate::modules::customers::use_cases::register_customer::inbound::http as register_customer_http;
use crate::modules::customers::use_cases::update_customer::inbound::http as update_customer_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/customers", post(register_customer_http::handle))
        .route(
            "/api/customers/{id}",
            get(find_customer_http::handle)
                .patch(update_customer_http::handle)
                .delete(delete_customer_http::handle),
        )
        .route("/api/credits", post(request_credit_http::handle))
        .route(
            "/api/credits/from/{customer_id}",
            get(list_credits_http::handle),
        )
        .route("/api/credits/{credit_code}", get(find_credit_http::handle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
