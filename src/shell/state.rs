use std::sync::Arc;

use crate::modules::credits::adapters::outbound::in_memory::InMemoryCreditRepository;
use crate::modules::credits::use_cases::find_credit_by_code::handler::FindCreditByCodeHandler;
use crate::modules::credits::use_cases::list_credits_by_customer::handler::ListCreditsByCustomerHandler;
use crate::modules::credits::use_cases::request_credit::handler::RequestCreditHandler;
use crate::modules::customers::adapters::outbound::in_memory::InMemoryCustomerRepository;
use crate::modules::customers::use_cases::delete_customer::handler::DeleteCustomerHandler;
use crate::modules::customers::use_cases::find_customer_by_id::handler::FindCustomerByIdHandler;
use crate::modules::customers::use_cases::register_customer::handler::RegisterCustomerHandler;
use crate::modules::customers::use_cases::update_customer::handler::UpdateCustomerHandler;

#[derive(Clone)]
pub struct AppState {
    pub register_customer: Arc<RegisterCustomerHandler>,
    pub find_customer_by_id: Arc<FindCustomerByIdHandler>,
    pub update_customer: Arc<UpdateCustomerHandler>,
    pub delete_customer: Arc<DeleteCustomerHandler>,
    pub request_credit: Arc<RequestCreditHandler>,
    pub list_credits_by_customer: Arc<ListCreditsByCustomerHandler>,
    pub find_credit_by_code: Arc<FindCreditByCodeHandler>,
}

impl AppState {
    /// Wires every handler over fresh in-memory stores.
    pub fn in_memory() -> Self {
        let customers = Arc::new(InMemoryCustomerRepository::new());
        let credits = Arc::new(InMemoryCreditRepository::new());
        Self {
            register_customer: Arc::new(RegisterCustomerHandler::new(customers.clone())),
            find_customer_by_id: Arc::new(FindCustomerByIdHandler::new(customers.clone())),
            update_customer: Arc::new(UpdateCustomerHandler::new(customers.clone())),
            delete_customer: Arc::new(DeleteCustomerHandler::new(
                customers.clone(),
                credits.clone(),
            )),
            request_credit: Arc::new(RequestCreditHandler::new(credits.clone(), customers)),
            list_credits_by_customer: Arc::new(ListCreditsByCustomerHandler::new(credits.clone())),
            find_credit_by_code: Arc::new(FindCreditByCodeHandler::new(credits)),
        }
    }
}
