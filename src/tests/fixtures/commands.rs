// Shared command builders for unit and e2e tests.

use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::modules::credits::use_cases::request_credit::command::RequestCredit;
use crate::modules::customers::use_cases::register_customer::command::RegisterCustomer;

pub struct RegisterCustomerBuilder {
    inner: RegisterCustomer,
}

impl RegisterCustomerBuilder {
    pub fn new() -> Self {
        Self {
            inner: RegisterCustomer {
                first_name: "Joao".into(),
                last_name: "Silva".into(),
                cpf: "12345678909".into(),
                income: Decimal::new(1000, 0),
                email: "joao@example.com".into(),
                password: "secret".into(),
                zip_code: "12345-000".into(),
                street: "Rua Um".into(),
            },
        }
    }

    pub fn with_cpf(mut self, cpf: &str) -> Self {
        self.inner.cpf = cpf.into();
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.inner.email = email.into();
        self
    }

    pub fn build(self) -> RegisterCustomer {
        self.inner
    }
}

pub struct RequestCreditBuilder {
    inner: RequestCredit,
}

impl RequestCreditBuilder {
    pub fn new() -> Self {
        Self {
            inner: RequestCredit {
                credit_value: Decimal::new(1000, 0),
                first_installment_date: (Utc::now() + Duration::days(30)).date_naive(),
                number_of_installments: 12,
                customer_id: 1,
            },
        }
    }

    pub fn with_customer_id(mut self, customer_id: i64) -> Self {
        self.inner.customer_id = customer_id;
        self
    }

    pub fn with_installments(mut self, installments: u32) -> Self {
        self.inner.number_of_installments = installments;
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.inner.first_installment_date = date;
        self
    }

    pub fn with_value(mut self, value: Decimal) -> Self {
        self.inner.credit_value = value;
        self
    }

    pub fn build(self) -> RequestCredit {
        self.inner
    }
}
