// Field-level rules evaluated against inbound commands before a use case
// handler runs. Every rule pushes onto the same collector so a single
// response lists all violated fields, not just the first one.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

#[derive(Default)]
pub struct RuleSet {
    violations: Vec<Violation>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.violations.push(Violation {
            field,
            message: message.into(),
        });
    }

    pub fn not_empty(&mut self, field: &'static str, value: &str) {
        if value.trim().is_empty() {
            self.push(field, format!("{field} must not be empty"));
        }
    }

    pub fn cpf(&mut self, field: &'static str, value: &str) {
        if value.trim().is_empty() {
            self.push(field, format!("{field} must not be empty"));
        } else if !is_valid_cpf(value) {
            self.push(field, "invalid CPF");
        }
    }

    pub fn email(&mut self, field: &'static str, value: &str) {
        if value.trim().is_empty() {
            self.push(field, format!("{field} must not be empty"));
        } else if !is_valid_email(value) {
            self.push(field, "invalid e-mail");
        }
    }

    pub fn positive(&mut self, field: &'static str, value: Decimal) {
        if value <= Decimal::ZERO {
            self.push(field, format!("{field} must be positive"));
        }
    }

    pub fn future_date(&mut self, field: &'static str, value: NaiveDate, today: NaiveDate) {
        if value <= today {
            self.push(field, format!("{field} must be in the future"));
        }
    }

    pub fn within(&mut self, field: &'static str, value: u32, min: u32, max: u32) {
        if value < min || value > max {
            self.push(field, format!("{field} must be between {min} and {max}"));
        }
    }

    pub fn finish(self) -> Vec<Violation> {
        self.violations
    }
}

/// Brazilian CPF check: eleven digits, not all equal, both check digits match.
pub fn is_valid_cpf(value: &str) -> bool {
    if value.len() != 11 {
        return false;
    }
    let digits: Vec<u32> = value.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != 11 {
        return false;
    }
    if digits.iter().all(|d| *d == digits[0]) {
        return false;
    }
    let check = |take: usize| -> u32 {
        let sum: u32 = digits[..take]
            .iter()
            .zip((2..=take as u32 + 1).rev())
            .map(|(d, w)| d * w)
            .sum();
        (sum * 10) % 11 % 10
    };
    check(9) == digits[9] && check(10) == digits[10]
}

pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
