//! Entity validators.
//!
//! Pure functions, no side effects. Each rule is evaluated independently and
//! every violation is collected, so a form submission with three bad fields
//! comes back with three messages. Messages are the user-facing strings shown
//! by both the HTML and JSON surfaces.

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use shared::normalize::round_price;
use validator::ValidationError;

use crate::models::{ProductInput, UserInput};

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+$").expect("valid regex");
}

/// Whether a password is mandatory for the candidate being validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRule {
    /// Creation: a password must be supplied.
    Required,
    /// Edit: only validated when a new, non-blank password is supplied.
    IfProvided,
}

/// Validates that a product name has at least 3 characters after trimming.
pub fn validate_product_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().chars().count() >= 3 {
        Ok(())
    } else {
        let mut err = ValidationError::new("product_name_length");
        err.message = Some("O nome do produto deve ter no mínimo 3 caracteres".into());
        Err(err)
    }
}

/// Validates that a price is strictly positive at the stored 2-decimal
/// precision. Sub-cent values that round down to 0.00 would violate the
/// storage constraint, so they are rejected here rather than surfacing as
/// a database error.
pub fn validate_price(price: Decimal) -> Result<(), ValidationError> {
    if round_price(price) > Decimal::ZERO {
        Ok(())
    } else {
        let mut err = ValidationError::new("price_positive");
        err.message = Some("O preço deve ser um valor positivo".into());
        Err(err)
    }
}

/// Validates that a stock quantity is not negative.
pub fn validate_stock(stock: i32) -> Result<(), ValidationError> {
    if stock >= 0 {
        Ok(())
    } else {
        let mut err = ValidationError::new("stock_non_negative");
        err.message = Some("O estoque deve ser um número inteiro maior ou igual a zero".into());
        Err(err)
    }
}

/// Validates that a user name has between 3 and 100 characters after trimming.
pub fn validate_user_name(name: &str) -> Result<(), ValidationError> {
    let len = name.trim().chars().count();
    if (3..=100).contains(&len) {
        Ok(())
    } else {
        let mut err = ValidationError::new("user_name_length");
        err.message = Some("O nome deve ter entre 3 e 100 caracteres".into());
        Err(err)
    }
}

/// Validates that an email matches the canonical `local@domain.tld` pattern.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(email.trim()) {
        Ok(())
    } else {
        let mut err = ValidationError::new("email_format");
        err.message = Some("O e-mail informado não é válido".into());
        Err(err)
    }
}

/// Validates that a password has at least 6 characters.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() >= 6 {
        Ok(())
    } else {
        let mut err = ValidationError::new("password_length");
        err.message = Some("A senha deve ter no mínimo 6 caracteres".into());
        Err(err)
    }
}

fn collect(violations: &mut Vec<String>, result: Result<(), ValidationError>) {
    if let Err(err) = result {
        if let Some(message) = err.message {
            violations.push(message.into_owned());
        }
    }
}

/// Validates a product candidate. Returns every violated rule's message;
/// an empty vector means the candidate is valid.
pub fn validate_product(input: &ProductInput) -> Vec<String> {
    let mut violations = Vec::new();
    collect(&mut violations, validate_product_name(&input.name));
    collect(&mut violations, validate_price(input.price));
    collect(&mut violations, validate_stock(input.stock));
    violations
}

/// Validates a user candidate. The password rule depends on whether this is
/// a creation (`Required`) or an edit (`IfProvided`): on edit, a blank or
/// absent password means "keep the current one" and is not a violation.
pub fn validate_user(input: &UserInput, rule: PasswordRule) -> Vec<String> {
    let mut violations = Vec::new();
    collect(&mut violations, validate_user_name(&input.name));
    collect(&mut violations, validate_email(&input.email));

    match rule {
        PasswordRule::Required => {
            let password = input.password.as_deref().unwrap_or("");
            collect(&mut violations, validate_password(password));
        }
        PasswordRule::IfProvided => {
            if input.wants_password_change() {
                let password = input.password.as_deref().unwrap_or("");
                collect(&mut violations, validate_password(password));
            }
        }
    }

    violations
}
