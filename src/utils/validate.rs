use crate::types::error::{AppError, FieldError};
use crate::types::user::{RUserLogin, RUserRegister};

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn email_shape_ok(email: &str) -> bool {
    let email = email.trim();
    if email.contains(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

pub fn validate_register(body: &RUserRegister) -> Result<(), AppError> {
    let mut errors = Vec::new();
    if !email_shape_ok(&body.email) {
        errors.push(FieldError {
            field: "email",
            message: "Invalid Email",
        });
    }
    if body.first_name.trim().len() < 3 {
        errors.push(FieldError {
            field: "first_name",
            message: "First name must be at least 3 characters long",
        });
    }
    if body.password.len() < 6 {
        errors.push(FieldError {
            field: "password",
            message: "Password must be at least 6 characters long",
        });
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

pub fn validate_login(body: &RUserLogin) -> Result<(), AppError> {
    let mut errors = Vec::new();
    if !email_shape_ok(&body.email) {
        errors.push(FieldError {
            field: "email",
            message: "Invalid Email",
        });
    }
    if body.password.len() < 6 {
        errors.push(FieldError {
            field: "password",
            message: "Password must be at least 6 characters long",
        });
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}
