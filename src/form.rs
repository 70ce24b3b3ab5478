//! Declarative per-field validation for the login and register forms.
//!
//! Each field is checked against its `Constraints` in fixed precedence:
//! required, then pattern, then minimum length. Failures are values, not
//! errors: callers inspect the per-form result struct to decide whether to
//! dispatch a submission and which field toast to show.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::types::{Credentials, RegisterPayload};

/// Recognized input patterns, enumerated so each form's validation is
/// exhaustive at compile time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// `^\S+@\S+$`: no whitespace, at least one interior `@`.
    Email,
}

impl Pattern {
    pub fn matches(self, value: &str) -> bool {
        match self {
            Self::Email => {
                if value.contains(char::is_whitespace) {
                    return false;
                }
                value
                    .char_indices()
                    .any(|(i, c)| c == '@' && i > 0 && i + 1 < value.len())
            }
        }
    }
}

/// Constraint set evaluated for one field on submit.
#[derive(Clone, Copy, Debug, Default)]
pub struct Constraints {
    pub required: bool,
    pub pattern: Option<Pattern>,
    pub min_length: Option<usize>,
}

/// Exactly one failure kind per field, in check order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    Missing,
    PatternMismatch,
    TooShort,
}

const EMAIL: Constraints = Constraints {
    required: true,
    pattern: Some(Pattern::Email),
    min_length: None,
};

const NAME: Constraints = Constraints {
    required: true,
    pattern: None,
    min_length: None,
};

const PASSWORD: Constraints = Constraints {
    required: true,
    pattern: None,
    min_length: Some(8),
};

/// Validate one raw value. Pure; returns the first failing check.
pub fn check(value: &str, constraints: &Constraints) -> Result<(), FieldError> {
    if constraints.required && value.is_empty() {
        return Err(FieldError::Missing);
    }
    if let Some(pattern) = constraints.pattern {
        if !value.is_empty() && !pattern.matches(value) {
            return Err(FieldError::PatternMismatch);
        }
    }
    if let Some(min) = constraints.min_length {
        if value.chars().count() < min {
            return Err(FieldError::TooShort);
        }
    }
    Ok(())
}

/// Toast routing for a failed validation pass: a stable id so repeats
/// replace the active toast, and a short display duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldNotice {
    pub id: &'static str,
    pub message: &'static str,
    pub duration_ms: u32,
}

const INVALID_EMAIL: FieldNotice = FieldNotice {
    id: "invalidEmail",
    message: "Invalid email",
    duration_ms: 2000,
};

const EMPTY_NAME: FieldNotice = FieldNotice {
    id: "emptyName",
    message: "Name field can't be blank",
    duration_ms: 2000,
};

const INVALID_PASSWORD: FieldNotice = FieldNotice {
    id: "invalidPassword",
    message: "Password must have at least 8 characters",
    duration_ms: 2000,
};

/// Raw login form fields as typed by the user.
#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Validation result for the login form, one slot per field. Recomputed
/// wholesale on every submit attempt, never partially stale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: Option<FieldError>,
    pub password: Option<FieldError>,
}

impl LoginForm {
    pub fn validate(&self) -> Result<Credentials, LoginErrors> {
        let errors = LoginErrors {
            email: check(&self.email, &EMAIL).err(),
            password: check(&self.password, &PASSWORD).err(),
        };
        if errors == LoginErrors::default() {
            Ok(Credentials {
                email: self.email.clone(),
                password: self.password.clone(),
            })
        } else {
            Err(errors)
        }
    }
}

impl LoginErrors {
    /// First failing field in display precedence: email, then password.
    pub fn notice(&self) -> Option<FieldNotice> {
        if self.email.is_some() {
            Some(INVALID_EMAIL)
        } else if self.password.is_some() {
            Some(INVALID_PASSWORD)
        } else {
            None
        }
    }
}

/// Raw register form fields as typed by the user.
#[derive(Clone, Debug, Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Validation result for the register form, one slot per field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegisterErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub password: Option<FieldError>,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<RegisterPayload, RegisterErrors> {
        let errors = RegisterErrors {
            name: check(&self.name, &NAME).err(),
            email: check(&self.email, &EMAIL).err(),
            password: check(&self.password, &PASSWORD).err(),
        };
        if errors == RegisterErrors::default() {
            Ok(RegisterPayload {
                name: self.name.clone(),
                email: self.email.clone(),
                password: self.password.clone(),
            })
        } else {
            Err(errors)
        }
    }
}

impl RegisterErrors {
    /// First failing field in display precedence: email, name, password.
    pub fn notice(&self) -> Option<FieldNotice> {
        if self.email.is_some() {
            Some(INVALID_EMAIL)
        } else if self.name.is_some() {
            Some(EMPTY_NAME)
        } else if self.password.is_some() {
            Some(INVALID_PASSWORD)
        } else {
            None
        }
    }
}
