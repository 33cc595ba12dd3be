//! Input validation for the student endpoints.
//!
//! Checks run before any storage access. Failures are collected per field so a
//! single response can list every problem with a request.

use crate::constants::MAX_EMAIL_LENGTH;
use crate::utils::sanitize_text;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("email pattern is valid")
});

/// A single failed check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// The kinds of constraint a field can be held to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Path segment holding a base-10 integer
    IntegerParam,
    /// Text that is not blank once trimmed and stripped of markup
    NonEmptyString,
    /// Text with valid email syntax
    Email,
    /// Body field holding an integer, as a JSON number or a numeric string
    Integer,
}

impl FieldRule {
    fn message(&self, field: &str) -> String {
        match self {
            FieldRule::IntegerParam | FieldRule::Integer => format!("{field} must be an integer"),
            FieldRule::NonEmptyString => format!("{field} is required and must be a non-empty string"),
            FieldRule::Email => format!("{field} must be a valid email address"),
        }
    }
}

/// Collects field failures while typed values are pulled out of a request
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    fn reject<T>(&mut self, field: &str, rule: FieldRule) -> Option<T> {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: rule.message(field),
        });
        None
    }

    /// Parses a path parameter as an integer id
    pub fn integer_param(&mut self, field: &str, raw: &str) -> Option<i32> {
        match raw.parse::<i32>() {
            Ok(value) => Some(value),
            Err(_) => self.reject(field, FieldRule::IntegerParam),
        }
    }

    /// Reads a required string that still has text once markup is stripped,
    /// and returns it trimmed
    pub fn non_empty_string(&mut self, field: &str, value: Option<&Value>) -> Option<String> {
        match value.and_then(Value::as_str).map(str::trim) {
            Some(text) if !sanitize_text(text).is_empty() => Some(text.to_string()),
            _ => self.reject(field, FieldRule::NonEmptyString),
        }
    }

    /// Reads a required email address and returns it trimmed
    pub fn email(&mut self, field: &str, value: Option<&Value>) -> Option<String> {
        match value.and_then(Value::as_str).map(str::trim) {
            Some(text) if is_valid_email(text) => Some(text.to_string()),
            _ => self.reject(field, FieldRule::Email),
        }
    }

    /// Reads a required integer body field
    pub fn integer(&mut self, field: &str, value: Option<&Value>) -> Option<i32> {
        let parsed = match value {
            Some(Value::Number(n)) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
            Some(Value::String(s)) => s.parse::<i32>().ok(),
            _ => None,
        };
        match parsed {
            Some(v) => Some(v),
            None => self.reject(field, FieldRule::Integer),
        }
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }
}

/// Checks email syntax
pub fn is_valid_email(candidate: &str) -> bool {
    candidate.len() <= MAX_EMAIL_LENGTH && EMAIL_RE.is_match(candidate)
}

/// Validated body of `POST /students`
#[derive(Debug, Clone, PartialEq)]
pub struct CreateStudentInput {
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl CreateStudentInput {
    /// Extracts `name`, `email` and `age`, reporting every invalid field at once
    pub fn from_json(body: &Value) -> Result<Self, Vec<FieldError>> {
        let mut check = Validator::new();
        let name = check.non_empty_string("name", body.get("name"));
        let email = check.email("email", body.get("email"));
        let age = check.integer("age", body.get("age"));

        match (name, email, age) {
            (Some(name), Some(email), Some(age)) => Ok(CreateStudentInput { name, email, age }),
            _ => Err(check.into_errors()),
        }
    }
}

/// Validated input of `PATCH /students/:id`
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateEmailInput {
    pub id: i32,
    pub email: String,
}

impl UpdateEmailInput {
    pub fn from_parts(raw_id: &str, body: &Value) -> Result<Self, Vec<FieldError>> {
        let mut check = Validator::new();
        let id = check.integer_param("id", raw_id);
        let email = check.email("email", body.get("email"));

        match (id, email) {
            (Some(id), Some(email)) => Ok(UpdateEmailInput { id, email }),
            _ => Err(check.into_errors()),
        }
    }
}

/// Validates a lone `:id` path segment
pub fn student_id(raw: &str) -> Result<i32, Vec<FieldError>> {
    let mut check = Validator::new();
    match check.integer_param("id", raw) {
        Some(id) => Ok(id),
        None => Err(check.into_errors()),
    }
}
