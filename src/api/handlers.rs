use crate::api::context::AppContext;
use crate::api::errors::ApiError;
use crate::api::validation::{self, CreateStudentInput, UpdateEmailInput};
use crate::constants::{
    DEFAULT_KEYWORD, STUDENT_CREATED, STUDENT_DELETED, STUDENT_EMAIL_UPDATED, STUDENT_NOT_FOUND,
};
use crate::db::{NewStudent, Student};
use crate::utils::sanitize_text;
use axum::body::Bytes;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{
    extract::{Extension, Path, Query},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

/// Generic confirmation payload
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Self {
        MessageResponse {
            message: message.to_string(),
        }
    }
}

/// Response payload after successfully creating a student
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentResponse {
    pub message: String,
    pub student_id: i32,
}

/// Result of a lookup by id
///
/// A missing student is reported as a message with a 200 status, not as a 404.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum StudentLookup {
    Found(Student),
    Missing(MessageResponse),
}

/// Query string of `/say`
#[derive(Debug, Deserialize)]
pub struct SayQuery {
    pub keyword: Option<String>,
}

/// Parses a request body leniently; anything that is not JSON becomes `null`
/// so that every required field is reported by validation.
fn json_body(body: &Bytes) -> Value {
    serde_json::from_slice(body).unwrap_or(Value::Null)
}

/// Lists every student
#[axum::debug_handler]
pub async fn list_students(
    Extension(context): Extension<AppContext>,
) -> Result<Json<Vec<Student>>, ApiError> {
    let students = context.database.run(|repo| repo.list_students()).await?;
    debug!("Listed {} students", students.len());
    Ok(Json(students))
}

/// Retrieves a student by id
///
/// # Arguments
/// * `id` - Raw path segment, must parse as an integer
/// * `context` - Shared application context
#[axum::debug_handler]
pub async fn get_student(
    Path(id): Path<String>,
    Extension(context): Extension<AppContext>,
) -> Result<Json<StudentLookup>, ApiError> {
    let id = validation::student_id(&id)?;

    let found = context
        .database
        .run(move |repo| repo.get_student(id))
        .await?;

    Ok(Json(match found {
        Some(student) => StudentLookup::Found(student),
        None => StudentLookup::Missing(MessageResponse::new(STUDENT_NOT_FOUND)),
    }))
}

/// Creates a student from `{name, email, age}`
///
/// `name` and `email` are stripped of markup before insertion; `age` is stored as given.
#[axum::debug_handler]
pub async fn create_student(
    Extension(context): Extension<AppContext>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreateStudentResponse>), ApiError> {
    let input = CreateStudentInput::from_json(&json_body(&body))?;

    let new_student = NewStudent {
        name: sanitize_text(&input.name),
        email: sanitize_text(&input.email),
        age: input.age,
    };
    let student_id = context
        .database
        .run(move |repo| repo.insert_student(&new_student))
        .await?;

    info!("Created student {}", student_id);
    Ok((
        StatusCode::CREATED,
        Json(CreateStudentResponse {
            message: STUDENT_CREATED.to_string(),
            student_id,
        }),
    ))
}

/// Replaces a student's email
///
/// Succeeds whether or not a student matched the id.
#[axum::debug_handler]
pub async fn update_student_email(
    Path(id): Path<String>,
    Extension(context): Extension<AppContext>,
    body: Bytes,
) -> Result<Json<MessageResponse>, ApiError> {
    let input = UpdateEmailInput::from_parts(&id, &json_body(&body))?;

    let email = sanitize_text(&input.email);
    let touched = context
        .database
        .run(move |repo| repo.update_student_email(input.id, &email))
        .await?;

    debug!("Email update for student {} touched {} rows", input.id, touched);
    Ok(Json(MessageResponse::new(STUDENT_EMAIL_UPDATED)))
}

/// Deletes a student by id
///
/// Succeeds whether or not a student matched the id.
#[axum::debug_handler]
pub async fn delete_student(
    Path(id): Path<String>,
    Extension(context): Extension<AppContext>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = validation::student_id(&id)?;

    let removed = context
        .database
        .run(move |repo| repo.delete_student(id))
        .await?;

    debug!("Delete of student {} removed {} rows", id, removed);
    Ok(Json(MessageResponse::new(STUDENT_DELETED)))
}

/// Forwards `keyword` to the remote function and relays its body
///
/// A missing or empty keyword is sent as `"nothing"`.
#[axum::debug_handler]
pub async fn say(
    Query(query): Query<SayQuery>,
    Extension(context): Extension<AppContext>,
) -> Result<Response, ApiError> {
    let keyword = query
        .keyword
        .filter(|k| !k.is_empty())
        .unwrap_or_else(|| DEFAULT_KEYWORD.to_string());
    let reply = context.remote.call(&keyword).await?;

    let mut response = (StatusCode::OK, reply.body).into_response();
    if let Some(value) = reply
        .content_type
        .and_then(|ct| header::HeaderValue::from_str(&ct).ok())
    {
        response.headers_mut().insert(header::CONTENT_TYPE, value);
    }
    Ok(response)
}
