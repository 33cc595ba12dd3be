//! API routes configuration module

use crate::api::context::AppContext;
use crate::api::docs::api_docs;
use crate::api::handlers::{
    create_student, delete_student, get_student, list_students, say, update_student_email,
};
use axum::body::Body;
use axum::http::Request;
use axum::{routing::get, Extension, Router};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

/// Creates and configures the API router with all routes
///
/// # Arguments
/// * `context` - Application context shared across handlers
///
/// # Returns
/// * `Router` - Configured router with all API endpoints and middleware
pub fn app(context: AppContext) -> Router {
    Router::new()
        .route("/students", get(list_students).post(create_student))
        .route(
            "/students/:id",
            get(get_student)
                .patch(update_student_email)
                .delete(delete_student),
        )
        .route("/say", get(say))
        .route("/api-docs", get(api_docs))
        .layer(Extension(context))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    path = %request.uri().path(),
                    request_id = %Uuid::new_v4(),
                )
            }),
        )
}
