//! Machine-readable catalogue of the HTTP routes, served at `/api-docs`.

use axum::Json;
use serde::Serialize;

/// Description of one route
#[derive(Debug, Clone, Serialize)]
pub struct RouteDoc {
    pub method: &'static str,
    pub path: &'static str,
    pub summary: &'static str,
    /// Body fields, empty when the route takes no body
    pub body: &'static [&'static str],
    pub responses: &'static [(u16, &'static str)],
}

/// Full document returned by the docs endpoint
#[derive(Debug, Serialize)]
pub struct ApiDocs {
    pub title: &'static str,
    pub version: &'static str,
    pub routes: &'static [RouteDoc],
}

pub const ROUTES: &[RouteDoc] = &[
    RouteDoc {
        method: "GET",
        path: "/students",
        summary: "List every student",
        body: &[],
        responses: &[(200, "Array of students"), (500, "Storage error")],
    },
    RouteDoc {
        method: "GET",
        path: "/students/:id",
        summary: "Get a student by id",
        body: &[],
        responses: &[
            (200, "Student, or {message: \"Student not found\"}"),
            (400, "Validation error"),
            (500, "Storage error"),
        ],
    },
    RouteDoc {
        method: "POST",
        path: "/students",
        summary: "Create a student",
        body: &["name", "email", "age"],
        responses: &[
            (201, "{message, studentId}"),
            (400, "Validation error"),
            (500, "Storage error"),
        ],
    },
    RouteDoc {
        method: "PATCH",
        path: "/students/:id",
        summary: "Update a student's email",
        body: &["email"],
        responses: &[
            (200, "{message}"),
            (400, "Validation error"),
            (500, "Storage error"),
        ],
    },
    RouteDoc {
        method: "DELETE",
        path: "/students/:id",
        summary: "Delete a student",
        body: &[],
        responses: &[
            (200, "{message}"),
            (400, "Validation error"),
            (500, "Storage error"),
        ],
    },
    RouteDoc {
        method: "GET",
        path: "/say",
        summary: "Forward ?keyword= (default \"nothing\") to the remote function",
        body: &[],
        responses: &[(200, "Remote response body"), (500, "Remote call failed")],
    },
    RouteDoc {
        method: "GET",
        path: "/api-docs",
        summary: "This document",
        body: &[],
        responses: &[(200, "Route catalogue")],
    },
];

pub async fn api_docs() -> Json<ApiDocs> {
    Json(ApiDocs {
        title: "Students API",
        version: env!("CARGO_PKG_VERSION"),
        routes: ROUTES,
    })
}
