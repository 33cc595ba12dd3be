/// Shared dependencies injected into handlers
pub mod context;
/// Route catalogue served at `/api-docs`
pub mod docs;
/// API error types and handling
pub mod errors;
/// HTTP handlers for the student resource and the `/say` proxy
pub mod handlers;
/// Routes configuration and setup
pub mod routes;
/// HTTP server implementation
pub mod server;
/// Request input checks
pub mod validation;

pub use context::AppContext;
