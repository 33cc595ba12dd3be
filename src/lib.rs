//! HTTP API over a single `students` table, plus a `/say` endpoint that
//! forwards a keyword to a remote serverless function.

pub mod api;
pub mod cli;
pub mod config;
pub mod constants;
pub mod db;
pub mod errors;
pub mod remote;
pub mod schema;
pub mod utils;
