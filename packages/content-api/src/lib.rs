//! REST API server for the content service.
//!
//! Provides HTTP endpoints for course, section and material CRUD, the
//! media status stub and the Swagger documentation pages.

pub mod config;
pub mod handlers;
pub mod router;
pub mod server;
