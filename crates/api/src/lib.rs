//! HTTP surface of the movie catalog: configuration, shared state, JWT
//! auth, RBAC extractors, handlers, and the router builder.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod state;
