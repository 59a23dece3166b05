//! Request extractors for authentication and authorization.
//!
//! - [`auth::AuthUser`] -- Any authenticated caller (valid Bearer token).
//! - [`rbac::RequireAdmin`] -- Requires the `admin` role.

pub mod auth;
pub mod rbac;
