//! Domain logic shared across the cinedex workspace.
//!
//! This crate is I/O-free: it holds the common type aliases, the error
//! taxonomy, role name constants, and the catalog filter primitives the
//! persistence and HTTP layers build on.

pub mod catalog;
pub mod error;
pub mod roles;
pub mod types;
