//! Staff account management.

pub mod service;

pub use service::{NewUserRequest, UserService};
