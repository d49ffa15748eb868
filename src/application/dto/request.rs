//! Request DTOs
//!
//! Data structures for API request bodies. Field bounds are enforced by the
//! entity validation in the service layer, not here.

use serde::Deserialize;

/// Create user request
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub age: i32,
}

/// Update user request. The target id comes from the request path.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: String,
    pub age: i32,
}
