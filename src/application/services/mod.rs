//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **UserService**: User CRUD orchestration (validate, then persist)

pub mod user_service;

// Re-export user service types
pub use user_service::{UserError, UserService, UserServiceImpl};
