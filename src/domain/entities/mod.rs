//! # Domain Entities
//!
//! The users service has a single entity: **User**, a record with a
//! server-assigned id, a name, and an age.
//!
//! The associated `UserRepository` trait defines the data access contract.
//! It is implemented in the infrastructure layer, following the dependency
//! inversion principle.

mod user;

// Re-export User entity and related types
pub use user::{User, UserRepository};
