//! User entity and repository trait.
//!
//! Maps to the `users` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::shared::error::AppError;

/// Represents a user record.
///
/// Maps to the `users` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - name: VARCHAR(100) NOT NULL
/// - age: INT NOT NULL
///
/// The id is assigned by the database on creation and is immutable after
/// that. In create requests the id field is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct User {
    /// Surrogate key assigned by the database sequence
    pub id: i64,

    /// Display name (2-100 characters)
    #[validate(length(min = 2, max = 100, message = "must be 2-100 characters"))]
    pub name: String,

    /// Age in years (0-150)
    #[validate(range(min = 0, max = 150, message = "must be within 0-150"))]
    pub age: i32,
}

impl User {
    /// Build an unsaved user. The id is a placeholder until the
    /// persistence layer assigns the real one.
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            id: 0,
            name: name.into(),
            age,
        }
    }
}

impl Default for User {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            age: 0,
        }
    }
}

/// Repository trait for User data access operations.
///
/// Implementations of this trait handle the actual database interactions.
/// The trait is defined in the domain layer to maintain dependency inversion.
///
/// Each operation issues exactly one statement against the store. Missing
/// rows on update/delete surface as `AppError::NotFound` rather than an
/// overloaded empty-result error.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch all users, ordered by id.
    async fn find_all(&self) -> Result<Vec<User>, AppError>;

    /// Find a user by id. Returns `None` when no row matches.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Persist a new user and return it with the assigned id.
    /// The input id is ignored.
    async fn create(&self, user: &User) -> Result<User, AppError>;

    /// Replace name/age for the row matching `user.id`.
    /// Fails with `AppError::NotFound` when no row matches.
    async fn update(&self, user: &User) -> Result<User, AppError>;

    /// Delete the user with the given id.
    /// Fails with `AppError::NotFound` when no row matches.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
