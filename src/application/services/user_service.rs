//! User Service
//!
//! Orchestrates user CRUD operations: validate first, then persist.
//! Repository failures are wrapped with context describing the failing
//! operation; missing rows are translated into `UserError::NotFound`.

use std::sync::Arc;

use async_trait::async_trait;
use validator::Validate;

use crate::domain::{User, UserRepository};
use crate::shared::error::AppError;
use crate::shared::validation::describe_errors;

/// User service trait
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users
    async fn get_users(&self) -> Result<Vec<User>, UserError>;

    /// Get user by id
    async fn get_user(&self, id: i64) -> Result<User, UserError>;

    /// Validate and persist a new user, returning it with the assigned id
    async fn create_user(&self, user: User) -> Result<User, UserError>;

    /// Validate and replace an existing user's name/age
    async fn update_user(&self, user: User) -> Result<User, UserError>;

    /// Delete a user by id
    async fn delete_user(&self, id: i64) -> Result<(), UserError>;
}

/// User service errors
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("user not found")]
    NotFound,

    #[error("validation error: {0}")]
    Validation(String),

    #[error("{context}: {source}")]
    Storage {
        context: &'static str,
        #[source]
        source: AppError,
    },
}

impl UserError {
    fn storage(context: &'static str, source: AppError) -> Self {
        Self::Storage { context, source }
    }
}

/// UserService implementation
pub struct UserServiceImpl<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> UserServiceImpl<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> UserService for UserServiceImpl<R>
where
    R: UserRepository + 'static,
{
    async fn get_users(&self) -> Result<Vec<User>, UserError> {
        self.repo
            .find_all()
            .await
            .map_err(|e| UserError::storage("failed to get users", e))
    }

    async fn get_user(&self, id: i64) -> Result<User, UserError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| UserError::storage("failed to get user", e))?
            .ok_or(UserError::NotFound)
    }

    async fn create_user(&self, user: User) -> Result<User, UserError> {
        // Fail fast before touching storage
        user.validate()
            .map_err(|e| UserError::Validation(describe_errors(&e)))?;

        self.repo
            .create(&user)
            .await
            .map_err(|e| UserError::storage("failed to create user", e))
    }

    async fn update_user(&self, user: User) -> Result<User, UserError> {
        user.validate()
            .map_err(|e| UserError::Validation(describe_errors(&e)))?;

        match self.repo.update(&user).await {
            Ok(updated) => Ok(updated),
            Err(AppError::NotFound(_)) => Err(UserError::NotFound),
            Err(e) => Err(UserError::storage("failed to update user", e)),
        }
    }

    async fn delete_user(&self, id: i64) -> Result<(), UserError> {
        match self.repo.delete(id).await {
            Ok(()) => Ok(()),
            Err(AppError::NotFound(_)) => Err(UserError::NotFound),
            Err(e) => Err(UserError::storage("failed to delete user", e)),
        }
    }
}
