//! # Users API Library
//!
//! This crate provides a REST API service for managing users with:
//! - CRUD HTTP endpoints for the user resource
//! - PostgreSQL for persistent storage
//! - Prometheus metrics exposition
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: The user entity, its validation rules, and the repository trait
//! - **Application Layer**: Business logic services and DTOs
//! - **Infrastructure Layer**: Database pool, repository implementation, metrics
//! - **Presentation Layer**: HTTP handlers, routes, and middleware
//!
//! ## Module Structure
//!
//! ```text
//! users_api/
//! +-- config/        Configuration management
//! +-- domain/        Domain entities and traits
//! +-- application/   Application services and DTOs
//! +-- infrastructure/ Database and metrics implementations
//! +-- presentation/  HTTP routes, handlers, and middleware
//! +-- shared/        Common utilities (errors, validation)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
