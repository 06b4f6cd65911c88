//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation, including API endpoints,
//! business logic, data access and partition routing. The backend uses Axum as the web
//! framework and SeaORM for database operations against N independent partitions.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, guards and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Header extraction and authorization guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Shard Router** (`shard`) - Maps user IDs onto partitions
//! - **State** (`state`) - Shared application state (router, ID generator, ban cache)
//! - **Startup** (`startup`) - Partition connections, migrations and shared clients
//! - **Router** (`router`) - Axum route configuration
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** builds the request context, resolving the caller's partition once
//! 3. **Middleware** guards check the ban cache, then the session
//! 4. **Service** executes business logic against the resolved partition
//! 5. **Data** queries the partition, converts entities to domain models
//! 6. **Controller** converts domain models to DTOs and returns the HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod shard;
pub mod startup;
pub mod state;
