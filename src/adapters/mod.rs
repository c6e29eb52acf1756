//! Adapters - Implementations of port interfaces.
//!
//! - `auth` - Bearer token validation (HS256 JWT, test mock)
//! - `events` - Event publishers (Redis pub/sub, tracing-only, in-memory)
//! - `http` - axum REST API
//! - `memory` - In-memory repositories
//! - `postgres` - PostgreSQL repositories and migrations

pub mod auth;
pub mod events;
pub mod http;
pub mod memory;
pub mod postgres;
