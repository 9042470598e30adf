//! Server-side API backend and voice orchestration logic.
//!
//! This module contains the complete backend of the voice panel: the HTTP API, the
//! batch-move orchestration, the Discord platform adapter, and the bot that keeps the
//! gateway cache of voice states warm. The backend uses Axum as the web framework and
//! Serenity for Discord integration. Nothing is persisted; every view is read through
//! from Discord's live state.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Snapshot reading, member location, move execution, batch orchestration
//! - **Data Layer** (`data/`) - The `VoicePlatform` capability and its Discord implementation
//! - **Model Layer** (`model/`) - Domain models (snapshots, located members, outcomes, reports)
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Shared-secret guard for API routes
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (platform, membership cache, secret)
//! - **Startup** (`startup`) - Waiting for the Discord cache and binding the listener
//! - **Router** (`router`) - Axum route configuration and static client serving
//! - **Bot** (`bot/`) - Discord gateway client and event handlers
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to the voice controller
//! 2. **Middleware** checks the `x-admin-key` header
//! 3. **Controller** converts the DTO to arguments and calls `BatchMoveService`
//! 4. **Service** validates the target, reads snapshots, locates and moves members
//! 5. **Data** talks to Discord through the gateway cache and REST client
//! 6. **Controller** converts the `BatchReport` to DTOs and returns the HTTP response

pub mod bot;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
