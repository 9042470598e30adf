//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (platform) layer. Services are responsible for:
//!
//! - **Business Logic**: Validating move targets against the configured channel pair
//! - **Orchestration**: Driving member lookups and moves across a whole batch
//! - **Domain Models**: Working with domain models rather than DTOs or serenity types
//! - **Failure Isolation**: Turning per-member failures into outcomes instead of errors

pub mod voice;
