//! Server-side domain models.
//!
//! This module contains domain models used throughout the service layer. Domain models
//! are converted from platform records at the data boundary and transformed to DTOs at
//! the controller boundary, keeping serenity types out of the service layer.

pub mod voice;
