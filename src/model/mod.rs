//! Serializable DTOs exchanged with the browser control panel.

pub mod api;
pub mod voice;
