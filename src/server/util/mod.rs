//! Utility functions and helpers for server operations.
//!
//! Currently holds the conversion between the `data:image/...;base64,` URIs exchanged with
//! API clients and the raw image bytes stored for teams.

pub mod image;
