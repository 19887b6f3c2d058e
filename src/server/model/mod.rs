//! Server application models and type definitions.
//!
//! This module contains the application state, database model type aliases, the lifecycle
//! state machines records move through, and pagination parameters shared by the listing
//! endpoints.

pub mod app;
pub mod db;
pub mod kind;
pub mod lifecycle;
pub mod pagination;
