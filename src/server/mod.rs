//! Server application core modules.
//!
//! This module contains the HTTP API for institutions, teams, seasons, tournaments and
//! matches. Requests flow from the controllers into the services, which merge partial
//! updates with the stored record, run the consistency queries and validation rules, and
//! only then hand the mutation to the repositories.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
pub mod validation;
