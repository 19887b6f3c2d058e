//! Service layer for business logic and orchestration.
//!
//! Each service coordinates one resource: it merges the submitted values with the stored
//! record, runs the consistency queries inside a transaction, hands the results to the
//! validation rules and only then writes. Lifecycle transitions go through
//! [`lifecycle::LifecycleGuard`] before touching the store.

pub mod institution;
pub mod lifecycle;
pub mod season;
pub mod team;
pub mod tournament;
pub mod tournament_match;
