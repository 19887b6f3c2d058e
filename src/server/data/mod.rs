//! Data access layer repositories.
//!
//! One repository per table. Besides the basic create/read/update operations, repositories
//! expose the read-only consistency queries (name existence, dependent records, schedule
//! conflicts) the services feed into validation and lifecycle checks.

pub mod institution;
pub mod season;
pub mod team;
pub mod tournament;
pub mod tournament_match;
