//! Lifecycle state machines.
//!
//! Institutions, teams, seasons and tournaments are never removed, "deleting" them moves
//! them from [`ActivityState::Active`] to [`ActivityState::Inactive`]. There is no transition
//! back. Matches are physically deleted instead, guarded by their [`LockState`].

use crate::server::{error::conflict::ConflictError, model::kind::EntityKind};

/// Soft-delete state backed by the `active` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityState {
    Active,
    Inactive,
}

impl From<bool> for ActivityState {
    fn from(active: bool) -> Self {
        if active {
            Self::Active
        } else {
            Self::Inactive
        }
    }
}

impl ActivityState {
    pub fn is_active(self) -> bool {
        self == Self::Active
    }

    /// Applies the Active → Inactive transition.
    ///
    /// # Arguments
    /// - `kind` / `id` - The record being deactivated, used for the error message
    /// - `blocking_dependent` - First kind of record still referencing this one, if any
    ///
    /// # Returns
    /// - `Ok(ActivityState::Inactive)` - Transition allowed
    /// - `Err(ConflictError::AlreadyInactive)` - Record was already inactive
    /// - `Err(ConflictError::HasDependents)` - Other records still reference this one
    pub fn deactivate(
        self,
        kind: EntityKind,
        id: i32,
        blocking_dependent: Option<EntityKind>,
    ) -> Result<Self, ConflictError> {
        match (self, blocking_dependent) {
            (Self::Inactive, _) => Err(ConflictError::AlreadyInactive { kind, id }),
            (Self::Active, Some(dependents)) => Err(ConflictError::HasDependents {
                kind,
                id,
                dependents,
            }),
            (Self::Active, None) => Ok(Self::Inactive),
        }
    }
}

/// Match lock backed by the `uploaded` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockState {
    Unlocked,
    Locked,
}

impl From<bool> for LockState {
    fn from(uploaded: bool) -> Self {
        if uploaded {
            Self::Locked
        } else {
            Self::Unlocked
        }
    }
}

impl LockState {
    /// Locked matches cannot be deleted, unlocked ones can be deleted unconditionally.
    pub fn authorize_deletion(self, id: i32) -> Result<(), ConflictError> {
        match self {
            Self::Locked => Err(ConflictError::MatchLocked(id)),
            Self::Unlocked => Ok(()),
        }
    }
}

impl EntityKind {
    /// Kinds of records whose existence blocks deactivating a record of this kind.
    ///
    /// Institutions are deactivated without any check, their teams keep referencing them.
    /// Matches are not soft-deleted and are referenced by nothing.
    pub fn dependents(&self) -> &'static [EntityKind] {
        match self {
            Self::Institution | Self::Match => &[],
            Self::Team => &[EntityKind::Match],
            Self::Season => &[EntityKind::Tournament, EntityKind::Match],
            Self::Tournament => &[EntityKind::Match],
        }
    }
}
