use crate::server::{error::validation::ValidationError, model::kind::EntityKind};

use super::require_unique_name;

/// Candidate values for an institution.
#[derive(Debug, Default, Clone)]
pub struct InstitutionDraft {
    pub name: Option<String>,
}

/// Consistency query answers for an institution draft.
#[derive(Debug, Default, Clone, Copy)]
pub struct InstitutionLookup {
    /// Another institution already uses the draft's name
    pub name_taken: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidInstitution {
    pub name: String,
}

pub fn validate_institution(
    draft: &InstitutionDraft,
    lookup: &InstitutionLookup,
) -> Result<ValidInstitution, ValidationError> {
    let mut errors = ValidationError::new();

    let name = require_unique_name(
        &mut errors,
        EntityKind::Institution,
        draft.name.as_deref(),
        lookup.name_taken,
    );

    match name {
        Some(name) if errors.is_empty() => Ok(ValidInstitution { name }),
        _ => Err(errors),
    }
}
