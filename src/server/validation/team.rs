use crate::server::{
    error::validation::ValidationError, model::kind::EntityKind, util::image::decode_data_uri,
};

use super::{require_reference, require_unique_name};

/// Candidate values for a team.
#[derive(Debug, Default, Clone)]
pub struct TeamDraft {
    pub institution_id: Option<i32>,
    pub name: Option<String>,
    /// Image submitted with this request as a data URI, `None` keeps `current_image`
    pub image: Option<String>,
    /// Image stored on the record being updated
    pub current_image: Option<Vec<u8>>,
}

/// Consistency query answers for a team draft.
#[derive(Debug, Default, Clone, Copy)]
pub struct TeamLookup {
    pub institution_exists: bool,
    /// Another team already uses the draft's name
    pub name_taken: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidTeam {
    pub institution_id: i32,
    pub name: String,
    pub image: Option<Vec<u8>>,
}

pub fn validate_team(draft: TeamDraft, lookup: &TeamLookup) -> Result<ValidTeam, ValidationError> {
    let mut errors = ValidationError::new();

    let name = require_unique_name(
        &mut errors,
        EntityKind::Team,
        draft.name.as_deref(),
        lookup.name_taken,
    );
    let institution_id = require_reference(
        &mut errors,
        "institution_id",
        EntityKind::Institution,
        draft.institution_id,
        lookup.institution_exists,
    );

    let image = match draft.image.as_deref() {
        None => Some(draft.current_image),
        Some(uri) => match decode_data_uri(uri) {
            Ok(image) => Some(image),
            Err(err) => {
                errors.add("image", err.to_string());
                None
            }
        },
    };

    match (name, institution_id, image) {
        (Some(name), Some(institution_id), Some(image)) if errors.is_empty() => Ok(ValidTeam {
            institution_id,
            name,
            image,
        }),
        _ => Err(errors),
    }
}
