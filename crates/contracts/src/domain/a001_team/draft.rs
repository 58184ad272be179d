use super::aggregate::{CreateTeamRequest, Team};
use crate::shared::validation::{is_blank, ValidationError};

/// Editable input of the team form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamDraft {
    pub name: String,
    pub description: String,
}

impl TeamDraft {
    pub fn from_team(team: &Team) -> Self {
        Self {
            name: team.name.clone(),
            description: team.description.clone(),
        }
    }

    pub fn validate(&self) -> Result<CreateTeamRequest, ValidationError> {
        if is_blank(&self.name) {
            return Err(ValidationError::new("name", "Team name is required"));
        }
        Ok(CreateTeamRequest {
            name: self.name.trim().to_string(),
            description: self.description.clone(),
        })
    }
}
