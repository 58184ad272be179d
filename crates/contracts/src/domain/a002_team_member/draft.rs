use super::aggregate::{CreateTeamMemberRequest, TeamMember, MAX_CAPACITY, MIN_CAPACITY};
use crate::shared::validation::{is_blank, parse_in_range, ValidationError};

/// Editable input of the team member form.
///
/// `capacity_percentage` holds the raw text of the number input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMemberDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub jurisdiction: String,
    pub capacity_percentage: String,
    pub team_id: Option<i64>,
}

impl TeamMemberDraft {
    /// Empty draft for a new member, full capacity, preselecting `default_team`
    pub fn new(default_team: Option<i64>) -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            jurisdiction: String::new(),
            capacity_percentage: MAX_CAPACITY.to_string(),
            team_id: default_team,
        }
    }

    pub fn from_member(member: &TeamMember) -> Self {
        Self {
            first_name: member.first_name.clone(),
            last_name: member.last_name.clone(),
            email: member.email.clone(),
            jurisdiction: member.jurisdiction.clone(),
            capacity_percentage: member.capacity_percentage.to_string(),
            team_id: Some(member.team_id),
        }
    }

    pub fn validate(&self) -> Result<CreateTeamMemberRequest, ValidationError> {
        if let Some(field) = [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
        ]
        .into_iter()
        .find_map(|(field, value)| is_blank(value).then_some(field))
        {
            return Err(ValidationError::new(
                field,
                "First name, last name, and email are required",
            ));
        }

        let capacity = parse_in_range(&self.capacity_percentage, MIN_CAPACITY, MAX_CAPACITY)
            .ok_or_else(|| {
                ValidationError::new(
                    "capacityPercentage",
                    format!(
                        "Capacity percentage must be between {} and {}",
                        MIN_CAPACITY, MAX_CAPACITY
                    ),
                )
            })?;

        let team_id = self
            .team_id
            .ok_or_else(|| ValidationError::new("teamId", "Please select a team"))?;

        Ok(CreateTeamMemberRequest {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            jurisdiction: self.jurisdiction.clone(),
            capacity_percentage: capacity,
            team_id,
        })
    }
}
