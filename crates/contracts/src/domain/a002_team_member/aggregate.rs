use crate::domain::a003_leave::aggregate::Leave;
use crate::shared::serde_utils::null_as_default;
use serde::{Deserialize, Serialize};

/// Lowest accepted capacity percentage
pub const MIN_CAPACITY: i32 = 0;
/// Highest accepted capacity percentage
pub const MAX_CAPACITY: i32 = 100;

/// Team member, as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub jurisdiction: String,
    pub capacity_percentage: i32,
    pub team_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub team_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub leaves: Vec<Leave>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
}

impl TeamMember {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Body of `POST /team-members` and `PUT /team-members/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamMemberRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub jurisdiction: String,
    pub capacity_percentage: i32,
    pub team_id: i64,
}
