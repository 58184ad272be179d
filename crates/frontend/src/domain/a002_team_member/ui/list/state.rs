use crate::shared::form_state::FormMode;
use crate::shared::team_filter::TeamFilter;
use contracts::domain::a002_team_member::aggregate::TeamMember;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct TeamMemberListState {
    pub form: FormMode<TeamMember>,
    pub filter: TeamFilter,
}

impl TeamMemberListState {
    pub fn editing_id(&self) -> Option<i64> {
        self.form.editing().map(|m| m.id)
    }
}

pub fn create_state() -> RwSignal<TeamMemberListState> {
    RwSignal::new(TeamMemberListState::default())
}

/// Jurisdiction cell text
pub fn jurisdiction_label(member: &TeamMember) -> String {
    if member.jurisdiction.trim().is_empty() {
        "Not set".to_string()
    } else {
        member.jurisdiction.clone()
    }
}

pub fn capacity_label(member: &TeamMember) -> String {
    format!("{}%", member.capacity_percentage)
}
