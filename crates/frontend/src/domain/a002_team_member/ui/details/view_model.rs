use crate::shared::form_state::{FormState, SubmitHandler};
use contracts::domain::a002_team_member::aggregate::{CreateTeamMemberRequest, TeamMember};
use contracts::domain::a002_team_member::draft::TeamMemberDraft;
use leptos::prelude::*;

pub const SAVE_FAILED: &str = "Failed to save team member";

#[derive(Clone)]
pub struct TeamMemberDetailsViewModel {
    pub form: RwSignal<TeamMemberDraft>,
    pub state: RwSignal<FormState>,
    /// Set once a default team was offered; later list updates leave the choice alone
    defaulted: RwSignal<bool>,
    edit_mode: bool,
    on_submit: SubmitHandler<CreateTeamMemberRequest>,
}

impl TeamMemberDetailsViewModel {
    /// A new member starts in `default_team`; an edited one keeps its own team
    pub fn new(
        member: Option<&TeamMember>,
        default_team: Option<i64>,
        on_submit: SubmitHandler<CreateTeamMemberRequest>,
    ) -> Self {
        let draft = match member {
            Some(m) => TeamMemberDraft::from_member(m),
            None => TeamMemberDraft::new(default_team),
        };
        Self {
            form: RwSignal::new(draft),
            state: RwSignal::new(FormState::default()),
            defaulted: RwSignal::new(member.is_some() || default_team.is_some()),
            edit_mode: member.is_some(),
            on_submit,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.state.with(|s| s.is_submitting())
    }

    pub fn title(&self) -> &'static str {
        if self.edit_mode {
            "Edit Team Member"
        } else {
            "Add Team Member"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Saving..."
        } else if self.edit_mode {
            "Update"
        } else {
            "Add"
        }
    }

    /// Fill in the team once teams arrive after the form opened
    /// Preselect the first team when the list arrives after the form opened.
    ///
    /// Happens at most once; a cleared selection stays cleared.
    pub fn adopt_default_team(&self, team_id: Option<i64>) {
        if team_id.is_none() || self.defaulted.get_untracked() {
            return;
        }
        self.defaulted.set(true);
        self.form.update(|f| {
            if f.team_id.is_none() {
                f.team_id = team_id;
            }
        });
    }

    pub fn save_command(&self) {
        let draft = self.form.get_untracked();
        let Some(request) = self.state.try_update(|s| s.begin(draft.validate())).flatten() else {
            return;
        };

        let state = self.state;
        let on_submit = self.on_submit.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = on_submit(request).await;
            state.try_update(|s| s.complete(result, SAVE_FAILED));
        });
    }
}
