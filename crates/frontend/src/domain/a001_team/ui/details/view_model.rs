use crate::shared::form_state::{FormState, SubmitHandler};
use contracts::domain::a001_team::aggregate::{CreateTeamRequest, Team};
use contracts::domain::a001_team::draft::TeamDraft;
use leptos::prelude::*;

pub const SAVE_FAILED: &str = "Failed to save team";

/// ViewModel for the team create/edit form
#[derive(Clone)]
pub struct TeamDetailsViewModel {
    pub form: RwSignal<TeamDraft>,
    pub state: RwSignal<FormState>,
    edit_mode: bool,
    on_submit: SubmitHandler<CreateTeamRequest>,
}

impl TeamDetailsViewModel {
    pub fn new(team: Option<&Team>, on_submit: SubmitHandler<CreateTeamRequest>) -> Self {
        Self {
            form: RwSignal::new(team.map(TeamDraft::from_team).unwrap_or_default()),
            state: RwSignal::new(FormState::default()),
            edit_mode: team.is_some(),
            on_submit,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.state.with(|s| s.is_submitting())
    }

    pub fn title(&self) -> &'static str {
        if self.edit_mode {
            "Edit Team"
        } else {
            "Create Team"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Saving..."
        } else if self.edit_mode {
            "Update"
        } else {
            "Create"
        }
    }

    /// Validate and hand the request to the owning view
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
