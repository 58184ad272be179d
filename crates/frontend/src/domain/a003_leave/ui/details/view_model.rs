use crate::shared::form_state::{FormState, SubmitHandler};
use contracts::domain::a002_team_member::aggregate::TeamMember;
use contracts::domain::a003_leave::aggregate::{CreateLeaveRequest, Leave};
use contracts::domain::a003_leave::draft::LeaveDraft;
use leptos::prelude::*;

pub const SAVE_FAILED: &str = "Failed to save leave";

#[derive(Clone)]
pub struct LeaveDetailsViewModel {
    pub form: RwSignal<LeaveDraft>,
    pub state: RwSignal<FormState>,
    /// Set once a default member was offered; later list updates leave the choice alone
    defaulted: RwSignal<bool>,
    edit_mode: bool,
    on_submit: SubmitHandler<CreateLeaveRequest>,
}

impl LeaveDetailsViewModel {
    pub fn new(
        leave: Option<&Leave>,
        default_member: Option<i64>,
        on_submit: SubmitHandler<CreateLeaveRequest>,
    ) -> Self {
        let draft = match leave {
            Some(l) => LeaveDraft::from_leave(l),
            None => LeaveDraft::new(default_member),
        };
        Self {
            form: RwSignal::new(draft),
            state: RwSignal::new(FormState::default()),
            defaulted: RwSignal::new(leave.is_some() || default_member.is_some()),
            edit_mode: leave.is_some(),
            on_submit,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.state.with(|s| s.is_submitting())
    }

    pub fn title(&self) -> &'static str {
        if self.edit_mode {
            "Edit Leave"
        } else {
            "Add Leave"
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

    /// Preselect the first member when the list arrives after the form opened.
    ///
    /// Happens at most once; a cleared selection stays cleared.
    pub fn adopt_default_member(&self, member_id: Option<i64>) {
        if member_id.is_none() || self.defaulted.get_untracked() {
            return;
        }
        self.defaulted.set(true);
        self.form.update(|f| {
            if f.team_member_id.is_none() {
                f.team_member_id = member_id;
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

/// Member option text, e.g. "Ada Lovelace (Core)"
pub fn member_option_label(member: &TeamMember) -> String {
    if member.team_name.is_empty() {
        member.full_name()
    } else {
        format!("{} ({})", member.full_name(), member.team_name)
    }
}
