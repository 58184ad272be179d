use super::view_model::TeamMemberDetailsViewModel;
use crate::shared::form_state::SubmitHandler;
use crate::shared::modal::Modal;
use contracts::domain::a001_team::aggregate::Team;
use contracts::domain::a002_team_member::aggregate::{CreateTeamMemberRequest, TeamMember};
use contracts::domain::a002_team_member::aggregate::{MAX_CAPACITY, MIN_CAPACITY};
use contracts::domain::a002_team_member::draft::TeamMemberDraft;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// Bound text input of the member form
fn text_field(
    vm: &TeamMemberDetailsViewModel,
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    get: fn(&TeamMemberDraft) -> String,
    set: fn(&mut TeamMemberDraft, String),
    busy: impl Fn() -> bool + Send + Sync + Clone + 'static,
) -> impl IntoView {
    let form = vm.form;
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type=input_type
                id=id
                class="form-control"
                prop:value=move || form.with(get)
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                disabled=busy
            />
        </div>
    }
}

#[component]
pub fn TeamMemberDetails(
    member: Option<TeamMember>,
    #[prop(into)] teams: Signal<Vec<Team>>,
    on_submit: SubmitHandler<CreateTeamMemberRequest>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let first_team = teams.with_untracked(|t| t.first().map(|team| team.id));
    let vm = TeamMemberDetailsViewModel::new(member.as_ref(), first_team, on_submit);
    let title = vm.title().to_string();

    Effect::new({
        let vm = vm.clone();
        move |_| {
            let first = teams.with(|t| t.first().map(|team| team.id));
            vm.adopt_default_team(first);
        }
    });

    let close = {
        let vm = vm.clone();
        Callback::new(move |_| {
            if !vm.is_submitting() {
                on_cancel.run(());
            }
        })
    };

    let busy = {
        let vm = vm.clone();
        move || vm.is_submitting()
    };
    let form = vm.form;

    view! {
        <Modal title=title on_close=close close_disabled=busy.clone()>
            <form on:submit={
                let vm = vm.clone();
                move |ev: SubmitEvent| {
                    ev.prevent_default();
                    vm.save_command();
                }
            }>
                <div class="form-row">
                    {text_field(&vm, "firstName", "First Name *", "text",
                        |f| f.first_name.clone(), |f, v| f.first_name = v, busy.clone())}
                    {text_field(&vm, "lastName", "Last Name *", "text",
                        |f| f.last_name.clone(), |f, v| f.last_name = v, busy.clone())}
                </div>

                {text_field(&vm, "email", "Email *", "email",
                    |f| f.email.clone(), |f, v| f.email = v, busy.clone())}

                <div class="form-row">
                    {text_field(&vm, "jurisdiction", "Jurisdiction", "text",
                        |f| f.jurisdiction.clone(), |f, v| f.jurisdiction = v, busy.clone())}
                    <div class="form-group">
                        <label for="capacityPercentage">"Capacity (%)"</label>
                        <input
                            type="number"
                            id="capacityPercentage"
                            class="form-control"
                            min=MIN_CAPACITY.to_string()
                            max=MAX_CAPACITY.to_string()
                            prop:value=move || form.with(|f| f.capacity_percentage.clone())
                            on:input=move |ev| form.update(|f| f.capacity_percentage = event_target_value(&ev))
                            disabled=busy.clone()
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="teamId">"Team *"</label>
                    <select
                        id="teamId"
                        class="form-control"
                        prop:value=move || form.with(|f| f.team_id.map(|id| id.to_string()).unwrap_or_default())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.team_id = value.parse().ok());
                        }
                        disabled=busy.clone()
                    >
                        <option value="">"Select a team"</option>
                        {move || teams.get().into_iter().map(|team| {
                            let id = team.id;
                            view! {
                                <option
                                    value=id.to_string()
                                    selected=move || form.with(|f| f.team_id == Some(id))
                                >
                                    {team.name}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                {
                    let vm = vm.clone();
                    move || vm.state.with(|s| s.error.clone()).map(|e| view! { <div class="error">{e}</div> })
                }

                <div class="form-actions">
                    <button
                        type="button"
                        class="btn btn-secondary"
                        on:click=move |_| close.run(())
                        disabled=busy.clone()
                    >
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary" disabled=busy.clone()>
                        {
                            let vm = vm.clone();
                            move || vm.submit_label()
                        }
                    </button>
                </div>
            </form>
        </Modal>
    }
}
