use super::view_model::TeamDetailsViewModel;
use crate::shared::form_state::SubmitHandler;
use crate::shared::modal::Modal;
use contracts::domain::a001_team::aggregate::{CreateTeamRequest, Team};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn TeamDetails(
    team: Option<Team>,
    on_submit: SubmitHandler<CreateTeamRequest>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = TeamDetailsViewModel::new(team.as_ref(), on_submit);
    let title = vm.title().to_string();

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

    view! {
        <Modal title=title on_close=close close_disabled=busy.clone()>
            <form on:submit={
                let vm = vm.clone();
                move |ev: SubmitEvent| {
                    ev.prevent_default();
                    vm.save_command();
                }
            }>
                <div class="form-group">
                    <label for="name">"Team Name *"</label>
                    <input
                        type="text"
                        id="name"
                        class="form-control"
                        required
                        prop:value={
                            let vm = vm.clone();
                            move || vm.form.with(|f| f.name.clone())
                        }
                        on:input={
                            let vm = vm.clone();
                            move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                        }
                        disabled=busy.clone()
                    />
                </div>

                <div class="form-group">
                    <label for="description">"Description"</label>
                    <textarea
                        id="description"
                        class="form-control"
                        rows="3"
                        placeholder="Optional team description"
                        prop:value={
                            let vm = vm.clone();
                            move || vm.form.with(|f| f.description.clone())
                        }
                        on:input={
                            let vm = vm.clone();
                            move |ev| vm.form.update(|f| f.description = event_target_value(&ev))
                        }
                        disabled=busy.clone()
                    />
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
