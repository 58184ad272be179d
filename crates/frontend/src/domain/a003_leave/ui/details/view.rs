use super::view_model::{member_option_label, LeaveDetailsViewModel};
use crate::shared::form_state::SubmitHandler;
use crate::shared::modal::Modal;
use contracts::domain::a002_team_member::aggregate::TeamMember;
use contracts::domain::a003_leave::aggregate::{CreateLeaveRequest, Leave};
use contracts::enums::leave_type::LeaveType;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn LeaveDetails(
    leave: Option<Leave>,
    #[prop(into)] members: Signal<Vec<TeamMember>>,
    on_submit: SubmitHandler<CreateLeaveRequest>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let first_member = members.with_untracked(|m| m.first().map(|member| member.id));
    let vm = LeaveDetailsViewModel::new(leave.as_ref(), first_member, on_submit);
    let title = vm.title().to_string();

    Effect::new({
        let vm = vm.clone();
        move |_| {
            let first = members.with(|m| m.first().map(|member| member.id));
            vm.adopt_default_member(first);
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
                <div class="form-group">
                    <label for="teamMemberId">"Team Member *"</label>
                    <select
                        id="teamMemberId"
                        class="form-control"
                        prop:value=move || {
                            form.with(|f| f.team_member_id.map(|id| id.to_string()).unwrap_or_default())
                        }
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.team_member_id = value.parse().ok());
                        }
                        disabled=busy.clone()
                    >
                        <option value="">"Select a team member"</option>
                        {move || members.get().iter().map(|member| {
                            let id = member.id;
                            view! {
                                <option
                                    value=id.to_string()
                                    selected=move || form.with(|f| f.team_member_id == Some(id))
                                >
                                    {member_option_label(member)}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="leaveType">"Leave Type *"</label>
                    <select
                        id="leaveType"
                        class="form-control"
                        prop:value=move || form.with(|f| f.leave_type.code())
                        on:change=move |ev| {
                            if let Some(t) = LeaveType::from_code(&event_target_value(&ev)) {
                                form.update(|f| f.leave_type = t);
                            }
                        }
                        disabled=busy.clone()
                    >
                        {LeaveType::all().into_iter().map(|t| view! {
                            <option
                                value=t.code()
                                selected=move || form.with(|f| f.leave_type == t)
                            >
                                {t.display_name()}
                            </option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="startDate">"Start Date *"</label>
                        <input
                            type="date"
                            id="startDate"
                            class="form-control"
                            prop:value=move || form.with(|f| f.start_date.clone())
                            on:input=move |ev| form.update(|f| f.start_date = event_target_value(&ev))
                            disabled=busy.clone()
                        />
                    </div>
                    <div class="form-group">
                        <label for="endDate">"End Date *"</label>
                        <input
                            type="date"
                            id="endDate"
                            class="form-control"
                            prop:value=move || form.with(|f| f.end_date.clone())
                            on:input=move |ev| form.update(|f| f.end_date = event_target_value(&ev))
                            disabled=busy.clone()
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="leaveDescription">"Description"</label>
                    <textarea
                        id="leaveDescription"
                        class="form-control"
                        rows="3"
                        placeholder="Optional description"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
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
