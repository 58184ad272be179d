pub mod state;

use self::state::create_state;
use crate::domain::a001_team::api::TeamService;
use crate::domain::a002_team_member::api::TeamMemberService;
use crate::domain::a003_leave::api::{LeaveFilter, LeaveService};
use crate::domain::a003_leave::ui::details::LeaveDetails;
use crate::shared::components::team_filter_select::TeamFilterSelect;
use crate::shared::crud::{self, BrowserConfirm, Repository};
use crate::shared::date_utils::format_calendar_date;
use crate::shared::form_state::{submit_handler, FormMode};
use crate::shared::http::use_api_client;
use crate::shared::icons::icon;
use crate::shared::list_resource::{load, ListResource};
use crate::shared::team_filter::TeamFilter;
use contracts::domain::a001_team::aggregate::Team;
use contracts::domain::a002_team_member::aggregate::TeamMember;
use contracts::domain::a003_leave::aggregate::{CreateLeaveRequest, Leave};
use leptos::prelude::*;

const DELETE_PROMPT: &str = "Are you sure you want to delete this leave?";
const LOAD_FAILED: &str = "Failed to load leaves";
const DELETE_FAILED: &str = "Failed to delete leave";

#[component]
#[allow(non_snake_case)]
pub fn LeaveList() -> impl IntoView {
    let client = use_api_client();
    let service = LeaveService::new(client.clone());
    let team_service = TeamService::new(client.clone());
    let member_service = TeamMemberService::new(client);
    let state = create_state();
    // Memo equality keeps half-typed periods from triggering reloads
    let selection: Signal<LeaveFilter> =
        Memo::new(move |_| state.with(|s| s.leave_filter())).into();
    let team_filter = Signal::derive(move || selection.get().team);

    let list = ListResource::<Leave>::new();
    let (teams, set_teams) = signal::<Vec<Team>>(Vec::new());
    let (members, set_members) = signal::<Vec<TeamMember>>(Vec::new());

    let fetch = {
        let service = service.clone();
        move || {
            let service = service.clone();
            wasm_bindgen_futures::spawn_local(async move {
                load(&service, list, selection, LOAD_FAILED).await;
            });
        }
    };

    wasm_bindgen_futures::spawn_local(async move {
        match team_service.list(&()).await {
            Ok(v) => {
                set_teams.try_set(v);
            }
            Err(e) => log::error!("Error loading teams: {}", e),
        }
    });
    wasm_bindgen_futures::spawn_local(async move {
        match member_service.list(&TeamFilter::All).await {
            Ok(v) => {
                set_members.try_set(v);
            }
            Err(e) => log::error!("Error loading team members: {}", e),
        }
    });

    Effect::new(move |_| {
        selection.track();
        fetch();
    });

    let on_submit = {
        let service = service.clone();
        submit_handler(move |request: CreateLeaveRequest| {
            let service = service.clone();
            let editing = state.try_with_untracked(|s| s.editing_id()).flatten();
            let current = selection.try_get_untracked();
            async move {
                let Some(current) = current else {
                    return Ok(());
                };
                let (leave, reloaded) =
                    crud::save_then_reload(&service, editing, &request, &current).await?;
                log::info!("Saved leave {} for member {}", leave.id, leave.team_member_id);
                state.try_update(|s| s.form = FormMode::Closed);
                list.finish(reloaded, LOAD_FAILED);
                Ok(())
            }
        })
    };

    let handle_delete = {
        let service = service.clone();
        move |id: i64| {
            let service = service.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let Some(current) = selection.try_get_untracked() else {
                    return;
                };
                let deleted =
                    crud::delete_then_reload(&service, &BrowserConfirm, DELETE_PROMPT, id, &current)
                        .await;
                match deleted {
                    Ok(Some(reloaded)) => {
                        log::info!("Deleted leave {}", id);
                        list.finish(reloaded, LOAD_FAILED);
                    }
                    Ok(None) => {}
                    Err(e) => list.fail(DELETE_FAILED, &e),
                }
            });
        }
    };

    let close_form = Callback::new(move |_| state.update(|s| s.form = FormMode::Closed));
    let change_filter = Callback::new(move |f: TeamFilter| state.update(|s| s.filter = f));
    let (items, loading, error) = (list.items, list.loading, list.error);

    view! {
        <div class="container">
            <div class="header">
                <h1>"Leave Management"</h1>
                <button class="btn btn-primary" on:click=move |_| state.update(|s| s.form = FormMode::Create)>
                    {icon("plus")}
                    "Add Leave"
                </button>
            </div>

            <div class="filters">
                <TeamFilterSelect teams=teams value=team_filter on_change=change_filter />
                <div class="form-group filter-group">
                    <label for="periodStart">"From:"</label>
                    <input
                        type="date"
                        id="periodStart"
                        class="form-control form-control--inline"
                        prop:value=move || state.with(|s| s.period_start.clone())
                        on:change=move |ev| state.update(|s| s.period_start = event_target_value(&ev))
                        disabled=move || state.with(|s| s.filter == TeamFilter::All)
                    />
                    <label for="periodEnd">"To:"</label>
                    <input
                        type="date"
                        id="periodEnd"
                        class="form-control form-control--inline"
                        prop:value=move || state.with(|s| s.period_end.clone())
                        on:change=move |ev| state.update(|s| s.period_end = event_target_value(&ev))
                        disabled=move || state.with(|s| s.filter == TeamFilter::All)
                    />
                    <button
                        class="btn btn-secondary"
                        on:click=move |_| state.update(|s| {
                            s.period_start.clear();
                            s.period_end.clear();
                        })
                    >
                        {icon("x")}
                        "Clear"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="card">
                {move || loading.get().then(|| view! { <div class="loading">"Loading leaves..."</div> })}
                {move || {
                    let leaves = items.get();
                    if leaves.is_empty() {
                        return (!loading.get())
                            .then(|| view! { <p>"No leaves found. Add the first leave entry to get started."</p> })
                            .into_any();
                    }
                    let handle_delete = handle_delete.clone();
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Team Member"</th>
                                    <th>"Type"</th>
                                    <th>"Start Date"</th>
                                    <th>"End Date"</th>
                                    <th>"Description"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {leaves.into_iter().map(|leave| {
                                    let id = leave.id;
                                    let handle_delete = handle_delete.clone();
                                    let member_name = leave.team_member_name.clone();
                                    let badge = format!("leave-type {}", leave.leave_type.css_class());
                                    let type_name = leave.leave_type.display_name();
                                    let start = format_calendar_date(leave.start_date);
                                    let end = format_calendar_date(leave.end_date);
                                    let description = leave.description.clone();
                                    view! {
                                        <tr>
                                            <td>{member_name}</td>
                                            <td><span class=badge>{type_name}</span></td>
                                            <td>{start}</td>
                                            <td>{end}</td>
                                            <td>{description}</td>
                                            <td class="table__actions">
                                                <button
                                                    class="btn btn-secondary"
                                                    on:click=move |_| state.update(|s| s.form = FormMode::Edit(leave.clone()))
                                                >
                                                    {icon("edit")}
                                                    "Edit"
                                                </button>
                                                <button class="btn btn-danger" on:click=move |_| handle_delete(id)>
                                                    {icon("delete")}
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    }.into_any()
                }}
            </div>

            {move || {
                let form = state.with(|s| s.form.clone());
                form.is_open().then(|| view! {
                    <LeaveDetails
                        leave=form.editing().cloned()
                        members=members
                        on_submit=on_submit.clone()
                        on_cancel=close_form
                    />
                })
            }}
        </div>
    }
}
