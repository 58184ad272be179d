pub mod state;

use self::state::{capacity_label, create_state, jurisdiction_label};
use crate::domain::a001_team::api::TeamService;
use crate::domain::a002_team_member::api::TeamMemberService;
use crate::domain::a002_team_member::ui::details::TeamMemberDetails;
use crate::shared::components::team_filter_select::TeamFilterSelect;
use crate::shared::crud::{self, BrowserConfirm, Repository};
use crate::shared::form_state::{submit_handler, FormMode};
use crate::shared::http::use_api_client;
use crate::shared::icons::icon;
use crate::shared::list_resource::{load, ListResource};
use crate::shared::team_filter::TeamFilter;
use contracts::domain::a001_team::aggregate::Team;
use contracts::domain::a002_team_member::aggregate::{CreateTeamMemberRequest, TeamMember};
use leptos::prelude::*;

const DELETE_PROMPT: &str = "Are you sure you want to delete this team member?";
const LOAD_FAILED: &str = "Failed to load team members";
const DELETE_FAILED: &str = "Failed to delete team member";

#[component]
#[allow(non_snake_case)]
pub fn TeamMemberList() -> impl IntoView {
    let client = use_api_client();
    let service = TeamMemberService::new(client.clone());
    let team_service = TeamService::new(client);
    let state = create_state();
    let filter: Signal<TeamFilter> = Memo::new(move |_| state.with(|s| s.filter)).into();

    let list = ListResource::<TeamMember>::new();
    let (teams, set_teams) = signal::<Vec<Team>>(Vec::new());

    let fetch = {
        let service = service.clone();
        move || {
            let service = service.clone();
            wasm_bindgen_futures::spawn_local(async move {
                load(&service, list, filter, LOAD_FAILED).await;
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

    // Runs once on mount and again whenever the team filter changes
    Effect::new(move |_| {
        filter.track();
        fetch();
    });

    let on_submit = {
        let service = service.clone();
        submit_handler(move |request: CreateTeamMemberRequest| {
            let service = service.clone();
            let editing = state.try_with_untracked(|s| s.editing_id()).flatten();
            let current = filter.try_get_untracked();
            async move {
                let Some(current) = current else {
                    return Ok(());
                };
                let (member, reloaded) =
                    crud::save_then_reload(&service, editing, &request, &current).await?;
                log::info!("Saved team member {} ({})", member.id, member.full_name());
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
                let Some(current) = filter.try_get_untracked() else {
                    return;
                };
                let deleted =
                    crud::delete_then_reload(&service, &BrowserConfirm, DELETE_PROMPT, id, &current)
                        .await;
                match deleted {
                    Ok(Some(reloaded)) => {
                        log::info!("Deleted team member {}", id);
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
                <h1>"Team Members"</h1>
                <button class="btn btn-primary" on:click=move |_| state.update(|s| s.form = FormMode::Create)>
                    {icon("plus")}
                    "Add Team Member"
                </button>
            </div>

            <TeamFilterSelect teams=teams value=filter on_change=change_filter />

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="card">
                {move || loading.get().then(|| view! { <div class="loading">"Loading team members..."</div> })}
                {move || {
                    let members = items.get();
                    if members.is_empty() {
                        return (!loading.get())
                            .then(|| view! { <p>"No team members found. Add your first team member to get started."</p> })
                            .into_any();
                    }
                    let handle_delete = handle_delete.clone();
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Email"</th>
                                    <th>"Team"</th>
                                    <th>"Jurisdiction"</th>
                                    <th>"Capacity"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {members.into_iter().map(|member| {
                                    let id = member.id;
                                    let handle_delete = handle_delete.clone();
                                    let name = member.full_name();
                                    let email = member.email.clone();
                                    let team_name = member.team_name.clone();
                                    let jurisdiction = jurisdiction_label(&member);
                                    let capacity = capacity_label(&member);
                                    view! {
                                        <tr>
                                            <td>{name}</td>
                                            <td>{email}</td>
                                            <td>{team_name}</td>
                                            <td>{jurisdiction}</td>
                                            <td>{capacity}</td>
                                            <td class="table__actions">
                                                <button
                                                    class="btn btn-secondary"
                                                    on:click=move |_| state.update(|s| s.form = FormMode::Edit(member.clone()))
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
                    <TeamMemberDetails
                        member=form.editing().cloned()
                        teams=teams
                        on_submit=on_submit.clone()
                        on_cancel=close_form
                    />
                })
            }}
        </div>
    }
}
