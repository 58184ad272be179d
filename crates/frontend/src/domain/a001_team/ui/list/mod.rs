pub mod state;

use self::state::create_state;
use crate::domain::a001_team::api::TeamService;
use crate::domain::a001_team::ui::details::TeamDetails;
use crate::shared::crud::{self, BrowserConfirm};
use crate::shared::date_utils::format_date;
use crate::shared::form_state::{submit_handler, FormMode};
use crate::shared::http::use_api_client;
use crate::shared::icons::icon;
use crate::shared::list_resource::{load, ListResource};
use contracts::domain::a001_team::aggregate::{CreateTeamRequest, Team};
use leptos::prelude::*;

const DELETE_PROMPT: &str = "Are you sure you want to delete this team?";
const LOAD_FAILED: &str = "Failed to load teams";
const DELETE_FAILED: &str = "Failed to delete team";

#[component]
#[allow(non_snake_case)]
pub fn TeamList() -> impl IntoView {
    let service = TeamService::new(use_api_client());
    let state = create_state();
    let list = ListResource::<Team>::new();
    let filter = Signal::stored(());

    let fetch = {
        let service = service.clone();
        move || {
            let service = service.clone();
            wasm_bindgen_futures::spawn_local(async move {
                load(&service, list, filter, LOAD_FAILED).await;
            });
        }
    };

    let on_submit = {
        let service = service.clone();
        submit_handler(move |request: CreateTeamRequest| {
            let service = service.clone();
            let editing = state.try_with_untracked(|s| s.editing_id()).flatten();
            async move {
                let (team, reloaded) =
                    crud::save_then_reload(&service, editing, &request, &()).await?;
                log::info!("Saved team {} ({})", team.id, team.name);
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
                let deleted =
                    crud::delete_then_reload(&service, &BrowserConfirm, DELETE_PROMPT, id, &()).await;
                match deleted {
                    Ok(Some(reloaded)) => {
                        log::info!("Deleted team {}", id);
                        list.finish(reloaded, LOAD_FAILED);
                    }
                    Ok(None) => {}
                    Err(e) => list.fail(DELETE_FAILED, &e),
                }
            });
        }
    };

    let close_form = Callback::new(move |_| state.update(|s| s.form = FormMode::Closed));
    let (items, loading, error) = (list.items, list.loading, list.error);

    fetch();

    view! {
        <div class="container">
            <div class="header">
                <h1>"Team Management"</h1>
                <button class="btn btn-primary" on:click=move |_| state.update(|s| s.form = FormMode::Create)>
                    {icon("plus")}
                    "Create Team"
                </button>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="card">
                {move || loading.get().then(|| view! { <div class="loading">"Loading teams..."</div> })}
                {move || {
                    let teams = items.get();
                    if teams.is_empty() {
                        return (!loading.get())
                            .then(|| view! { <p>"No teams found. Create your first team to get started."</p> })
                            .into_any();
                    }
                    let handle_delete = handle_delete.clone();
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Description"</th>
                                    <th>"Members"</th>
                                    <th>"Created"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {teams.into_iter().map(|team| {
                                    let id = team.id;
                                    let handle_delete = handle_delete.clone();
                                    let members = if team.members.is_empty() {
                                        view! { <span>"No members"</span> }.into_any()
                                    } else {
                                        team.members.iter().map(|m| view! {
                                            <span class="team-member-badge">{m.full_name()}</span>
                                        }).collect_view().into_any()
                                    };
                                    let created = format_date(&team.created_at);
                                    let name = team.name.clone();
                                    let description = team.description.clone();
                                    view! {
                                        <tr>
                                            <td>{name}</td>
                                            <td>{description}</td>
                                            <td>{members}</td>
                                            <td>{created}</td>
                                            <td class="table__actions">
                                                <button
                                                    class="btn btn-secondary"
                                                    on:click=move |_| state.update(|s| s.form = FormMode::Edit(team.clone()))
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
                    <TeamDetails
                        team=form.editing().cloned()
                        on_submit=on_submit.clone()
                        on_cancel=close_form
                    />
                })
            }}
        </div>
    }
}
