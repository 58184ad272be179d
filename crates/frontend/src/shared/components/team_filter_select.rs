use crate::shared::team_filter::TeamFilter;
use contracts::domain::a001_team::aggregate::Team;
use leptos::prelude::*;

/// "Filter by Team" dropdown with an "All Teams" entry
#[component]
pub fn TeamFilterSelect(
    #[prop(into)] teams: Signal<Vec<Team>>,
    #[prop(into)] value: Signal<TeamFilter>,
    on_change: Callback<TeamFilter>,
) -> impl IntoView {
    view! {
        <div class="form-group filter-group">
            <label for="teamFilter">"Filter by Team:"</label>
            <select
                id="teamFilter"
                class="form-control form-control--inline"
                prop:value=move || value.get().select_value()
                on:change=move |ev| on_change.run(TeamFilter::from_select_value(&event_target_value(&ev)))
            >
                <option value=TeamFilter::ALL_VALUE selected=move || value.get() == TeamFilter::All>
                    "All Teams"
                </option>
                {move || teams.get().into_iter().map(|team| {
                    let id = team.id;
                    view! {
                        <option value=id.to_string() selected=move || value.get() == TeamFilter::Team(id)>
                            {team.name}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
