pub mod global_context;
pub mod navbar;

use crate::domain::a001_team::ui::list::TeamList;
use crate::domain::a002_team_member::ui::list::TeamMemberList;
use crate::domain::a003_leave::ui::list::LeaveList;
use global_context::{ActiveView, AppGlobalContext};
use leptos::prelude::*;
use navbar::Navbar;

/// Navbar on top, the active management view below it.
///
/// Switching views unmounts the previous one.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="app">
            <Navbar />
            <main class="app-main">
                {move || match ctx.active.get() {
                    ActiveView::Teams => view! { <TeamList /> }.into_any(),
                    ActiveView::Members => view! { <TeamMemberList /> }.into_any(),
                    ActiveView::Leaves => view! { <LeaveList /> }.into_any(),
                }}
            </main>
        </div>
    }
}
