use crate::layout::global_context::{ActiveView, AppGlobalContext};
use crate::shared::icons;
use leptos::prelude::*;

fn icon_for(view: ActiveView) -> AnyView {
    icons::icon(view.key())
}

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <nav class="navbar">
            <div class="navbar-brand">"Agile Tools"</div>
            <ul class="navbar-nav">
                {ActiveView::all().into_iter().map(|view| {
                    let class = move || {
                        if ctx.active.get() == view {
                            "btn btn-primary"
                        } else {
                            "btn btn-secondary"
                        }
                    };
                    view! {
                        <li>
                            <button class=class on:click=move |_| ctx.activate(view)>
                                {icon_for(view)}
                                <span>{view.label()}</span>
                            </button>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
