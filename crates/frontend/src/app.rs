use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::http::provide_api_client;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());

    // ApiClient for every service below
    provide_api_client();

    view! {
        <Shell />
    }
}
