use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Overlay dialog hosting one create/edit form.
///
/// Escape, overlay click and the close button all go through `on_close`;
/// the owner decides whether closing is allowed.
#[component]
pub fn Modal(
    /// Title of the modal
    title: String,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Disables the close button
    #[prop(into)]
    close_disabled: Signal<bool>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let escape = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || escape.remove());

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal" on:click=move |_| on_close.run(())>
            <div class="modal-content" on:click=stop_propagation>
                <div class="modal-header">
                    <h2>{title}</h2>
                    <button
                        class="close-btn"
                        aria-label="Close"
                        disabled=move || close_disabled.get()
                        on:click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
