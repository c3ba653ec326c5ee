use filechain::Event;
use leptos::*;

use crate::DashboardStore;

/// Bottom-right notification. Dismissal is driven by the store's timer.
#[component]
pub fn Toast(store: DashboardStore) -> impl IntoView {
    let message = create_memo(move |_| store.with(|s| s.toast().message().map(str::to_string)));

    view! {
        {move || message.get().map(|text| view! {
            <div class="toast" role="status">
                <span class="toast-message">{text}</span>
                <button
                    class="icon-button"
                    aria-label="Dismiss"
                    on:click=move |_| store.dispatch(Event::DismissToast)
                >
                    "✕"
                </button>
            </div>
        })}
    }
}
