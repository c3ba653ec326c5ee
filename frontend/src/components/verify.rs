use filechain::Event;
use leptos::*;
use web_sys::Event as DomEvent;

use crate::services::{click_file_input, selection_or_empty};
use crate::DashboardStore;

const INPUT_ID: &str = "verify-file";

#[component]
pub fn VerifyPanel(store: DashboardStore) -> impl IntoView {
    let pending = create_memo(move |_| store.with(|s| s.verify().is_pending()));

    let on_file_change = move |ev: DomEvent| {
        store.dispatch(Event::VerifyFileChosen(selection_or_empty(&ev)));
    };

    view! {
        <section class="card">
            <div class="card-header">
                <h3 class="card-title">"Verify File"</h3>
                <p class="card-description">"Upload a file to verify its integrity against the blockchain."</p>
            </div>
            <div class="card-content">
                <div
                    class="dropzone"
                    class:busy=move || pending.get()
                    on:click=move |_| {
                        if let Err(e) = click_file_input(INPUT_ID) {
                            log::error!("{}", e);
                        }
                    }
                >
                    <div class="dropzone-icon">"✅"</div>
                    <p class="dropzone-text">
                        {move || if pending.get() {
                            "🔍 Verifying..."
                        } else {
                            "Click to upload or drag and drop"
                        }}
                    </p>
                    <p class="dropzone-hint">"Upload the file you want to verify"</p>
                </div>
                <input id=INPUT_ID type="file" class="hidden" on:change=on_file_change/>
            </div>
        </section>
    }
}
