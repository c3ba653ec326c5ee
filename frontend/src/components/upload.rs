//! Upload panel: drop zone, simulated progress, receipt.

use filechain::Event;
use leptos::*;
use web_sys::Event as DomEvent;

use crate::services::{click_file_input, selection_or_empty};
use crate::{DashboardStore, ProgressBar, UPLOAD_HINT};

const INPUT_ID: &str = "dropzone-file";

#[component]
pub fn UploadPanel(store: DashboardStore) -> impl IntoView {
    let progress = create_memo(move |_| store.with(|s| s.upload().progress()));
    let running = create_memo(move |_| store.with(|s| s.upload().is_running()));
    let receipt = create_memo(move |_| store.with(|s| s.upload().receipt()));

    let on_file_change = move |ev: DomEvent| {
        let selection = selection_or_empty(&ev);
        store.dispatch(Event::UploadFileChosen(selection));
    };

    let open_picker = move |_| {
        if let Err(e) = click_file_input(INPUT_ID) {
            log::error!("{}", e);
        }
    };

    view! {
        <section class="card">
            <div class="card-header">
                <h3 class="card-title">"Upload File"</h3>
                <p class="card-description">"Upload a file to hash and store on the blockchain."</p>
            </div>
            <div class="card-content">
                <div class="dropzone" class:busy=move || running.get() on:click=open_picker>
                    <div class="dropzone-icon">"📤"</div>
                    <p class="dropzone-text">
                        {move || if running.get() {
                            "⏳ Uploading..."
                        } else {
                            "Click to upload or drag and drop"
                        }}
                    </p>
                    <p class="dropzone-hint">{UPLOAD_HINT}</p>
                </div>
                <input id=INPUT_ID type="file" class="hidden" on:change=on_file_change/>

                <Show when=move || { progress.get() > 0 } fallback=|| view! { }>
                    <div class="mt-4">
                        <ProgressBar value=progress/>
                    </div>
                </Show>
            </div>

            {move || receipt.get().map(|r| view! {
                <div class="card-footer stack">
                    <div class="receipt-line">"📄 Hash: " {r.hash}</div>
                    <div class="receipt-line">"🔗 Transaction ID: " {r.transaction_id}</div>
                    <button
                        class="btn btn-primary w-full"
                        on:click=move |_| log::info!("View transaction requested")
                    >
                        "👁️ View Transaction"
                    </button>
                </div>
            })}
        </section>
    }
}
