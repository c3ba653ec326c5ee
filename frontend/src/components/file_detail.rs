//! Details dialog for a single file record ("View Details" action).

use filechain::{Event, FileRecord};
use leptos::*;

use crate::{media_icon, DashboardStore};

/// Label/value rows shown in the dialog, in display order.
pub fn detail_rows(file: &FileRecord) -> Vec<(&'static str, String)> {
    vec![
        ("Type", file.kind.as_str().to_string()),
        ("Upload Date", file.upload_date_label()),
        ("Hash", file.hash.clone()),
        ("Transaction ID", file.transaction_id.clone()),
        ("Status", file.status.to_string()),
    ]
}

#[component]
pub fn FileDetailDialog(store: DashboardStore) -> impl IntoView {
    let inspected = create_memo(move |_| store.with(|s| s.inspected().cloned()));
    let close = move |_| store.dispatch(Event::CloseInspector);

    view! {
        {move || inspected.get().map(|file| {
            let rows = detail_rows(&file)
                .into_iter()
                .map(|(label, value)| view! {
                    <div class="detail-row">
                        <span class="detail-label">{label}</span>
                        <span class="detail-value mono">{value}</span>
                    </div>
                })
                .collect_view();

            view! {
                <div class="dialog-backdrop" on:click=close></div>
                <div class="dialog" role="dialog" aria-modal="true">
                    <div class="dialog-header">
                        <h3>{media_icon(file.kind)} " " {file.name.clone()}</h3>
                        <button class="icon-button" aria-label="Close" on:click=close>"✕"</button>
                    </div>
                    <div class="dialog-body">{rows}</div>
                </div>
            }
        })}
    }
}
