use filechain::data;
use leptos::*;

use crate::{DashboardStore, FileTable};

#[component]
pub fn HistoryPanel(store: DashboardStore) -> impl IntoView {
    view! {
        <section class="card">
            <div class="card-header">
                <h3 class="card-title">"File History"</h3>
                <p class="card-description">"View and manage your uploaded and verified files."</p>
            </div>
            <div class="card-content">
                <FileTable store=store files=data::recent_files() detailed=true/>
            </div>
        </section>
    }
}
