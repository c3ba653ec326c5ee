//! Overview panel: welcome card, quick stats, activity chart, recent files.

use filechain::{data, Event, NavigationTarget};
use leptos::*;

use crate::{ActivityChart, DashboardStore, FileTable};

#[component]
pub fn DashboardPanel(store: DashboardStore) -> impl IntoView {
    let stats = data::user_stats();

    view! {
        <div class="grid grid-2">
            <section class="card">
                <div class="card-header">
                    <h3 class="card-title">"Welcome, User!"</h3>
                    <p class="card-description">"Here's an overview of your recent activity."</p>
                </div>
                <div class="card-content">
                    <button
                        class="btn btn-primary"
                        on:click=move |_| store.dispatch(Event::Navigate(NavigationTarget::Upload))
                    >
                        "📤 Quick Upload"
                    </button>
                </div>
            </section>

            <section class="card">
                <div class="card-header">
                    <h3 class="card-title">"Quick Stats"</h3>
                </div>
                <div class="card-content stack">
                    <div class="stat">"📄 Total Files Uploaded: " {stats.total_uploaded}</div>
                    <div class="stat">"✅ Files Verified: " {stats.verified}</div>
                </div>
            </section>

            <section class="card span-2">
                <div class="card-header">
                    <h3 class="card-title">"Recent Activity"</h3>
                </div>
                <div class="card-content">
                    <ActivityChart series=data::activity_series()/>
                </div>
            </section>

            <section class="card span-2">
                <div class="card-header">
                    <h3 class="card-title">"Recent Files"</h3>
                </div>
                <div class="card-content">
                    <FileTable store=store files=data::recent_files()/>
                </div>
            </section>
        </div>
    }
}
