//! Profile panel with "Account Details" and "User Stats" tabs.

use filechain::{data, Event, ProfileTab};
use leptos::*;

use crate::DashboardStore;

#[component]
pub fn ProfilePanel(store: DashboardStore) -> impl IntoView {
    let tab = create_memo(move |_| store.with(|s| s.profile().tab()));

    let tab_button = move |target: ProfileTab| {
        view! {
            <button
                class="tab"
                class:active=move || tab.get() == target
                on:click=move |_| store.dispatch(Event::ProfileTab(target))
            >
                {target.label()}
            </button>
        }
    };

    view! {
        <section class="card">
            <div class="card-header">
                <h3 class="card-title">"User Profile"</h3>
                <p class="card-description">"Manage your account settings and view your stats."</p>
            </div>
            <div class="card-content">
                <div class="tabs" role="tablist">
                    {tab_button(ProfileTab::Details)}
                    {tab_button(ProfileTab::Stats)}
                </div>
                {move || match tab.get() {
                    ProfileTab::Details => view! { <AccountDetails store=store/> }.into_view(),
                    ProfileTab::Stats => view! { <UserStatsTab/> }.into_view(),
                }}
            </div>
        </section>
    }
}

#[component]
fn AccountDetails(store: DashboardStore) -> impl IntoView {
    let name = create_memo(move |_| store.with(|s| s.profile().draft().name.clone()));
    let email = create_memo(move |_| store.with(|s| s.profile().draft().email.clone()));

    // Each input edits one field and carries the other one over from the draft
    let edit_name = move |name: String| {
        let email = store.with_untracked(|s| s.profile().draft().email.clone());
        store.dispatch(Event::ProfileEdited { name, email });
    };
    let edit_email = move |email: String| {
        let name = store.with_untracked(|s| s.profile().draft().name.clone());
        store.dispatch(Event::ProfileEdited { name, email });
    };

    view! {
        <form
            class="stack"
            on:submit=move |ev| {
                ev.prevent_default();
                store.dispatch(Event::ProfileSubmitted);
            }
        >
            <div class="field">
                <label for="name">"Name"</label>
                <input
                    id="name"
                    prop:value=move || name.get()
                    on:input=move |ev| edit_name(event_target_value(&ev))
                />
            </div>
            <div class="field">
                <label for="email">"Email"</label>
                <input
                    id="email"
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| edit_email(event_target_value(&ev))
                />
            </div>
            <button type="submit" class="btn btn-primary">"👤 Update Profile"</button>
        </form>
    }
}

#[component]
fn UserStatsTab() -> impl IntoView {
    let stats = data::user_stats();
    view! {
        <div class="stack">
            <div class="stat">"📤 Total Files Uploaded: " {stats.total_uploaded}</div>
            <div class="stat">"✅ Files Verified: " {stats.verified}</div>
            <div class="stat">"🕒 Account Created: " {stats.account_created_label()}</div>
        </div>
    }
}
