//! Navigation: desktop sidebar and mobile drawer.

use filechain::{Event, NavigationTarget};
use leptos::*;

use crate::{nav_icon, DashboardStore, APP_NAME};

#[component]
fn NavList(store: DashboardStore) -> impl IntoView {
    let current = create_memo(move |_| store.with(|s| s.navigation().current()));

    let items = NavigationTarget::ALL
        .into_iter()
        .map(|target| {
            view! {
                <button
                    class="nav-item"
                    class:active=move || current.get() == target
                    on:click=move |_| store.dispatch(Event::Navigate(target))
                >
                    <span class="nav-icon">{nav_icon(target)}</span>
                    {target.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class="nav-list">
            {items}
            <button class="nav-item" on:click=move |_| store.dispatch(Event::Logout)>
                <span class="nav-icon">"🚪"</span>
                "Logout"
            </button>
        </nav>
    }
}

/// Fixed sidebar for large screens.
#[component]
pub fn Sidebar(store: DashboardStore) -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">
                <h2>{APP_NAME}</h2>
            </div>
            <NavList store=store/>
        </aside>
    }
}

/// Slide-in drawer for small screens, toggled from the header.
#[component]
pub fn MobileDrawer(store: DashboardStore) -> impl IntoView {
    let open = create_memo(move |_| store.with(|s| s.navigation().drawer_open()));

    view! {
        <Show
            when=move || open.get()
            fallback=|| view! { }
        >
            <div class="drawer-backdrop" on:click=move |_| store.dispatch(Event::ToggleDrawer)></div>
            <aside class="drawer">
                <div class="sidebar-brand">
                    <h2>{APP_NAME}</h2>
                </div>
                <NavList store=store/>
            </aside>
        </Show>
    }
}
