use filechain::Event;
use leptos::*;

use crate::{DashboardStore, AVATAR_FALLBACK, AVATAR_URL};

#[component]
pub fn Header(store: DashboardStore) -> impl IntoView {
    let title = create_memo(move |_| store.with(|s| s.navigation().current().title()));
    let (avatar_broken, set_avatar_broken) = create_signal(false);

    view! {
        <header class="page-header">
            <button
                class="drawer-toggle"
                aria-label="Open menu"
                on:click=move |_| store.dispatch(Event::ToggleDrawer)
            >
                "☰"
            </button>
            <h1>{move || title.get()}</h1>
            <div class="avatar">
                <Show
                    when=move || !avatar_broken.get()
                    fallback=|| view! { <span class="avatar-fallback">{AVATAR_FALLBACK}</span> }
                >
                    <img
                        src=AVATAR_URL
                        alt="@shadcn"
                        on:error=move |_| {
                            log::warn!("Avatar failed to load, using initials");
                            set_avatar_broken.set(true);
                        }
                    />
                </Show>
            </div>
        </header>
    }
}
