//! Table of file records with a per-row action menu.

use filechain::{Event, FileRecord, NavigationTarget};
use leptos::*;

use crate::{media_icon, DashboardStore};

#[component]
pub fn FileTable(
    store: DashboardStore,
    files: &'static [FileRecord],
    /// Show hash and transaction columns plus the Download action
    #[prop(optional)]
    detailed: bool,
) -> impl IntoView {
    // Row whose action menu is open
    let (open_menu, set_open_menu) = create_signal(None::<u32>);

    let toggle_menu = move |id: u32| {
        set_open_menu.update(|open| {
            *open = if *open == Some(id) { None } else { Some(id) };
        });
    };

    let rows = files
        .iter()
        .map(|file| {
            let id = file.id;
            let menu_open = move || open_menu.get() == Some(id);

            view! {
                <tr>
                    <td class="file-name">
                        <span class="file-icon">{media_icon(file.kind)}</span>
                        {file.name.clone()}
                    </td>
                    <td>{file.upload_date_label()}</td>
                    {detailed.then(|| view! {
                        <td class="mono">{file.hash.clone()}</td>
                        <td class="mono">{file.transaction_id.clone()}</td>
                    })}
                    <td>
                        <span class={format!("status status-{}", file.status.as_str().to_lowercase())}>
                            {file.status.as_str()}
                        </span>
                    </td>
                    <td class="actions">
                        <button class="icon-button" aria-label="Actions" on:click=move |_| toggle_menu(id)>
                            "⋮"
                        </button>
                        <Show when=menu_open fallback=|| view! { }>
                            <div class="menu">
                                <button
                                    class="menu-item"
                                    on:click=move |_| {
                                        set_open_menu.set(None);
                                        store.dispatch(Event::InspectFile(id));
                                    }
                                >
                                    "👁️ View Details"
                                </button>
                                <button
                                    class="menu-item"
                                    on:click=move |_| {
                                        set_open_menu.set(None);
                                        store.dispatch(Event::Navigate(NavigationTarget::Verify));
                                    }
                                >
                                    "✅ Verify"
                                </button>
                                {detailed.then(|| view! {
                                    <button
                                        class="menu-item"
                                        on:click=move |_| {
                                            set_open_menu.set(None);
                                            log::info!("Download requested for file {}", id);
                                        }
                                    >
                                        "⬇️ Download"
                                    </button>
                                })}
                            </div>
                        </Show>
                    </td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="file-table">
            <thead>
                <tr>
                    <th>"File Name"</th>
                    <th>"Upload Date"</th>
                    {detailed.then(|| view! {
                        <th>"Hash"</th>
                        <th>"Transaction ID"</th>
                    })}
                    <th>"Status"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}
