//! FileChain - Frontend Rust/Leptos Application
//!
//! A WebAssembly dashboard for hashing files and verifying them against a
//! blockchain. Every flow is simulated: the core crate's state machines
//! run on browser timers and nothing leaves the page.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────┬─────────────────────────────────────────────────┐
//! │           │  Header (title, drawer toggle, avatar)          │
//! │  Sidebar  ├─────────────────────────────────────────────────┤
//! │           │  Active panel                                   │
//! │           │  Dashboard | Upload | Verify | History | Profile│
//! ├───────────┴─────────────────────────────────────────────────┤
//! │  MobileDrawer, Toast, FileDetailDialog (overlays)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - UI constants (branding, chart geometry, colors)
//! - [`types`] - Icons and frontend errors
//! - [`components`] - UI components (Sidebar, Header, panels, ...)
//! - [`services`] - Reactive store, browser timers, file picker

use filechain::{NavigationTarget, SimulationConfig};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{media_icon, nav_icon, AppError, AppResult};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Installs logging and mounts [`App`] on the document body.
pub fn mount() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 FileChain - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <Routes>
                <Route path="/" view=MainContent/>
            </Routes>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let store = DashboardStore::new(SimulationConfig::default());

    // Pending intervals and timeouts must not outlive the view
    on_cleanup(move || store.teardown());

    let current = create_memo(move |_| store.with(|s| s.navigation().current()));

    view! {
        <div class="layout">
            <Sidebar store=store/>
            <MobileDrawer store=store/>

            <div class="main">
                <Header store=store/>
                <main class="content">
                    {move || {
                        let panel = match current.get() {
                            NavigationTarget::Dashboard => view! { <DashboardPanel store=store/> }.into_view(),
                            NavigationTarget::Upload => view! { <UploadPanel store=store/> }.into_view(),
                            NavigationTarget::Verify => view! { <VerifyPanel store=store/> }.into_view(),
                            NavigationTarget::History => view! { <HistoryPanel store=store/> }.into_view(),
                            NavigationTarget::Profile => view! { <ProfilePanel store=store/> }.into_view(),
                        };
                        view! { <div class="panel-enter">{panel}</div> }
                    }}
                </main>
            </div>
        </div>

        <Toast store=store/>
        <FileDetailDialog store=store/>
    }
}
