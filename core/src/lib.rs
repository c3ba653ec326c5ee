//! # FileChain - dashboard state and simulated flows
//!
//! FileChain is a dashboard for hashing files and verifying them against
//! a blockchain. This crate holds everything that is not rendering:
//! sample data, the navigation / upload / verify / toast state machines,
//! and a timer abstraction that lets the same state run in the browser or
//! under a deterministic virtual clock.
//!
//! Uploads and verifications are simulated with timers. Nothing is
//! hashed, stored or sent anywhere.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐  Event   ┌────────────────┐  set_timeout / set_interval  ┌─────────────┐
//! │  UI / CLI   │─────────▶│ DashboardState │─────────────────────────────▶│  Scheduler  │
//! │             │◀─────────│  (dispatch)    │◀─────────────────────────────│ (virtual or │
//! └─────────────┘  render  └────────────────┘     UploadTick, ...          │  browser)   │
//!                                                                           └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use filechain::{Event, FileSelection, NavigationTarget, SimulatedDashboard};
//!
//! let mut sim = SimulatedDashboard::default();
//! sim.send(Event::Navigate(NavigationTarget::Upload));
//! sim.send(Event::UploadFileChosen(FileSelection::named("contract.pdf", 2048)));
//! sim.advance_ms(5000);
//! assert_eq!(sim.state().upload().progress(), 100);
//! assert_eq!(sim.state().toast().message(), Some("File Uploaded Successfully"));
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`config`] - Simulation timings
//! - [`models`] - Domain models (FileRecord, NavigationTarget, ...)
//! - [`data`] - Hard-coded sample data
//! - [`timer`] - Cancellable timer abstraction and virtual clock
//! - [`state`] - State machines and the root store
//! - [`simulation`] - Virtual-time driver

// Core modules
pub mod error;
pub mod config;
pub mod models;

// Sample data
pub mod data;

// Timers and state
pub mod timer;
pub mod state;
pub mod simulation;

// =============================================================================
// Re-exports
// =============================================================================

// Errors
pub use error::{CliError, CliResult, ConfigError, ConfigResult, ModelError, ModelResult};

// Configuration
pub use config::SimulationConfig;

// Models
pub use models::{
    ActivityPoint, FileRecord, FileSelection, FileStatus, MediaKind, NavigationTarget,
    ProfileTab, UploadReceipt, UserProfile, UserStats,
};

// Timers
pub use timer::{Scheduler, TimerHandle, VirtualScheduler};

// State
pub use state::{
    DashboardState, Event, Navigation, Notifications, ProfileForm, UploadOutcome, UploadPhase,
    UploadSimulation, VerifyOutcome, VerifySimulation, PROFILE_UPDATED, UPLOAD_SUCCESS,
    VERIFY_SUCCESS,
};

// Driver
pub use simulation::{Notice, SimulatedDashboard};
