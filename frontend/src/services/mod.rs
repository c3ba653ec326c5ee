//! Glue between the browser and the core state machines.
//!
//! # Services
//!
//! - [`store`] - Reactive store wrapping `DashboardState`
//! - [`timers`] - `gloo-timers` implementation of the core `Scheduler`
//! - [`files`] - File picker events to `FileSelection`

pub mod store;
pub mod timers;
pub mod files;

pub use store::*;
pub use timers::*;
pub use files::*;
