//! UI Components for the FileChain dashboard.
//!
//! Every component takes the [`DashboardStore`](crate::DashboardStore)
//! and dispatches core `Event`s; none of them own simulation state.
//!
//! # Layout Components
//! - [`Sidebar`] / [`MobileDrawer`] - Navigation
//! - [`Header`] - Page title, drawer toggle, avatar
//! - [`Toast`] - Bottom-right notification
//!
//! # Panels
//! - [`DashboardPanel`] - Overview, stats, activity chart, recent files
//! - [`UploadPanel`] - Drop zone with simulated progress and receipt
//! - [`VerifyPanel`] - Drop zone with simulated verification
//! - [`HistoryPanel`] - Full file table
//! - [`ProfilePanel`] - Account details form and user stats
//!
//! # Building Blocks
//! - [`ActivityChart`] - Weekly uploads vs verifications
//! - [`FileTable`] - File rows with an action menu
//! - [`FileDetailDialog`] - "View Details" dialog
//! - [`ProgressBar`] - Upload progress indicator

mod sidebar;
mod header;
mod toast;
mod dashboard;
mod upload;
mod verify;
mod history;
mod profile;
mod chart;
mod file_table;
mod file_detail;
mod progress;

pub use sidebar::*;
pub use header::*;
pub use toast::*;
pub use dashboard::*;
pub use upload::*;
pub use verify::*;
pub use history::*;
pub use profile::*;
pub use chart::*;
pub use file_table::*;
pub use file_detail::*;
pub use progress::*;
