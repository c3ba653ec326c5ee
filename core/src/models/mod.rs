//! Domain models for the FileChain dashboard.
//!
//! - [`NavigationTarget`] - The mutually exclusive content panels
//! - [`FileRecord`] - A file entry shown in the recent files / history tables
//! - [`MediaKind`] / [`FileStatus`] - Classification of a [`FileRecord`]
//! - [`ActivityPoint`] - One bar group of the activity chart
//! - [`UserStats`] / [`UserProfile`] - Account data for the profile panel
//! - [`UploadReceipt`] - Result panel shown once an upload completes
//! - [`FileSelection`] - Unvalidated reference to a user-chosen file
//!
//! Hashes and transaction ids are opaque display strings. Nothing here
//! parses or validates them.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

// =============================================================================
// Navigation
// =============================================================================

/// Content panel selected by the sidebar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationTarget {
    #[default]
    Dashboard,
    Upload,
    Verify,
    History,
    Profile,
}

impl NavigationTarget {
    /// Every target, in sidebar order.
    pub const ALL: [NavigationTarget; 5] = [
        NavigationTarget::Dashboard,
        NavigationTarget::Upload,
        NavigationTarget::Verify,
        NavigationTarget::History,
        NavigationTarget::Profile,
    ];

    /// Stable lowercase id.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Upload => "upload",
            Self::Verify => "verify",
            Self::History => "history",
            Self::Profile => "profile",
        }
    }

    /// Page header title: the id with its first letter capitalized.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Upload => "Upload",
            Self::Verify => "Verify",
            Self::History => "History",
            Self::Profile => "Profile",
        }
    }

    /// Sidebar button label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Upload => "Upload File",
            Self::Verify => "Verify File",
            Self::History => "History",
            Self::Profile => "Profile",
        }
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.id())
    }
}

impl FromStr for NavigationTarget {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|target| target.id() == normalized)
            .ok_or_else(|| ModelError::UnknownTarget(s.to_string()))
    }
}

// =============================================================================
// File Records
// =============================================================================

/// Media kind of a stored file, drives the icon in the tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Document,
    Image,
    Video,
    Audio,
}

impl MediaKind {
    /// Lowercase id, as used in the sample data.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
        }
    }
}

impl FromStr for MediaKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "document" => Ok(Self::Document),
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            "audio" => Ok(Self::Audio),
            _ => Err(ModelError::UnknownMediaKind(s.to_string())),
        }
    }
}

/// Anchoring status of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileStatus {
    Verified,
    Pending,
}

impl FileStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Verified => "Verified",
            Self::Pending => "Pending",
        }
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for FileStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "verified" => Ok(Self::Verified),
            "pending" => Ok(Self::Pending),
            _ => Err(ModelError::UnknownStatus(s.to_string())),
        }
    }
}

/// A file previously uploaded and anchored.
///
/// Read-only reference data for table rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub id: u32,
    /// Display name, including the extension
    pub name: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub upload_date: NaiveDate,
    /// Content hash (display placeholder)
    pub hash: String,
    /// Transaction id (display placeholder)
    pub transaction_id: String,
    pub status: FileStatus,
}

impl FileRecord {
    /// Upload date as rendered in the tables (`YYYY-MM-DD`).
    pub fn upload_date_label(&self) -> String {
        self.upload_date.format("%Y-%m-%d").to_string()
    }
}

// =============================================================================
// Activity Chart
// =============================================================================

/// One day of the activity chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityPoint {
    /// X-axis label (weekday)
    #[serde(rename = "name")]
    pub label: String,
    pub uploads: u32,
    pub verifications: u32,
}

impl ActivityPoint {
    pub fn new(label: impl Into<String>, uploads: u32, verifications: u32) -> Self {
        Self {
            label: label.into(),
            uploads,
            verifications,
        }
    }
}

// =============================================================================
// Account
// =============================================================================

/// Aggregate account statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_uploaded: u32,
    pub verified: u32,
    pub account_created: NaiveDate,
}

impl UserStats {
    /// Creation date in long form, e.g. "January 1, 2023".
    pub fn account_created_label(&self) -> String {
        self.account_created.format("%B %-d, %Y").to_string()
    }
}

/// Editable account details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

/// Tabs of the profile panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileTab {
    #[default]
    Details,
    Stats,
}

impl ProfileTab {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Details => "Account Details",
            Self::Stats => "User Stats",
        }
    }
}

impl FromStr for ProfileTab {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "details" => Ok(Self::Details),
            "stats" => Ok(Self::Stats),
            _ => Err(ModelError::UnknownTab(s.to_string())),
        }
    }
}

// =============================================================================
// Simulated Flows
// =============================================================================

/// Receipt shown in the upload panel footer after a completed upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadReceipt {
    pub hash: String,
    pub transaction_id: String,
}

/// A file picked by the user.
///
/// The reference is never validated and its content is never read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSelection {
    /// File name as reported by the picker, `None` if the picker was cancelled
    pub name: Option<String>,
    /// Size in bytes, informational only
    pub size: u64,
}

impl FileSelection {
    pub fn named(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: Some(name.into()),
            size,
        }
    }

    /// Picker closed without choosing anything.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_ids_roundtrip_through_from_str() {
        for target in NavigationTarget::ALL {
            assert_eq!(target.id().parse::<NavigationTarget>(), Ok(target));
        }
        assert_eq!(" Upload ".parse::<NavigationTarget>(), Ok(NavigationTarget::Upload));
        assert_eq!(
            "settings".parse::<NavigationTarget>(),
            Err(ModelError::UnknownTarget("settings".into()))
        );
    }

    #[test]
    fn test_navigation_title_is_capitalized_id() {
        for target in NavigationTarget::ALL {
            let id = target.id();
            let expected = format!("{}{}", id[..1].to_uppercase(), &id[1..]);
            assert_eq!(target.title(), expected);
        }
        assert_eq!(NavigationTarget::default(), NavigationTarget::Dashboard);
    }

    #[test]
    fn test_file_record_serialization_uses_camel_case_and_type() {
        let record = FileRecord {
            id: 1,
            name: "contract.pdf".into(),
            kind: MediaKind::Document,
            upload_date: NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
            hash: "0x1234...5678".into(),
            transaction_id: "0xabcd...ef01".into(),
            status: FileStatus::Verified,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "document");
        assert_eq!(json["uploadDate"], "2023-05-01");
        assert_eq!(json["transactionId"], "0xabcd...ef01");
        assert_eq!(json["status"], "Verified");
        assert_eq!(record.upload_date_label(), "2023-05-01");
    }

    #[test]
    fn test_account_created_label() {
        let stats = UserStats {
            total_uploaded: 25,
            verified: 20,
            account_created: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        };
        assert_eq!(stats.account_created_label(), "January 1, 2023");
    }

    #[test]
    fn test_file_selection_empty() {
        assert!(FileSelection::empty().is_empty());
        assert!(!FileSelection::named("a.txt", 3).is_empty());
        assert_eq!("PENDING".parse::<FileStatus>(), Ok(FileStatus::Pending));
        assert!("mp3".parse::<MediaKind>().is_err());
    }
}
