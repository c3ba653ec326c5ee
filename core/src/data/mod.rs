//! Hard-coded sample data rendered by the dashboard.
//!
//! Nothing in the app mutates these values.

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use crate::models::{
    ActivityPoint, FileRecord, FileStatus, MediaKind, UploadReceipt, UserProfile, UserStats,
};

/// Receipt shown after every simulated upload.
pub const UPLOAD_HASH: &str = "0x1234...5678";
pub const UPLOAD_TRANSACTION_ID: &str = "0xabcd...ef01";

static RECENT_FILES: Lazy<Vec<FileRecord>> = Lazy::new(|| {
    vec![
        record(1, "contract.pdf", MediaKind::Document, (2023, 5, 1), "0x1234...5678", "0xabcd...ef01", FileStatus::Verified),
        record(2, "image.jpg", MediaKind::Image, (2023, 5, 2), "0x2345...6789", "0xbcde...f012", FileStatus::Pending),
        record(3, "video.mp4", MediaKind::Video, (2023, 5, 3), "0x3456...7890", "0xcdef...0123", FileStatus::Verified),
        record(4, "audio.mp3", MediaKind::Audio, (2023, 5, 4), "0x4567...8901", "0xdefg...1234", FileStatus::Verified),
    ]
});

static ACTIVITY: Lazy<Vec<ActivityPoint>> = Lazy::new(|| {
    vec![
        ActivityPoint::new("Mon", 4, 2),
        ActivityPoint::new("Tue", 3, 5),
        ActivityPoint::new("Wed", 2, 3),
        ActivityPoint::new("Thu", 6, 4),
        ActivityPoint::new("Fri", 8, 7),
        ActivityPoint::new("Sat", 9, 6),
        ActivityPoint::new("Sun", 6, 8),
    ]
});

static STATS: Lazy<UserStats> = Lazy::new(|| UserStats {
    total_uploaded: 25,
    verified: 20,
    account_created: date((2023, 1, 1)),
});

fn date((y, m, d): (i32, u32, u32)) -> NaiveDate {
    // Literal dates above are all valid; fall back to the epoch rather than panic.
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn record(
    id: u32,
    name: &str,
    kind: MediaKind,
    upload_date: (i32, u32, u32),
    hash: &str,
    transaction_id: &str,
    status: FileStatus,
) -> FileRecord {
    FileRecord {
        id,
        name: name.to_string(),
        kind,
        upload_date: date(upload_date),
        hash: hash.to_string(),
        transaction_id: transaction_id.to_string(),
        status,
    }
}

/// Recent files, shared by the dashboard and history tables.
pub fn recent_files() -> &'static [FileRecord] {
    &RECENT_FILES
}

/// Look up a sample record by id.
pub fn find_file(id: u32) -> Option<&'static FileRecord> {
    RECENT_FILES.iter().find(|f| f.id == id)
}

/// Recent files matching the given status and media kind. `None` matches
/// everything.
pub fn filter_files(
    status: Option<FileStatus>,
    kind: Option<MediaKind>,
) -> impl Iterator<Item = &'static FileRecord> {
    RECENT_FILES.iter().filter(move |f| {
        status.map_or(true, |s| f.status == s) && kind.map_or(true, |k| f.kind == k)
    })
}

/// Weekly activity series fed to the chart.
pub fn activity_series() -> &'static [ActivityPoint] {
    &ACTIVITY
}

pub fn user_stats() -> &'static UserStats {
    &STATS
}

pub fn default_profile() -> UserProfile {
    UserProfile {
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
    }
}

pub fn upload_receipt() -> UploadReceipt {
    UploadReceipt {
        hash: UPLOAD_HASH.to_string(),
        transaction_id: UPLOAD_TRANSACTION_ID.to_string(),
    }
}
