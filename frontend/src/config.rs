//! Application configuration.
//!
//! Static values for the FileChain frontend. Simulation timings live in
//! `filechain::SimulationConfig`; the browser uses its defaults.

/// Brand shown in the sidebar and the document title.
pub const APP_NAME: &str = "FileChain";

/// Avatar picture in the page header.
pub const AVATAR_URL: &str = "https://github.com/shadcn.png";

/// Initials shown when the avatar picture fails to load.
pub const AVATAR_FALLBACK: &str = "CN";

/// Height of the activity chart plot area, in pixels.
pub const CHART_HEIGHT: f64 = 300.0;

/// Width of the activity chart viewBox, in pixels.
pub const CHART_WIDTH: f64 = 640.0;

/// Bar colors of the activity chart.
pub const UPLOADS_COLOR: &str = "#8884d8";
pub const VERIFICATIONS_COLOR: &str = "#82ca9d";

/// Hint under the upload drop zone.
pub const UPLOAD_HINT: &str = "SVG, PNG, JPG or GIF (MAX. 800x400px)";
