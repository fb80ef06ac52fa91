use log::Level;

use crate::background::color::Rgb;

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug  // Verbose lifecycle logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

// Palette
pub const CHARCOAL: Rgb = Rgb::new(26, 26, 26);
pub const HUNTER_GREEN: Rgb = Rgb::new(44, 95, 77);

// Fluid background
pub const BLOB_COUNT: usize = 6;
pub const BLOB_MAX_SPEED: f64 = 0.08;
pub const BLOB_RADIUS_MIN: f64 = 200.0;
pub const BLOB_RADIUS_MAX: f64 = 500.0;
pub const BLOB_ALPHA: f64 = 0.35;
pub const CYCLE_SECONDS: f64 = 45.0;
pub const VIGNETTE_INNER_RATIO: f64 = 0.2;
pub const VIGNETTE_OUTER_RATIO: f64 = 0.7;
pub const VIGNETTE_ALPHA: f64 = 0.35;
pub const NOISE_MAX_VALUE: u8 = 15;
pub const NOISE_ALPHA: u8 = 13; // ~5% opacity

// Data ticker
pub const TICKER_ITEMS: [&str; 3] = [
    "Currently accepting 3 clients this quarter",
    "127% average conversion lift",
    "50+ brands transformed",
];
pub const TICKER_INTERVAL_MS: u32 = 2500;
pub const TICKER_SWAP_DELAY_MS: u32 = 250;

// Hero
pub const HEADLINE_LINES: [&str; 4] = ["We Engineer", "Attention,", "Emotion,", "Action."];
pub const HEADLINE_STAGGER_S: f64 = 0.8;
pub const SUBHEADLINE_EXTRA_DELAY_S: f64 = 1.2;
pub const CTA_EXTRA_DELAY_S: f64 = 1.8;
pub const PARALLAX_MAX_PX: f64 = 10.0;
pub const PARALLAX_DAMPING: f64 = 0.3;

// 3D scene
pub const SPLINE_SCENE_URL: &str = "https://prod.spline.design/Gt5HUob8aGDxOUep/scene.splinecode";
pub const SPLINE_VIEWER_SCRIPT_URL: &str =
    "https://unpkg.com/@splinetool/viewer@1.9.28/build/spline-viewer.js";
pub const SPLINE_VIEWER_TAG: &str = "spline-viewer";
