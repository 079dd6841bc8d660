/// Presentation constants for the web front-end.
///
/// Motion and layout tuning lives in `folio_core::constants`; this module only
/// holds what the page and the GPU pipelines need.

// Page element ids
pub const CANVAS_ID: &str = "app-canvas";
pub const CANVAS_CONTAINER_ID: &str = "canvas-container";
pub const MEDIA_DATA_ID: &str = "media-data";
pub const CAPTION_ID: &str = "video-caption";
pub const FLASH_OVERLAY_ID: &str = "flash-overlay";
pub const ABOUT_MODAL_ID: &str = "about-modal";
pub const CONTACT_MODAL_ID: &str = "contact-modal";
pub const NAV_ABOUT_ID: &str = "nav-about";
pub const NAV_CONTACT_ID: &str = "nav-contact";
pub const ABOUT_CLOSE_ID: &str = "about-close";
pub const CONTACT_CLOSE_ID: &str = "contact-close";

// CSS classes toggled on page elements
pub const HIDDEN_CLASS: &str = "hidden";
pub const BLURRED_CLASS: &str = "blurred";
pub const FLASH_ACTIVE_CLASS: &str = "active";

// Background clear color (linear RGBA)
pub const CLEAR_COLOR: [f64; 4] = [0.02, 0.02, 0.04, 1.0];

// Tile tints, cycled by item index. Stand-ins for the video frames.
pub const TILE_PALETTE: [[f32; 3]; 6] = [
    [0.85, 0.33, 0.31],
    [0.95, 0.70, 0.30],
    [0.40, 0.75, 0.55],
    [0.30, 0.60, 0.90],
    [0.60, 0.45, 0.85],
    [0.90, 0.55, 0.75],
];

// How far tiles wash toward white while the flash is active
pub const FLASH_TILE_MIX: f32 = 0.35;

// Connection lines: white at 20% alpha
pub const LINE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.2];

// GPU buffer capacities; larger scenes are truncated with a warning
pub const MAX_TILE_INSTANCES: usize = 64;
pub const MAX_LINE_SEGMENTS: usize = MAX_TILE_INSTANCES * (MAX_TILE_INSTANCES - 1) / 2;

// Caption overlay below this opacity is hidden outright
pub const CAPTION_HIDE_EPSILON: f32 = 0.01;

// Frame clock: clamp long stalls (tab switches) to a few frames
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// Fallback scene seed when the platform has no entropy source
pub const FALLBACK_RNG_SEED: u64 = 42;
