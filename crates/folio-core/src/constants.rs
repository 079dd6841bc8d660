/// Scene tuning constants.
///
/// These express intended behavior (easing rates, thresholds, clamp limits)
/// and keep magic numbers out of the engine code. Per-viewport values live in
/// `viewport.rs` instead.
use glam::Vec3;

// Easing rates per 60 Hz reference frame
pub const FOCUS_EASE_RATE: f32 = 0.25; // focused regime: snappy
pub const AMBIENT_EASE_RATE: f32 = 0.10; // peers and idle: languid
pub const OPACITY_EASE_RATE: f32 = 0.10;
pub const CAPTION_EASE_RATE: f32 = 0.10;
pub const REFERENCE_FRAME_SEC: f32 = 1.0 / 60.0;

// Opacity targets
pub const OPACITY_FULL: f32 = 1.0;
pub const OPACITY_DIMMED: f32 = 0.3; // peers while another item is focused

// Ambient breathing
pub const BREATH_FREQUENCY: f32 = 0.5; // radians per second
pub const BREATH_AMPLITUDE: f32 = 0.1;

// Parallax
pub const PARALLAX_DEPTH_OFFSET: f32 = 5.0;
pub const PARALLAX_DEPTH_GAIN: f32 = 0.02;
pub const SCROLL_PARALLAX_GAIN: f32 = 0.3; // scroll accumulator weight relative to pointer
pub const WHEEL_GAIN: f32 = 0.01; // wheel pixels to accumulator units
pub const SCROLL_CLAMP: f32 = 5.0;
pub const SCROLL_DECAY_PER_FRAME: f32 = 0.92;
pub const SCROLL_SNAP_EPSILON: f32 = 1e-3;

// Connectivity
pub const LINK_DISTANCE_THRESHOLD: f32 = 16.0;

// Peer arc
pub const PEER_ARC_SPAN: f32 = 1.2 * std::f32::consts::PI;
pub const PEER_JITTER: f32 = 0.5; // radius jitter half-range
pub const PEER_ARC_HEIGHT_DIVISOR: f32 = 3.0;
pub const PEER_ARC_DEPTH: f32 = 3.0;

// Layout
pub const LAYOUT_Y_SQUASH: f32 = 0.8;
pub const SEED_BUMP_MIN: f32 = 0.1;
pub const SEED_BUMP_SPAN: f32 = 0.1;

// Item geometry (world units before scale)
pub const PLANE_HEIGHT: f32 = 3.5;
pub const DEFAULT_ASPECT: f32 = 16.0 / 9.0;
pub const FOCUS_FALLBACK_SCALE: f32 = 1.5;

// Flash transition and caption typewriter
pub const FLASH_DURATION_SEC: f64 = 0.2;
pub const REVEAL_CHAR_INTERVAL_SEC: f32 = 0.02;

// Camera
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 0.0, 15.0);
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Viewport classification
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;
