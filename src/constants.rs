/// Caption on a collapsed card's toggle button.
pub const CAPTION_COLLAPSED: &str = "Show details";

/// Caption on an expanded card's toggle button.
pub const CAPTION_EXPANDED: &str = "Hide details";

/// Pagination escape link that performs plain navigation instead of
/// tab switching.
pub const HOME_LABEL: &str = "HOME";

/// Where the HOME link points in the rendered demo shell.
pub const HOME_HREF: &str = "index.html";

// ============================================================================
// Deep-Link Scroll Offset
// ============================================================================

/// Base upward offset compensating for the fixed page header, in pixels.
pub const BASE_Y_OFFSET: f64 = -120.0;

/// Fraction of the viewport height folded into the scroll offset.
pub const VIEWPORT_SCALE: f64 = 0.05;

/// Viewport height assumed when the embedder supplies no measurement.
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 900.0;

// ============================================================================
// Defaults
// ============================================================================

/// Dataset location used when neither config nor CLI overrides it.
pub const DEFAULT_DATA_PATH: &str = "course.json";

/// Config file probed at startup; absent means defaults.
pub const DEFAULT_CONFIG_PATH: &str = "coursepage.toml";
