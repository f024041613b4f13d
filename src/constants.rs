// Page contract: element ids, selectors and timings the web front-end expects.

// Canvases (one particle field each)
pub const BG_CANVAS_ID: &str = "bg-canvas";
pub const WAVE_CANVAS_ID: &str = "wave-canvas";
pub const TRAIL_CANVAS_ID: &str = "trail-canvas";

// Cursor
pub const CURSOR_DOT_ID: &str = "cursor-dot";
pub const CURSOR_RING_ID: &str = "cursor-ring";
pub const INTERACTIVE_SELECTOR: &str = "a, button, [data-cursor-hover]";

// Pointer-driven elements
pub const MAGNETIC_SELECTOR: &str = "[data-magnetic]";
pub const TILT_SELECTOR: &str = "[data-tilt]";
pub const PARALLAX_SELECTOR: &str = "[data-parallax]";
pub const PARALLAX_SPEED_ATTR: &str = "data-parallax";
pub const COUNT_ATTR: &str = "data-count";
pub const MAX_PARTICLE_OVERRIDE: usize = 500;

// Contact form
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_STATUS_ID: &str = "contact-status";
pub const CONTACT_EVENT: &str = "folio:contact";
pub const CONTACT_LIMIT_KEY: &str = "contact-form";

// Analytics
pub const ANALYTICS_META_SELECTOR: &str = "meta[name=analytics-id]";
pub const ANALYTICS_POLL_MS: i32 = 250;

// Media queries
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const COARSE_POINTER_QUERY: &str = "(pointer: coarse)";
