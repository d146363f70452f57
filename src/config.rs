/// Fixed asset paths served next to the bundle.
pub const LOGO_PATH: &str = "/assets/lmk-logo.png";
pub const HERO_BACKDROP_PATH: &str = "/assets/hero-grid.png";

/// Scroll offset (px) past which the fixed nav switches to its solid treatment.
pub const NAV_SOLID_SCROLL_PX: i32 = 50;

/// Simulated backend round trip for the contact form.
pub const SUBMIT_ROUND_TRIP_MS: u32 = 1_500;

/// How long the "message sent" banner stays up before the form resets.
pub const SUCCESS_BANNER_MS: u32 = 5_000;
