/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Base URL used when there is no page origin to resolve endpoints against
    pub const FALLBACK_BASE_URL: &'static str = "http://localhost:8000";

    /// Delay before charts re-render after the window stops resizing
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;
}
