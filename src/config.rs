/// Configuration constants for the application
pub struct Config;

impl Config {
    /// API base used when the page URL carries no `api` parameter
    pub const DEFAULT_API_BASE: &'static str = "http://localhost:5000";

    /// Lifetime of a cached API response in seconds
    pub const CACHE_TTL_SECS: i64 = 15;

    /// Row cap sent with every history request
    pub const HISTORY_LIMIT: u32 = 10_000;

    /// Enable automatic data refresh polling
    pub const ENABLE_AUTO_REFRESH: bool = true;

    /// Polling interval in milliseconds (matches the cache lifetime)
    pub const POLLING_INTERVAL_MS: u32 = 15_000;

    /// Seconds between language switches while the slideshow runs
    pub const SLIDESHOW_INTERVAL_SECS: i64 = 10;

    /// How often the slideshow clock is checked
    pub const SLIDESHOW_TICK_MS: u32 = 1_000;

    /// Key under which the view state lives in sessionStorage
    pub const SESSION_KEY: &'static str = "pv-dashboard.view";

    pub const LOGO_PATH: &'static str = "static/logo.png";
    pub const LOGO_TEXT_PATH: &'static str = "static/logo_text.jpg";

    pub const PANEL_IMAGE_URL: &'static str =
        "https://raw.githubusercontent.com/hfg-gmuend/openmoji/master/color/svg/1F5FB.svg";
    pub const INVERTER_IMAGE_URL: &'static str =
        "https://raw.githubusercontent.com/hfg-gmuend/openmoji/master/color/svg/1F50C.svg";

    /// Seed for the placeholder power series shown when readings carry no power
    pub const PLACEHOLDER_SEED: u64 = 42;

    /// Income tile value. Not computed from readings.
    pub const INCOME_PLACEHOLDER: &'static str = "€123";
}
