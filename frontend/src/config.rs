
#[cfg(debug_assertions)]
pub fn get_notify_endpoint() -> &'static str {
    "http://localhost:3001/notify"  // Local mock sink when running with trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_notify_endpoint() -> &'static str {
    "https://script.google.com/macros/s/AKfycbxr0OVWo1sb7jdVYoal8iYtZzC4L-aKyUW1ZvGQlvN3K00DN4dA825mqEMpOdxsgAe5Tw/exec"
}

pub const STORAGE_KEY: &str = "emailSubmissions";
pub const SOURCE_LABEL: &str = "NY Supreme Sportswear Landing Page";
pub const RATE_LIMIT_WINDOW_MS: i64 = 60_000;
pub const MAX_SUBMISSIONS: u32 = 3;

/// Knobs for the notify-me submission gate.
#[derive(Clone, Debug, PartialEq)]
pub struct GateConfig {
    pub endpoint: String,
    pub source: String,
    pub storage_key: String,
    pub window_ms: i64,
    pub max_submissions: u32,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            endpoint: get_notify_endpoint().to_string(),
            source: SOURCE_LABEL.to_string(),
            storage_key: STORAGE_KEY.to_string(),
            window_ms: RATE_LIMIT_WINDOW_MS,
            max_submissions: MAX_SUBMISSIONS,
        }
    }
}
