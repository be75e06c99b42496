//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log each outbound request (host and path only; query strings carry the API key).
    pub log_http_requests: bool,

    /// Log every accepted orientation event. Very chatty on phones.
    pub log_orientation_events: bool,

    /// Startup stage transitions (locating, fetching, finished).
    pub log_startup_stages: bool,

    pub log_state_transitions: bool,
}

pub const DF: LogFlags = LogFlags {
    log_startup_stages: true,
    log_state_transitions: true,

    log_http_requests: false,
    log_orientation_events: false,
};
