//! Prayer-service API key. Supplied by the environment, never compiled in as a literal.
use {std::fmt, thiserror::Error};

/// Environment variable holding the key, read at run time and at build time.
pub const API_KEY_ENV: &str = "PRAYER_API_KEY";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("PRAYER_API_KEY is not set")]
    MissingApiKey,
}

#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Run-time environment first (native), then the value captured when the crate was
    /// built (the only source in the browser).
    pub fn from_env() -> Result<Self, ConfigError> {
        #[cfg(not(target_arch = "wasm32"))]
        let runtime = std::env::var(API_KEY_ENV).ok();
        #[cfg(target_arch = "wasm32")]
        let runtime: Option<String> = None;

        Self::resolve(runtime, option_env!("PRAYER_API_KEY"))
    }

    pub(crate) fn resolve(
        runtime: Option<String>,
        build_time: Option<&str>,
    ) -> Result<Self, ConfigError> {
        runtime
            .filter(|k| !k.trim().is_empty())
            .or_else(|| {
                build_time
                    .filter(|k| !k.trim().is_empty())
                    .map(str::to_owned)
            })
            .map(|k| Self(k.trim().to_owned()))
            .ok_or(ConfigError::MissingApiKey)
    }

    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        Self::resolve(Some(key.into()), None)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

// Keeps the key out of logs and panic messages.
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}
