use std::sync::OnceLock;

/// Server configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Session lifetime in hours before an idle session is rejected.
    pub session_ttl_hours: i64,
    /// Whether the in-memory store is seeded with demo data on startup.
    pub seed_demo_data: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            session_ttl_hours: 12,
            seed_demo_data: true,
        }
    }
}

static CONFIG: OnceLock<ServerConfig> = OnceLock::new();

/// Read configuration from the environment and store it in the global
/// `OnceLock`. Safe to call multiple times — only the first call has effect.
///
/// Recognized variables:
///   - `STUDYHUB_SESSION_TTL_HOURS` — session lifetime (default 12)
///   - `STUDYHUB_SEED_DEMO` — seed demo users/courses (default true)
pub fn load_config() {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();

        let defaults = ServerConfig::default();
        let session_ttl_hours = std::env::var("STUDYHUB_SESSION_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.session_ttl_hours);
        let seed_demo_data = std::env::var("STUDYHUB_SEED_DEMO")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.seed_demo_data);

        let config = ServerConfig {
            session_ttl_hours,
            seed_demo_data,
        };
        tracing::info!(?config, "server configuration loaded");
        config
    });
}

/// Get the loaded configuration. Returns defaults if `load_config()`
/// hasn't been called yet (safe fallback).
pub fn config() -> ServerConfig {
    CONFIG.get().cloned().unwrap_or_default()
}
