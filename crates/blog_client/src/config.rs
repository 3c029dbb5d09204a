use std::fs;

#[derive(Debug, Clone)]
pub struct Settings {
    /// Base URL of the blog API server, without the `/api/blogs` suffix.
    pub api_base_url: String,
    /// Cadence of the blog-list refresh poll.
    pub poll_interval_ms: u64,
    /// When true, failed writes (add/edit/delete/like) also set the view's
    /// status message instead of only logging.
    pub surface_write_errors: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:3000".into(),
            poll_interval_ms: 1000,
            surface_write_errors: false,
        }
    }
}

/// Layered settings: defaults, then `blogger.toml` in the working directory,
/// then `BLOGGER__*` environment variables.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("blogger.toml") {
        apply_file_config(&mut settings, &raw);
    }

    if let Ok(v) = std::env::var("BLOGGER__API_BASE_URL") {
        settings.api_base_url = v;
    }
    if let Ok(v) = std::env::var("BLOGGER__POLL_INTERVAL_MS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.poll_interval_ms = parsed;
        }
    }
    if let Ok(v) = std::env::var("BLOGGER__SURFACE_WRITE_ERRORS") {
        if let Ok(parsed) = v.parse::<bool>() {
            settings.surface_write_errors = parsed;
        }
    }

    settings
}

fn apply_file_config(settings: &mut Settings, raw: &str) {
    let Ok(file_cfg) = raw.parse::<toml::Value>() else {
        return;
    };
    if let Some(v) = file_cfg.get("api_base_url").and_then(|v| v.as_str()) {
        settings.api_base_url = v.to_string();
    }
    if let Some(v) = file_cfg.get("poll_interval_ms").and_then(|v| v.as_integer()) {
        if v > 0 {
            settings.poll_interval_ms = v as u64;
        }
    }
    if let Some(v) = file_cfg.get("surface_write_errors").and_then(|v| v.as_bool()) {
        settings.surface_write_errors = v;
    }
}
