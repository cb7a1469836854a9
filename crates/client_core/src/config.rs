use std::{fs, path::Path, time::Duration};

use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const SETTINGS_FILE: &str = "abstract_viewer.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub api_base_url: String,
    pub request_timeout_secs: Option<u64>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            request_timeout_secs: None,
        }
    }
}

impl ClientSettings {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    pub fn with_api_base_url(mut self, api_base_url: impl AsRef<str>) -> Self {
        self.api_base_url = normalize_base_url(api_base_url.as_ref());
        self
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    api_base_url: Option<String>,
    request_timeout_secs: Option<u64>,
}

/// Defaults, then `abstract_viewer.toml` in the working directory, then the
/// environment.
pub fn load_settings() -> ClientSettings {
    let mut settings = ClientSettings::default();
    if let Ok(raw) = fs::read_to_string(Path::new(SETTINGS_FILE)) {
        apply_file_settings(&mut settings, &raw);
    }
    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    settings
}

fn apply_file_settings(settings: &mut ClientSettings, raw: &str) {
    match toml::from_str::<FileSettings>(raw) {
        Ok(file_cfg) => {
            if let Some(v) = file_cfg.api_base_url {
                settings.api_base_url = normalize_base_url(&v);
            }
            if let Some(v) = file_cfg.request_timeout_secs {
                settings.request_timeout_secs = Some(v);
            }
        }
        Err(err) => tracing::warn!("ignoring unreadable {SETTINGS_FILE}: {err}"),
    }
}

fn apply_env_overrides(settings: &mut ClientSettings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("ABSTRACT_API_URL") {
        settings.api_base_url = normalize_base_url(&v);
    }
    if let Some(v) = lookup("APP__API_BASE_URL") {
        settings.api_base_url = normalize_base_url(&v);
    }
    if let Some(v) = lookup("APP__REQUEST_TIMEOUT_SECS") {
        if let Ok(parsed) = v.trim().parse::<u64>() {
            settings.request_timeout_secs = Some(parsed);
        }
    }
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return DEFAULT_API_BASE_URL.to_string();
    }
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn strips_trailing_slashes_and_blank_falls_back() {
        assert_eq!(normalize_base_url(" http://host:9000/ "), "http://host:9000");
        assert_eq!(normalize_base_url("   "), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn file_settings_override_defaults() {
        let mut settings = ClientSettings::default();
        apply_file_settings(
            &mut settings,
            "api_base_url = \"http://summaries.local/\"\nrequest_timeout_secs = 30\n",
        );
        assert_eq!(settings.api_base_url, "http://summaries.local");
        assert_eq!(settings.request_timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn malformed_file_keeps_defaults() {
        let mut settings = ClientSettings::default();
        apply_file_settings(&mut settings, "api_base_url = [");
        assert_eq!(settings, ClientSettings::default());
    }

    #[test]
    fn app_prefixed_env_wins() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("ABSTRACT_API_URL", "http://first"),
            ("APP__API_BASE_URL", "http://second/"),
            ("APP__REQUEST_TIMEOUT_SECS", "nope"),
        ]);
        let mut settings = ClientSettings::default();
        apply_env_overrides(&mut settings, |name| env.get(name).map(|v| v.to_string()));
        assert_eq!(settings.api_base_url, "http://second");
        assert_eq!(settings.request_timeout_secs, None);
    }

    #[test]
    fn zero_timeout_means_transport_default() {
        let settings = ClientSettings {
            request_timeout_secs: Some(0),
            ..ClientSettings::default()
        };
        assert_eq!(settings.request_timeout(), None);
    }
}
