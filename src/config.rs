//! Widget Configuration
//!
//! Read once at start-up from the host page. Every field is optional on the
//! page side; missing ones take the defaults below.

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::ConfigError;

/// Global the host page may define with overrides
const CONFIG_GLOBAL: &str = "cvWidgetsConfig";

/// Global the host page sets for logged-in users
const AUTH_GLOBAL: &str = "userIsAuthenticated";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Prefix of every REST endpoint
    pub api_base: String,
    /// Local storage key holding the theme
    pub theme_storage_key: String,
    pub log_level: String,
    pub sphere_radius: f64,
    /// Points shown when no technologies are given
    pub placeholder_points: usize,
    pub technologies: Vec<String>,
    #[serde(skip)]
    pub authenticated: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
            theme_storage_key: "theme".to_string(),
            log_level: "info".to_string(),
            sphere_radius: 2.0,
            placeholder_points: 20,
            technologies: Vec::new(),
            authenticated: false,
        }
    }
}

impl AppConfig {
    /// Load from `window.cvWidgetsConfig`, falling back to defaults.
    ///
    /// The authentication flag is read even when the config object is invalid,
    /// so the error carries nothing back; callers log it and use the defaults.
    pub fn from_window() -> (Self, Option<ConfigError>) {
        let Some(window) = web_sys::window() else {
            return (Self::default(), None);
        };
        let authenticated = js_sys::Reflect::get(&window, &JsValue::from_str(AUTH_GLOBAL))
            .map(|v| v.is_truthy())
            .unwrap_or(false);
        let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .unwrap_or(JsValue::UNDEFINED);

        let (mut config, err) = match Self::from_js(raw) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        };
        config.authenticated = authenticated;
        (config, err)
    }

    fn from_js(raw: JsValue) -> Result<Self, ConfigError> {
        if raw.is_undefined() || raw.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(raw).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Unparseable levels log at `Info`
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Join an endpoint path onto the API base: `api_url("skills/")` -> `/api/skills/`
    pub fn api_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Number of points the sphere shows for `count` technologies
    pub fn point_count(&self, count: usize) -> usize {
        if count == 0 {
            self.placeholder_points
        } else {
            count
        }
    }
}
