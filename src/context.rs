//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::commands::HttpApi;
use crate::config::AppConfig;

/// Widget-wide configuration and signals provided via context
#[derive(Clone, Copy)]
pub struct WidgetContext {
    /// Trigger to reload skills from the server - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload skills from the server - write
    set_reload_trigger: WriteSignal<u32>,
    config: StoredValue<AppConfig>,
    /// Names shown by the tech sphere, initially from the config
    pub technologies: RwSignal<Vec<String>>,
}

impl WidgetContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>), config: AppConfig) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            technologies: RwSignal::new(config.technologies.clone()),
            config: StoredValue::new(config),
        }
    }

    /// Trigger a reload of skills
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Replace the technology list; the sphere rebuilds from the new count
    pub fn update_technologies(&self, technologies: Vec<String>) {
        log::debug!("[SPHERE] {} technologies", technologies.len());
        self.technologies.set(technologies);
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// HTTP client bound to the configured API base
    pub fn api(&self) -> HttpApi {
        HttpApi::new(self.config())
    }
}

/// Get the widget context
pub fn use_widget_context() -> WidgetContext {
    expect_context::<WidgetContext>()
}
