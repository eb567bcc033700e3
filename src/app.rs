//! CV Widgets App
//!
//! Mounts the skill editor, the tech sphere and the theme selector.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::{SkillEditor, TechSphere, ThemeSelector};
use crate::config::AppConfig;
use crate::context::WidgetContext;

/// Window event the host page dispatches with a string array as `detail`
/// to change the sphere's technologies
pub const TECHNOLOGIES_EVENT: &str = "cv-widgets:technologies";

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = WidgetContext::new((reload_trigger, set_reload_trigger), config);

    // Provide context to all children
    provide_context(ctx);

    let handle = window_event_listener_untyped(TECHNOLOGIES_EVENT, move |ev| {
        let Ok(ev) = ev.dyn_into::<web_sys::CustomEvent>() else {
            return;
        };
        match serde_wasm_bindgen::from_value::<Vec<String>>(ev.detail()) {
            Ok(technologies) => ctx.update_technologies(technologies),
            Err(e) => log::warn!("[SPHERE] Ignoring {}: {}", TECHNOLOGIES_EVENT, e),
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="cv-widgets space-y-8">
            <SkillEditor />
            <TechSphere technologies=ctx.technologies />
            <ThemeSelector />
        </div>
    }
}
