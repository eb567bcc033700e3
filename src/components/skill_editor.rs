//! Skill Editor Component
//!
//! Form plus reorderable list, synchronised with the skills endpoint.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::actions;
use crate::components::{SkillForm, SkillList};
use crate::context::use_widget_context;
use crate::error::EditorError;
use crate::store::EditorState;

/// Blocking browser alert
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[component]
pub fn SkillEditor() -> impl IntoView {
    let ctx = use_widget_context();
    let store = Store::new(EditorState::default());

    // Load skills on mount and on every reload request
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        log::debug!("[SKILLS] Loading skills, trigger={}", trigger);
        let api = ctx.api();
        spawn_local(async move {
            let _ = actions::load(&api, &store).await;
        });
    });

    let on_add = Callback::new(move |_: ()| {
        if let Err(e) = store.with_untracked(|s| s.draft()) {
            alert(&e.to_string());
            return;
        }
        let api = ctx.api();
        spawn_local(async move {
            let _ = actions::add(&api, &store).await;
        });
    });

    let on_save = Callback::new(move |_: ()| {
        if let Err(EditorError::Validation(e)) = store.with_untracked(|s| s.pending_update()) {
            alert(&e.to_string());
            return;
        }
        let api = ctx.api();
        spawn_local(async move {
            let _ = actions::save(&api, &store).await;
        });
    });

    let on_cancel = Callback::new(move |_: ()| store.update(|s| s.cancel_edit()));

    let on_edit = Callback::new(move |index: usize| {
        store.update(|s| {
            if let Err(e) = s.begin_edit(index) {
                log::warn!("[SKILLS] Cannot edit: {}", e);
            }
        });
    });

    let on_delete = Callback::new(move |index: usize| {
        let api = ctx.api();
        spawn_local(async move {
            let _ = actions::delete(&api, &store, index).await;
        });
    });

    let on_reorder = Callback::new(move |order: Vec<usize>| {
        let changed = store.try_update(|s| s.apply_order(&order)).unwrap_or_default();
        if changed.is_empty() {
            return;
        }
        log::info!("[SKILLS] Reordered, persisting {} skills", changed.len());
        let api = ctx.api();
        spawn_local(async move {
            if actions::persist_order(&api, changed).await > 0 {
                // Server copy may now differ from what is shown
                ctx.reload();
            }
        });
    });

    view! {
        <div class="bg-white dark:bg-gray-800 rounded-xl shadow-lg p-6">
            <h3 class="text-xl font-bold mb-4">"Skill editor"</h3>
            <SkillForm store=store on_add=on_add on_save=on_save on_cancel=on_cancel />
            <SkillList store=store on_edit=on_edit on_delete=on_delete on_reorder=on_reorder />
        </div>
    }
}
