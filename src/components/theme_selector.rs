//! Theme Selector Component
//!
//! Floating panel with one button per theme.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_widget_context;
use crate::models::Theme;
use crate::theme::{apply_document_class, sync_theme, LocalStorage, SyncStatus, SyncTracker, ThemeController};

/// How long the "saved" note stays visible
const SYNCED_NOTE_MS: u32 = 2000;

fn sync_note(status: &SyncStatus) -> Option<(&'static str, String)> {
    match status {
        SyncStatus::Idle => None,
        SyncStatus::Pending => Some(("text-xs mt-2 text-gray-500", "Saving…".to_string())),
        SyncStatus::Synced => Some(("text-xs mt-2 text-green-600", "Saved to profile".to_string())),
        SyncStatus::Failed(reason) => Some(("text-xs mt-2 text-red-600", format!("Not saved: {}", reason))),
    }
}

#[component]
pub fn ThemeSelector() -> impl IntoView {
    let ctx = use_widget_context();
    let config = ctx.config();
    let authenticated = config.authenticated;

    let controller = StoredValue::new(ThemeController::new(LocalStorage, config.theme_storage_key));
    let initial = controller.with_value(|c| c.current().clone());
    // Local preference wins on load; the server is never read back
    apply_document_class(&initial);
    let (current, set_current) = signal(initial);
    let (sync_status, set_sync_status) = signal(SyncStatus::Idle);
    let tracker = StoredValue::new(SyncTracker::default());
    let is_current = move |ticket: u32| tracker.try_with_value(|t| t.is_current(ticket)).unwrap_or(false);

    let apply_theme = move |theme: Theme| {
        let Some(applied) = controller.try_update_value(|c| c.apply(theme).clone()) else {
            return;
        };
        apply_document_class(&applied);
        set_current.set(applied.clone());
        log::info!("[THEME] Applied {}", applied.as_str());

        if !authenticated {
            return;
        }
        let Some(ticket) = tracker.try_update_value(|t| t.begin()) else {
            return;
        };
        set_sync_status.set(SyncStatus::Pending);
        let api = ctx.api();
        spawn_local(async move {
            let status = sync_theme(&api, &applied).await;
            if !is_current(ticket) {
                log::debug!("[THEME] Dropping result for superseded {}", applied.as_str());
                return;
            }
            let synced = status == SyncStatus::Synced;
            set_sync_status.set(status);
            if synced {
                TimeoutFuture::new(SYNCED_NOTE_MS).await;
                if is_current(ticket) {
                    set_sync_status.set(SyncStatus::Idle);
                }
            }
        });
    };

    view! {
        <div class="theme-selector fixed bottom-4 right-4 z-50">
            <div class="bg-white dark:bg-gray-800 rounded-lg shadow-xl p-4">
                <h4 class="font-bold mb-3">"Theme"</h4>
                <div class="grid grid-cols-2 gap-2">
                    {Theme::ALL.into_iter().map(|theme| {
                        let label = theme.label();
                        let swatch = format!("w-6 h-6 rounded {}", theme.swatch_class());
                        let id = theme.as_str().to_string();
                        let selected = theme.clone();
                        let is_active = move || current.with(|c| *c == selected);
                        view! {
                            <button
                                class=move || {
                                    if is_active() {
                                        "theme-btn p-3 rounded border ring-2 ring-blue-500"
                                    } else {
                                        "theme-btn p-3 rounded border"
                                    }
                                }
                                data-theme=id
                                on:click=move |_| apply_theme(theme.clone())
                            >
                                <div class=swatch></div>
                                <span class="text-xs mt-1">{label}</span>
                            </button>
                        }
                    }).collect_view()}
                </div>
                {move || sync_status.with(sync_note).map(|(class, text)| view! {
                    <p class=class>{text}</p>
                })}
            </div>
        </div>
    }
}
