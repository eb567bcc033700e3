//! Level Selector Component
//!
//! One round button per skill level.

use leptos::prelude::*;

use crate::models::LEVELS;

/// Level buttons, the current one highlighted
#[component]
pub fn LevelSelector(
    #[prop(into)] current: Signal<u8>,
    on_change: impl Fn(u8) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="flex items-center">
            {LEVELS.map(|level| {
                let is_selected = move || current.get() == level;
                view! {
                    <button
                        type="button"
                        data-level=level.to_string()
                        class=move || {
                            if is_selected() {
                                "level-btn w-8 h-8 rounded-full border mx-1 bg-blue-500 text-white"
                            } else {
                                "level-btn w-8 h-8 rounded-full border mx-1 bg-gray-100 dark:bg-gray-700"
                            }
                        }
                        on:click=move |_| on_change(level)
                    >
                        {level}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
