//! Skill Form Component
//!
//! Name, category and level inputs. The primary action is Add while viewing
//! and Save/Cancel while editing.

use leptos::prelude::*;

use crate::components::LevelSelector;
use crate::models::SkillCategory;
use crate::store::{EditMode, EditorStateStoreFields, EditorStore};

const INPUT_CLASS: &str = "p-2 border rounded dark:bg-gray-700";

#[component]
pub fn SkillForm(
    store: EditorStore,
    on_add: Callback<()>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_editing = move || store.mode().with(|mode| matches!(mode, EditMode::Editing { .. }));

    view! {
        <div class="mb-6 p-4 border border-dashed border-gray-300 dark:border-gray-700 rounded-lg">
            <h4 class="font-semibold mb-3">
                {move || if is_editing() { "Edit skill" } else { "Add skill" }}
            </h4>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <input
                    type="text"
                    id="skill-name"
                    class=INPUT_CLASS
                    placeholder="Skill name"
                    prop:value=move || store.form().with(|form| form.name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        store.form().update(|form| form.name = value);
                    }
                />

                <select
                    id="skill-category"
                    class=INPUT_CLASS
                    prop:value=move || store.form().with(|form| form.category.as_str())
                    on:change=move |ev| {
                        let category = SkillCategory::from_str(&event_target_value(&ev));
                        store.form().update(|form| form.category = category);
                    }
                >
                    {SkillCategory::ALL.iter().map(|category| view! {
                        <option value=category.as_str()>{category.label()}</option>
                    }).collect_view()}
                </select>

                <div class="flex items-center gap-2">
                    <span>"Level:"</span>
                    <LevelSelector
                        current=Signal::derive(move || store.form().with(|form| form.level))
                        on_change=move |level| store.form().update(|form| form.set_level(level))
                    />
                </div>
            </div>

            <div class="mt-4 flex gap-2">
                <Show
                    when=move || !is_editing()
                    fallback=move || view! {
                        <button
                            id="save-skill-btn"
                            class="px-4 py-2 bg-blue-500 text-white rounded hover:bg-blue-600"
                            on:click=move |_| on_save.run(())
                        >
                            "Save"
                        </button>
                        <button
                            class="px-4 py-2 bg-gray-300 rounded hover:bg-gray-400"
                            on:click=move |_| on_cancel.run(())
                        >
                            "Cancel"
                        </button>
                    }
                >
                    <button
                        id="add-skill-btn"
                        class="px-4 py-2 bg-green-500 text-white rounded hover:bg-green-600"
                        on:click=move |_| on_add.run(())
                    >
                        "Add"
                    </button>
                </Show>
            </div>
        </div>
    }
}
