//! Skill List Component
//!
//! Reorderable skill rows. Uses leptos-dragdrop: rows are rendered in the
//! drag preview order and the order is committed on drop.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::DeleteConfirmButton;
use crate::models::Skill;
use crate::store::{EditorStateStoreFields, EditorStore};

/// Skill list with DnD support
#[component]
pub fn SkillList(
    store: EditorStore,
    on_edit: Callback<usize>,
    on_delete: Callback<usize>,
    on_reorder: Callback<Vec<usize>>,
) -> impl IntoView {
    let sort = create_sort_signals();

    // Any change to the list drops the preview
    Effect::new(move |_| {
        let len = store.skills().with(|skills| skills.len());
        sort.reset(len);
    });

    let on_dragover = make_on_dragover(sort);
    let on_drop = make_on_drop(sort, move |order| on_reorder.run(order));

    let rows = move || {
        let order = sort.order_read.get();
        store.skills().with(|skills| {
            let order = if order.len() == skills.len() { order } else { identity_order(skills.len()) };
            order
                .into_iter()
                .filter_map(|index| skills.get(index).map(|skill| (index, skill.clone())))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div id="skills-list" class="space-y-3" on:dragover=on_dragover on:drop=on_drop>
            <For
                each=rows
                key=|(index, skill)| (*index, skill.id, skill.name.clone(), skill.category, skill.level)
                children=move |(index, skill)| view! {
                    <SkillRow index=index skill=skill sort=sort on_edit=on_edit on_delete=on_delete />
                }
            />
            <Show when=move || store.skills().with(|skills| skills.is_empty())>
                <p class="text-sm text-gray-500">"No skills yet."</p>
            </Show>
        </div>
    }
}

/// A single draggable skill row
#[component]
fn SkillRow(
    index: usize,
    skill: Skill,
    sort: SortSignals,
    on_edit: Callback<usize>,
    on_delete: Callback<usize>,
) -> impl IntoView {
    let on_dragstart = make_on_dragstart(sort, index);
    let on_dragend = make_on_dragend(sort);

    let row_class = move || {
        let mut c = String::from("skill-item flex items-center justify-between p-3 bg-gray-50 dark:bg-gray-900 rounded-lg");
        if sort.is_dragging(index) { c.push_str(" opacity-50 dragging"); }
        c
    };
    let details = format!("{} • Level {}/5", skill.category_label(), skill.level);
    let name = skill.name;

    view! {
        <div
            class=row_class
            draggable="true"
            data-sort-key=index.to_string()
            on:dragstart=on_dragstart
            on:dragend=on_dragend
        >
            <div class="flex items-center gap-4">
                <div class="drag-handle cursor-move text-gray-400">"⋮⋮"</div>
                <div>
                    <div class="font-medium">{name.clone()}</div>
                    <div class="text-sm text-gray-500">{details}</div>
                </div>
            </div>
            <div class="flex gap-2">
                <button
                    class="edit-btn px-3 py-1 bg-yellow-500 text-white rounded text-sm"
                    title="Edit"
                    on:click=move |_| on_edit.run(index)
                >
                    "✏️"
                </button>
                <DeleteConfirmButton
                    button_class="delete-btn px-3 py-1 bg-red-500 text-white rounded text-sm"
                    subject=name.clone()
                    on_confirm=move |_| on_delete.run(index)
                />
            </div>
        </div>
    }
}
