//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod level_selector;
mod skill_editor;
mod skill_form;
mod skill_list;
mod tech_sphere;
mod theme_selector;

pub use delete_confirm_button::DeleteConfirmButton;
pub use level_selector::LevelSelector;
pub use skill_editor::SkillEditor;
pub use skill_form::SkillForm;
pub use skill_list::SkillList;
pub use tech_sphere::TechSphere;
pub use theme_selector::ThemeSelector;
