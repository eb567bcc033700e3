//! Skill Editor State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All transitions
//! are plain methods on [`EditorState`] so they can be driven without a DOM.

use reactive_stores::Store;

use crate::error::{EditorError, ValidationError};
use crate::models::{Skill, SkillCategory, SkillDraft, DEFAULT_LEVEL, LEVELS};

/// Form field values
#[derive(Clone, Debug, PartialEq)]
pub struct SkillForm {
    pub name: String,
    pub category: SkillCategory,
    pub level: u8,
}

impl Default for SkillForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: SkillCategory::default(),
            level: DEFAULT_LEVEL,
        }
    }
}

impl SkillForm {
    fn from_skill(skill: &Skill) -> Self {
        Self {
            name: skill.name.clone(),
            category: skill.category,
            level: skill.level,
        }
    }

    pub fn set_level(&mut self, level: u8) {
        self.level = level.clamp(*LEVELS.start(), *LEVELS.end());
    }

    /// Trimmed name, or a validation error when blank
    fn validated_name(&self) -> Result<String, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(name.to_string())
    }
}

/// Whether the form creates a new skill or edits an existing one
#[derive(Clone, Debug, Default, PartialEq)]
pub enum EditMode {
    #[default]
    Viewing,
    Editing {
        index: usize,
        original: Skill,
    },
}

/// Skill editor state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct EditorState {
    /// Skills in display order
    pub skills: Vec<Skill>,
    pub mode: EditMode,
    pub form: SkillForm,
}

/// Type alias for the store
pub type EditorStore = Store<EditorState>;

impl EditorState {
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditMode::Editing { .. })
    }

    pub fn replace_skills(&mut self, skills: Vec<Skill>) {
        self.skills = skills;
        if let EditMode::Editing { index, .. } = self.mode {
            if index >= self.skills.len() {
                self.cancel_edit();
            }
        }
    }

    /// Create-request body from the form
    pub fn draft(&self) -> Result<SkillDraft, ValidationError> {
        Ok(SkillDraft {
            name: self.form.validated_name()?,
            category: self.form.category,
            level: self.form.level,
        })
    }

    /// Append a skill returned by the server and clear the form
    pub fn commit_created(&mut self, skill: Skill) {
        self.skills.push(skill);
        self.form = SkillForm::default();
    }

    /// Enter edit mode for `index`, replacing any edit in progress
    pub fn begin_edit(&mut self, index: usize) -> Result<(), EditorError> {
        let skill = self.skills.get(index).ok_or(EditorError::NoSuchSkill(index))?;
        self.form = SkillForm::from_skill(skill);
        self.mode = EditMode::Editing {
            index,
            original: skill.clone(),
        };
        Ok(())
    }

    /// Full updated representation of the skill being edited
    pub fn pending_update(&self) -> Result<Skill, EditorError> {
        let EditMode::Editing { original, .. } = &self.mode else {
            return Err(EditorError::NotEditing);
        };
        Ok(Skill {
            name: self.form.validated_name()?,
            category: self.form.category,
            level: self.form.level,
            ..original.clone()
        })
    }

    /// Put a saved skill back in place.
    ///
    /// Rows can move or disappear while the request is in flight, so the
    /// target is found by id and the local position is kept. Edit mode ends
    /// only if it still targets the saved skill.
    pub fn commit_saved(&mut self, saved: Skill) {
        let Some(id) = saved.id else {
            return;
        };
        if let Some(slot) = self.skills.iter_mut().find(|s| s.id == Some(id)) {
            let order = slot.order;
            *slot = Skill { order, ..saved };
        }
        let editing_saved =
            matches!(&self.mode, EditMode::Editing { original, .. } if original.id == Some(id));
        if editing_saved {
            self.cancel_edit();
        }
    }

    pub fn cancel_edit(&mut self) {
        self.mode = EditMode::Viewing;
        self.form = SkillForm::default();
    }

    /// Remove a skill after the server confirmed the delete
    pub fn commit_deleted(&mut self, id: u32) {
        let Some(removed) = self.skills.iter().position(|s| s.id == Some(id)) else {
            return;
        };
        self.skills.remove(removed);

        let edited_removed = match &mut self.mode {
            EditMode::Editing { index, .. } if *index == removed => true,
            EditMode::Editing { index, .. } if *index > removed => {
                *index -= 1;
                false
            }
            _ => false,
        };
        if edited_removed {
            self.cancel_edit();
        }
    }

    /// Apply a drag order (committed indices in display order).
    ///
    /// Every skill gets its position as `order`; the ones whose order changed
    /// are returned for persisting. Orders that are not a permutation of the
    /// current indices are ignored.
    pub fn apply_order(&mut self, order: &[usize]) -> Vec<Skill> {
        if !is_permutation(order, self.skills.len()) {
            return Vec::new();
        }

        let previous = std::mem::take(&mut self.skills);
        let mut changed = Vec::new();
        for (position, &from) in order.iter().enumerate() {
            let mut skill = previous[from].clone();
            let position = position as i32;
            if skill.order != Some(position) {
                skill.order = Some(position);
                changed.push(skill.clone());
            }
            self.skills.push(skill);
        }

        if let EditMode::Editing { index, original } = &mut self.mode {
            if let Some(moved_to) = order.iter().position(|&from| from == *index) {
                *index = moved_to;
                original.order = Some(moved_to as i32);
            }
        }
        changed
    }
}

fn is_permutation(order: &[usize], len: usize) -> bool {
    if order.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    order.iter().all(|&i| i < len && !std::mem::replace(&mut seen[i], true))
}
