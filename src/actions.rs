//! Skill Editor Actions
//!
//! Async flows pairing an API call with a state transition. State is only
//! touched before the request (to read the form) and after the response, so
//! nothing is borrowed across an await.

use std::cell::RefCell;

use leptos::prelude::*;

use crate::commands::SkillApi;
use crate::error::{ApiError, EditorError};
use crate::models::Skill;
use crate::store::{EditorState, EditorStore};

/// Access to the editor state from async code
pub trait EditorHandle {
    fn read<R>(&self, f: impl FnOnce(&EditorState) -> R) -> R;
    fn write<R>(&self, f: impl FnOnce(&mut EditorState) -> R) -> Option<R>;
}

impl EditorHandle for EditorStore {
    fn read<R>(&self, f: impl FnOnce(&EditorState) -> R) -> R {
        self.with_untracked(f)
    }

    fn write<R>(&self, f: impl FnOnce(&mut EditorState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl EditorHandle for RefCell<EditorState> {
    fn read<R>(&self, f: impl FnOnce(&EditorState) -> R) -> R {
        f(&self.borrow())
    }

    fn write<R>(&self, f: impl FnOnce(&mut EditorState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Replace the list with the server's collection
pub async fn load<A, H>(api: &A, state: &H) -> Result<usize, EditorError>
where
    A: SkillApi + ?Sized,
    H: EditorHandle,
{
    match api.list_skills().await {
        Ok(skills) => {
            let count = skills.len();
            state.write(|s| s.replace_skills(skills));
            log::info!("[SKILLS] Loaded {} skills", count);
            Ok(count)
        }
        Err(e) => {
            log::error!("[SKILLS] Error loading skills: {}", e);
            Err(e.into())
        }
    }
}

/// Create a skill from the form. Validation runs before any request.
pub async fn add<A, H>(api: &A, state: &H) -> Result<Skill, EditorError>
where
    A: SkillApi + ?Sized,
    H: EditorHandle,
{
    let draft = state.read(|s| s.draft())?;
    match api.create_skill(&draft).await {
        Ok(created) => {
            log::info!("[SKILLS] Added {:?} (id {:?})", created.name, created.id);
            state.write(|s| s.commit_created(created.clone()));
            Ok(created)
        }
        Err(e) => {
            log::error!("[SKILLS] Error adding skill: {}", e);
            Err(e.into())
        }
    }
}

/// Submit the skill being edited
pub async fn save<A, H>(api: &A, state: &H) -> Result<Skill, EditorError>
where
    A: SkillApi + ?Sized,
    H: EditorHandle,
{
    let updated = state.read(|s| s.pending_update())?;
    match api.update_skill(&updated).await {
        Ok(saved) => {
            log::info!("[SKILLS] Saved {:?} (id {:?})", saved.name, saved.id);
            state.write(|s| s.commit_saved(saved.clone()));
            Ok(saved)
        }
        Err(e) => {
            log::error!("[SKILLS] Error saving skill: {}", e);
            Err(e.into())
        }
    }
}

/// Delete the skill at `index`. The list changes only on an OK response.
pub async fn delete<A, H>(api: &A, state: &H, index: usize) -> Result<(), EditorError>
where
    A: SkillApi + ?Sized,
    H: EditorHandle,
{
    let skill = state
        .read(|s| s.skills.get(index).cloned())
        .ok_or(EditorError::NoSuchSkill(index))?;
    let id = skill.id.ok_or(ApiError::MissingId)?;

    match api.delete_skill(id).await {
        Ok(()) => {
            log::info!("[SKILLS] Deleted {:?}", skill.name);
            state.write(|s| s.commit_deleted(id));
            Ok(())
        }
        Err(e) => {
            log::error!("[SKILLS] Error deleting skill: {}", e);
            Err(e.into())
        }
    }
}

/// Write new display orders back, best effort. Returns the number of failures.
pub async fn persist_order<A>(api: &A, changed: Vec<Skill>) -> usize
where
    A: SkillApi + ?Sized,
{
    let mut failures = 0;
    for skill in &changed {
        if let Err(e) = api.update_skill(skill).await {
            log::error!("[SKILLS] Error saving order of {:?}: {}", skill.name, e);
            failures += 1;
        }
    }
    log::debug!("[SKILLS] Persisted order of {} skills, {} failed", changed.len(), failures);
    failures
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::models::SkillDraft;
    use crate::store::tests::make_skill;
    use async_trait::async_trait;
    use std::cell::Cell;
    use std::rc::Rc;

    /// In-memory stand-in for the REST API
    #[derive(Default)]
    struct FakeApi {
        skills: RefCell<Vec<Skill>>,
        next_id: Cell<u32>,
        requests: Cell<usize>,
        fail_with: Cell<Option<u16>>,
        /// Runs while an update is "on the wire"
        during_update: RefCell<Option<Box<dyn FnOnce()>>>,
    }

    impl FakeApi {
        fn with_skills(skills: Vec<Skill>) -> Self {
            let api = Self::default();
            api.next_id.set(100);
            *api.skills.borrow_mut() = skills;
            api
        }

        fn respond(&self) -> Result<(), ApiError> {
            self.requests.set(self.requests.get() + 1);
            match self.fail_with.get() {
                Some(status) => Err(ApiError::Status(status)),
                None => Ok(()),
            }
        }
    }

    #[async_trait(?Send)]
    impl SkillApi for FakeApi {
        async fn list_skills(&self) -> Result<Vec<Skill>, ApiError> {
            self.respond()?;
            Ok(self.skills.borrow().clone())
        }

        async fn create_skill(&self, draft: &SkillDraft) -> Result<Skill, ApiError> {
            self.respond()?;
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            let skill = Skill {
                id: Some(id),
                name: draft.name.clone(),
                category: draft.category,
                level: draft.level,
                order: None,
                category_display: Some(draft.category.label().to_string()),
                created_at: None,
            };
            self.skills.borrow_mut().push(skill.clone());
            Ok(skill)
        }

        async fn update_skill(&self, skill: &Skill) -> Result<Skill, ApiError> {
            self.respond()?;
            if let Some(hook) = self.during_update.borrow_mut().take() {
                hook();
            }
            let id = skill.id.ok_or(ApiError::MissingId)?;
            let mut skills = self.skills.borrow_mut();
            let slot = skills.iter_mut().find(|s| s.id == Some(id)).ok_or(ApiError::Status(404))?;
            *slot = skill.clone();
            Ok(skill.clone())
        }

        async fn delete_skill(&self, id: u32) -> Result<(), ApiError> {
            self.respond()?;
            self.skills.borrow_mut().retain(|s| s.id != Some(id));
            Ok(())
        }
    }

    fn loaded_state(api: &FakeApi) -> RefCell<EditorState> {
        let mut state = EditorState::default();
        state.replace_skills(api.skills.borrow().clone());
        RefCell::new(state)
    }

    #[tokio::test]
    async fn test_load_replaces_list() {
        let api = FakeApi::with_skills(vec![make_skill(1, "Rust"), make_skill(2, "Go")]);
        let state = RefCell::new(EditorState::default());
        state.borrow_mut().replace_skills(vec![make_skill(9, "stale")]);

        assert_eq!(load(&api, &state).await, Ok(2));
        assert_eq!(state.borrow().skills, api.skills.borrow().clone());
    }

    #[tokio::test]
    async fn test_load_failure_keeps_list() {
        let api = FakeApi::with_skills(vec![make_skill(1, "Rust")]);
        let state = RefCell::new(EditorState::default());
        api.fail_with.set(Some(500));

        assert_eq!(load(&api, &state).await, Err(EditorError::Api(ApiError::Status(500))));
        assert!(state.borrow().skills.is_empty());
    }

    #[tokio::test]
    async fn test_add_appends_server_representation() {
        let api = FakeApi::with_skills(vec![make_skill(1, "Rust")]);
        let state = loaded_state(&api);
        state.borrow_mut().form.name = " Kubernetes ".to_string();

        let created = add(&api, &state).await.unwrap();

        let state = state.borrow();
        assert_eq!(state.skills.len(), 2);
        assert_eq!(state.skills.last(), Some(&created));
        assert_eq!(created.id, Some(100));
        assert_eq!(created.name, "Kubernetes");
        assert_eq!(created.level, 3);
        assert!(state.form.name.is_empty());
    }

    #[tokio::test]
    async fn test_add_blank_name_sends_nothing() {
        let api = FakeApi::with_skills(vec![make_skill(1, "Rust")]);
        let state = loaded_state(&api);
        state.borrow_mut().form.name = "  \t ".to_string();

        let result = add(&api, &state).await;

        assert_eq!(result, Err(EditorError::Validation(ValidationError::EmptyName)));
        assert_eq!(api.requests.get(), 0);
        assert_eq!(state.borrow().skills.len(), 1);
    }

    #[tokio::test]
    async fn test_add_failure_leaves_list_and_form() {
        let api = FakeApi::with_skills(vec![]);
        let state = loaded_state(&api);
        state.borrow_mut().form.name = "Rust".to_string();
        api.fail_with.set(Some(400));

        assert!(add(&api, &state).await.is_err());
        assert!(state.borrow().skills.is_empty());
        assert_eq!(state.borrow().form.name, "Rust");
    }

    #[tokio::test]
    async fn test_save_replaces_edited_skill() {
        let api = FakeApi::with_skills(vec![make_skill(1, "Rust"), make_skill(2, "Go")]);
        let state = loaded_state(&api);
        state.borrow_mut().begin_edit(1).unwrap();
        state.borrow_mut().form.name = "Golang".to_string();

        let saved = save(&api, &state).await.unwrap();

        assert_eq!(saved.id, Some(2));
        let state = state.borrow();
        assert_eq!(state.skills[1].name, "Golang");
        assert!(!state.is_editing());
    }

    fn ids_and_names(state: &RefCell<EditorState>) -> Vec<(Option<u32>, String)> {
        state.borrow().skills.iter().map(|s| (s.id, s.name.clone())).collect()
    }

    #[tokio::test]
    async fn test_save_with_delete_in_flight() {
        let api = FakeApi::with_skills(vec![make_skill(1, "A"), make_skill(2, "B"), make_skill(3, "C")]);
        let state = Rc::new(loaded_state(&api));
        state.borrow_mut().begin_edit(1).unwrap();
        state.borrow_mut().form.name = "B2".to_string();
        let in_flight = Rc::clone(&state);
        *api.during_update.borrow_mut() = Some(Box::new(move || in_flight.borrow_mut().commit_deleted(1)));

        save(&api, &*state).await.unwrap();

        assert_eq!(
            ids_and_names(&state),
            vec![(Some(2), "B2".to_string()), (Some(3), "C".to_string())]
        );
        assert!(!state.borrow().is_editing());
    }

    #[tokio::test]
    async fn test_save_with_reorder_in_flight() {
        let api = FakeApi::with_skills(vec![make_skill(1, "A"), make_skill(2, "B"), make_skill(3, "C")]);
        let state = Rc::new(loaded_state(&api));
        state.borrow_mut().begin_edit(0).unwrap();
        state.borrow_mut().form.name = "A2".to_string();
        let in_flight = Rc::clone(&state);
        *api.during_update.borrow_mut() = Some(Box::new(move || {
            in_flight.borrow_mut().apply_order(&[1, 2, 0]);
        }));

        save(&api, &*state).await.unwrap();

        assert_eq!(
            ids_and_names(&state),
            vec![(Some(2), "B".to_string()), (Some(3), "C".to_string()), (Some(1), "A2".to_string())]
        );
    }

    #[tokio::test]
    async fn test_save_without_edit_is_rejected() {
        let api = FakeApi::with_skills(vec![make_skill(1, "Rust")]);
        let state = loaded_state(&api);

        assert_eq!(save(&api, &state).await, Err(EditorError::NotEditing));
        assert_eq!(api.requests.get(), 0);
    }

    #[tokio::test]
    async fn test_save_failure_stays_in_edit_mode() {
        let api = FakeApi::with_skills(vec![make_skill(1, "Rust")]);
        let state = loaded_state(&api);
        state.borrow_mut().begin_edit(0).unwrap();
        state.borrow_mut().form.name = "Rust 2024".to_string();
        api.fail_with.set(Some(503));

        assert!(save(&api, &state).await.is_err());
        let state = state.borrow();
        assert!(state.is_editing());
        assert_eq!(state.skills[0].name, "Rust");
    }

    #[tokio::test]
    async fn test_delete_removes_on_success() {
        let api = FakeApi::with_skills(vec![make_skill(1, "Rust"), make_skill(2, "Go")]);
        let state = loaded_state(&api);

        delete(&api, &state, 0).await.unwrap();

        let state = state.borrow();
        assert_eq!(state.skills.len(), 1);
        assert!(state.skills.iter().all(|s| s.id != Some(1)));
    }

    #[tokio::test]
    async fn test_delete_failure_keeps_list() {
        let api = FakeApi::with_skills(vec![make_skill(1, "Rust"), make_skill(2, "Go")]);
        let state = loaded_state(&api);
        api.fail_with.set(Some(403));

        assert_eq!(
            delete(&api, &state, 1).await,
            Err(EditorError::Api(ApiError::Status(403)))
        );
        assert_eq!(state.borrow().skills.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_unsaved_skill_sends_nothing() {
        let api = FakeApi::with_skills(vec![]);
        let state = RefCell::new(EditorState::default());
        let mut unsaved = make_skill(0, "Draft");
        unsaved.id = None;
        state.borrow_mut().replace_skills(vec![unsaved]);

        assert_eq!(delete(&api, &state, 0).await, Err(EditorError::Api(ApiError::MissingId)));
        assert_eq!(api.requests.get(), 0);
    }

    #[tokio::test]
    async fn test_reorder_is_persisted() {
        let api = FakeApi::with_skills(vec![make_skill(1, "Rust"), make_skill(2, "Go"), make_skill(3, "Zig")]);
        let state = loaded_state(&api);

        let changed = state.borrow_mut().apply_order(&[1, 2, 0]);
        assert_eq!(persist_order(&api, changed).await, 0);

        let server_order: Vec<(Option<u32>, Option<i32>)> =
            api.skills.borrow().iter().map(|s| (s.id, s.order)).collect();
        assert_eq!(server_order, vec![(Some(1), Some(2)), (Some(2), Some(0)), (Some(3), Some(1))]);
    }

    #[tokio::test]
    async fn test_reorder_failures_are_counted() {
        let api = FakeApi::with_skills(vec![make_skill(1, "Rust"), make_skill(2, "Go")]);
        let state = loaded_state(&api);
        api.fail_with.set(Some(500));

        let changed = state.borrow_mut().apply_order(&[1, 0]);
        assert_eq!(persist_order(&api, changed).await, 2);
        // Local order is kept even when the server refused it
        assert_eq!(state.borrow().skills[0].name, "Go");
    }
}
