//! Skill Commands
//!
//! CRUD bindings for the `/skills/` collection.

use async_trait::async_trait;

use super::{read_json, send, to_body, HttpApi};
use crate::error::ApiError;
use crate::models::{Skill, SkillDraft};

const SKILLS_PATH: &str = "skills/";

pub(crate) fn skill_path(id: u32) -> String {
    format!("{}{}/", SKILLS_PATH, id)
}

/// Remote skill collection
#[async_trait(?Send)]
pub trait SkillApi {
    /// Fetch the whole collection
    async fn list_skills(&self) -> Result<Vec<Skill>, ApiError>;

    /// Create a skill; the response carries the assigned id
    async fn create_skill(&self, draft: &SkillDraft) -> Result<Skill, ApiError>;

    /// Replace a skill with its full representation
    async fn update_skill(&self, skill: &Skill) -> Result<Skill, ApiError>;

    async fn delete_skill(&self, id: u32) -> Result<(), ApiError>;
}

#[async_trait(?Send)]
impl SkillApi for HttpApi {
    async fn list_skills(&self) -> Result<Vec<Skill>, ApiError> {
        let response = send("GET", &self.url(SKILLS_PATH), None).await?;
        read_json(response).await
    }

    async fn create_skill(&self, draft: &SkillDraft) -> Result<Skill, ApiError> {
        let response = send("POST", &self.url(SKILLS_PATH), Some(to_body(draft)?)).await?;
        read_json(response).await
    }

    async fn update_skill(&self, skill: &Skill) -> Result<Skill, ApiError> {
        let id = skill.id.ok_or(ApiError::MissingId)?;
        let response = send("PUT", &self.url(&skill_path(id)), Some(to_body(skill)?)).await?;
        read_json(response).await
    }

    async fn delete_skill(&self, id: u32) -> Result<(), ApiError> {
        // Success is the status alone, the body is ignored
        send("DELETE", &self.url(&skill_path(id)), None).await?;
        Ok(())
    }
}
