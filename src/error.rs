//! Error Types
//!
//! Failures surfaced by the widgets. None of them is fatal to the page.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Transport and decoding failures talking to the REST API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("no browser window available")]
    NoWindow,
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("skill has no server-assigned id")]
    MissingId,
}

impl ApiError {
    pub fn network(err: JsValue) -> Self {
        Self::Network(format!("{:?}", err))
    }

    pub fn decode(err: JsValue) -> Self {
        Self::Decode(format!("{:?}", err))
    }
}

/// Form validation failures, reported to the user before any request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Enter a skill name")]
    EmptyName,
}

/// Skill editor failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditorError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("no skill is being edited")]
    NotEditing,
    #[error("no skill at index {0}")]
    NoSuchSkill(usize),
}

/// Host page configuration failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid widget config: {0}")]
    Invalid(String),
}
