//! Theme Commands
//!
//! Server-side copy of the theme preference.

use async_trait::async_trait;
use serde::Serialize;

use super::{send, to_body, HttpApi};
use crate::error::ApiError;
use crate::models::Theme;

const UPDATE_THEME_PATH: &str = "update-theme/";

#[derive(Serialize)]
struct UpdateThemeArgs<'a> {
    theme: &'a str,
}

#[async_trait(?Send)]
pub trait ThemeApi {
    /// Store the preference for the logged-in user
    async fn update_theme(&self, theme: &Theme) -> Result<(), ApiError>;
}

#[async_trait(?Send)]
impl ThemeApi for HttpApi {
    async fn update_theme(&self, theme: &Theme) -> Result<(), ApiError> {
        let body = to_body(&UpdateThemeArgs { theme: theme.as_str() })?;
        send("POST", &self.url(UPDATE_THEME_PATH), Some(body)).await?;
        Ok(())
    }
}
