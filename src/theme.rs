//! Theme Management
//!
//! Current theme, its local persistence and the optional server sync.

use crate::commands::ThemeApi;
use crate::models::Theme;

/// Key-value preference storage
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Browser `localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if let Err(e) = storage.set_item(key, value) {
                    log::warn!("[THEME] Could not persist {}={}: {:?}", key, value, e);
                }
            }
            None => log::warn!("[THEME] localStorage unavailable"),
        }
    }
}

/// Progress of the background server sync
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SyncStatus {
    #[default]
    Idle,
    Pending,
    Synced,
    Failed(String),
}

/// One ticket per started sync. Only the newest ticket may report its result,
/// so a slow older request cannot overwrite the status of a newer one.
#[derive(Clone, Copy, Debug, Default)]
pub struct SyncTracker {
    latest: u32,
}

impl SyncTracker {
    pub fn begin(&mut self) -> u32 {
        self.latest = self.latest.wrapping_add(1);
        self.latest
    }

    pub fn is_current(&self, ticket: u32) -> bool {
        self.latest == ticket
    }
}

/// Owns the current theme and persists every change
pub struct ThemeController<P: PreferenceStore> {
    prefs: P,
    key: String,
    current: Theme,
}

impl<P: PreferenceStore> ThemeController<P> {
    /// Start from the persisted theme, or the default when none is stored
    pub fn new(prefs: P, key: impl Into<String>) -> Self {
        let key = key.into();
        let current = prefs
            .get(&key)
            .filter(|stored| !stored.is_empty())
            .map(|stored| Theme::from_str(&stored))
            .unwrap_or_default();
        Self { prefs, key, current }
    }

    pub fn current(&self) -> &Theme {
        &self.current
    }

    /// Persist and record `theme`. Any identifier is accepted.
    pub fn apply(&mut self, theme: Theme) -> &Theme {
        self.prefs.set(&self.key, theme.as_str());
        self.current = theme;
        &self.current
    }
}

/// Set the `<html>` class to the theme identifier
pub fn apply_document_class(theme: &Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    match root {
        Some(root) => root.set_class_name(theme.as_str()),
        None => log::warn!("[THEME] No document element to apply {}", theme.as_str()),
    }
}

/// Push the theme to the server once. No retry.
pub async fn sync_theme<A: ThemeApi + ?Sized>(api: &A, theme: &Theme) -> SyncStatus {
    match api.update_theme(theme).await {
        Ok(()) => {
            log::debug!("[THEME] Synced {}", theme.as_str());
            SyncStatus::Synced
        }
        Err(e) => {
            log::warn!("[THEME] Sync of {} failed: {}", theme.as_str(), e);
            SyncStatus::Failed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryPrefs {
        values: Rc<RefCell<HashMap<String, String>>>,
    }

    impl PreferenceStore for MemoryPrefs {
        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.values.borrow_mut().insert(key.to_string(), value.to_string());
        }
    }

    struct FakeThemeApi {
        fail: bool,
        sent: RefCell<Vec<String>>,
    }

    #[async_trait(?Send)]
    impl ThemeApi for FakeThemeApi {
        async fn update_theme(&self, theme: &Theme) -> Result<(), ApiError> {
            self.sent.borrow_mut().push(theme.as_str().to_string());
            if self.fail {
                Err(ApiError::Status(500))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_default_theme_when_nothing_stored() {
        let controller = ThemeController::new(MemoryPrefs::default(), "theme");
        assert_eq!(controller.current(), &Theme::GithubDark);
    }

    #[test]
    fn test_persisted_theme_wins() {
        let prefs = MemoryPrefs::default();
        prefs.set("theme", "dracula");
        let controller = ThemeController::new(prefs, "theme");
        assert_eq!(controller.current(), &Theme::Dracula);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let prefs = MemoryPrefs::default();
        let mut controller = ThemeController::new(prefs.clone(), "theme");

        controller.apply(Theme::Nord);
        let first = prefs.values.borrow().clone();
        controller.apply(Theme::Nord);
        let second = prefs.values.borrow().clone();

        assert_eq!(first, second);
        assert_eq!(second.get("theme").map(String::as_str), Some("nord"));
        assert_eq!(controller.current(), &Theme::Nord);
        let active: Vec<bool> = Theme::ALL.iter().map(|t| t == controller.current()).collect();
        assert_eq!(active, vec![false, false, false, true]);
    }

    #[test]
    fn test_apply_accepts_unknown_identifier() {
        let prefs = MemoryPrefs::default();
        let mut controller = ThemeController::new(prefs.clone(), "theme");
        controller.apply(Theme::from_str("sepia"));
        assert_eq!(prefs.get("theme").as_deref(), Some("sepia"));
        assert!(Theme::ALL.iter().all(|t| t != controller.current()));

        let reloaded = ThemeController::new(prefs, "theme");
        assert_eq!(reloaded.current().as_str(), "sepia");
    }

    #[tokio::test]
    async fn test_out_of_order_sync_keeps_newest_status() {
        let mut tracker = SyncTracker::default();
        let mut status = SyncStatus::Idle;
        let slow = FakeThemeApi { fail: true, sent: RefCell::new(Vec::new()) };
        let fast = FakeThemeApi { fail: false, sent: RefCell::new(Vec::new()) };

        let first = tracker.begin();
        let second = tracker.begin();

        // Newer selection finishes first, then the older one fails
        let newest = sync_theme(&fast, &Theme::Nord).await;
        if tracker.is_current(second) {
            status = newest;
        }
        let oldest = sync_theme(&slow, &Theme::Dracula).await;
        if tracker.is_current(first) {
            status = oldest;
        }

        assert_eq!(status, SyncStatus::Synced);
        assert!(!tracker.is_current(first));
    }

    #[tokio::test]
    async fn test_sync_reports_outcome() {
        let api = FakeThemeApi { fail: false, sent: RefCell::new(Vec::new()) };
        assert_eq!(sync_theme(&api, &Theme::GithubLight).await, SyncStatus::Synced);
        assert_eq!(api.sent.borrow().as_slice(), ["github-light"]);

        let api = FakeThemeApi { fail: true, sent: RefCell::new(Vec::new()) };
        assert_eq!(
            sync_theme(&api, &Theme::Dracula).await,
            SyncStatus::Failed("server responded with status 500".to_string())
        );
        assert_eq!(api.sent.borrow().len(), 1);
    }
}
