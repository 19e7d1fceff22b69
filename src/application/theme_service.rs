// Theme service - Use case for reading and toggling the saved theme
use crate::domain::theme::Theme;
use std::sync::Arc;

pub trait ThemePreferenceStore: Send + Sync {
    /// Raw stored value, `None` when nothing was saved yet.
    fn load(&self) -> anyhow::Result<Option<String>>;

    fn save(&self, theme: Theme) -> anyhow::Result<()>;
}

#[derive(Clone)]
pub struct ThemeService {
    store: Arc<dyn ThemePreferenceStore>,
}

impl ThemeService {
    pub fn new(store: Arc<dyn ThemePreferenceStore>) -> Self {
        Self { store }
    }

    /// Saved theme; an unreadable preference counts as light.
    pub fn current(&self) -> Theme {
        match self.store.load() {
            Ok(stored) => Theme::from_stored(stored.as_deref()),
            Err(e) => {
                tracing::warn!("Could not read theme preference: {:?}", e);
                Theme::Light
            }
        }
    }

    pub fn toggle(&self) -> anyhow::Result<Theme> {
        let next = self.current().toggled();
        self.store.save(next)?;
        tracing::debug!("Theme switched to {}", next);
        Ok(next)
    }
}
