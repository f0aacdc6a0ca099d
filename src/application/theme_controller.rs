use std::cell::Cell;

use crate::domain::{
    errors::UiResult,
    logging::{LogComponent, get_logger},
    surface::RenderSurface,
    theme::{PreferenceStore, Theme},
};

/// Owns the light/dark state; only `toggle` changes it.
pub struct ThemeController<P> {
    store: P,
    storage_key: String,
    toggle_id: String,
    current: Cell<Theme>,
}

impl<P: PreferenceStore> ThemeController<P> {
    /// Reads the persisted preference, `light` when absent.
    pub fn new(store: P, storage_key: impl Into<String>, toggle_id: impl Into<String>) -> Self {
        let storage_key = storage_key.into();
        let current = Theme::from_stored(store.get(&storage_key).as_deref());
        Self { store, storage_key, toggle_id: toggle_id.into(), current: Cell::new(current) }
    }

    pub fn current(&self) -> Theme {
        self.current.get()
    }

    /// Push a theme to the page: root `data-theme` plus the toggle label.
    pub fn apply<U: RenderSurface>(&self, surface: &U, theme: Theme) -> UiResult<()> {
        surface.set_root_data("theme", theme.as_ref())?;
        surface.set_text(&self.toggle_id, theme.toggle_label())
    }

    pub fn toggle<U: RenderSurface>(&self, surface: &U) -> Theme {
        let next = self.current.get().toggled();
        self.current.set(next);

        if let Err(e) = self.store.set(&self.storage_key, next.as_ref()) {
            get_logger().warn(
                LogComponent::Application("Theme"),
                &format!("⚠️ Theme preference not saved: {e}"),
            );
        }
        if let Err(e) = self.apply(surface, next) {
            get_logger().warn(
                LogComponent::Application("Theme"),
                &format!("⚠️ Theme not applied: {e}"),
            );
        }

        get_logger().info(LogComponent::Application("Theme"), &format!("🎨 Theme set to {next}"));
        next
    }

    pub fn store(&self) -> &P {
        &self.store
    }
}
