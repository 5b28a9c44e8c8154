//! Theme State
//!
//! Dark mode flag shared through context. The `dark` class on `<html>`
//! follows the flag for as long as the app is mounted.

use leptos::*;

const DARK_CLASS: &str = "dark";

/// Display theme provided to all components
#[derive(Clone, Copy)]
pub struct ThemeState {
    /// Dark mode enabled
    pub dark: RwSignal<bool>,
}

impl ThemeState {
    fn new() -> Self {
        let initial = document()
            .document_element()
            .map(|root| root.class_list().contains(DARK_CLASS))
            .unwrap_or(false);
        Self {
            dark: create_rw_signal(initial),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.dark.get()
    }

    pub fn set_dark(&self, on: bool) {
        self.dark.set(on);
    }
}

/// Provide the theme and keep the document class in sync with it
pub fn provide_theme_state() {
    let theme = ThemeState::new();

    create_effect(move |_| apply(theme.dark.get()));
    provide_context(theme);
}

fn apply(on: bool) {
    if let Some(root) = document().document_element() {
        if let Err(e) = root.class_list().toggle_with_force(DARK_CLASS, on) {
            web_sys::console::error_1(&e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_new_state_picks_up_the_current_theme() {
        let runtime = create_runtime();

        apply(true);
        assert!(ThemeState::new().is_dark());

        apply(false);
        assert!(!ThemeState::new().is_dark());

        runtime.dispose();
    }
}
