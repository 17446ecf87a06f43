//! I18nState - Internationalization State

use tracing::info;

use crate::i18n::Locale;

/// State for internationalization
#[derive(Debug, Clone, Default)]
pub struct I18nState {
    /// Current locale
    pub locale: Locale,
}

impl I18nState {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Set the locale
    pub fn set_locale(&mut self, locale: Locale) {
        if self.locale != locale {
            info!(locale = locale.display_name(), "Locale changed");
        }
        self.locale = locale;
    }

    /// Toggle between English and Spanish
    pub fn toggle_locale(&mut self) {
        self.set_locale(self.locale.toggled());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_locale() {
        let mut state = I18nState::default();
        assert_eq!(state.locale, Locale::EnUS);
        state.toggle_locale();
        assert_eq!(state.locale, Locale::EsES);
        state.toggle_locale();
        assert_eq!(state.locale, Locale::EnUS);
    }
}
