use super::models::{Category, ConsentOptions, TextKey};
use super::text::LocalizedText;
use super::validation::{self, ValidationError};
use once_cell::sync::Lazy;
use std::ops::Deref;
use std::sync::Arc;
use tracing::debug;

static DEFAULT_OPTIONS: Lazy<ConsentOptions> = Lazy::new(ConsentOptions::default);

impl ConsentOptions {
    /// Shared, lazily built copy of the defaults.
    pub fn defaults() -> &'static ConsentOptions {
        &DEFAULT_OPTIONS
    }

    pub fn text(&self, key: TextKey) -> &LocalizedText {
        match key {
            TextKey::ConsentTitle => &self.consent_title,
            TextKey::ConsentDescription => &self.consent_description,
            TextKey::ConsentAcceptAll => &self.consent_accept_all,
            TextKey::ConsentAcknowledge => &self.consent_acknowledge,
            TextKey::ConsentNecessaryOnly => &self.consent_necessary_only,
            TextKey::OpenPreferences => &self.open_preferences,
            TextKey::SettingsTitle => &self.settings_title,
            TextKey::SettingsDescription => &self.settings_description,
            TextKey::SettingsContinueWithSelectedPreferences => {
                &self.settings_continue_with_selected_preferences
            }
            TextKey::SettingsUsedServices => &self.settings_used_services,
            TextKey::ShowPolicy => &self.show_policy,
            TextKey::CheckText => &self.check.text,
            TextKey::CheckAcceptText => &self.check.accept_text,
        }
    }

    pub fn text_mut(&mut self, key: TextKey) -> &mut LocalizedText {
        match key {
            TextKey::ConsentTitle => &mut self.consent_title,
            TextKey::ConsentDescription => &mut self.consent_description,
            TextKey::ConsentAcceptAll => &mut self.consent_accept_all,
            TextKey::ConsentAcknowledge => &mut self.consent_acknowledge,
            TextKey::ConsentNecessaryOnly => &mut self.consent_necessary_only,
            TextKey::OpenPreferences => &mut self.open_preferences,
            TextKey::SettingsTitle => &mut self.settings_title,
            TextKey::SettingsDescription => &mut self.settings_description,
            TextKey::SettingsContinueWithSelectedPreferences => {
                &mut self.settings_continue_with_selected_preferences
            }
            TextKey::SettingsUsedServices => &mut self.settings_used_services,
            TextKey::ShowPolicy => &mut self.show_policy,
            TextKey::CheckText => &mut self.check.text,
            TextKey::CheckAcceptText => &mut self.check.accept_text,
        }
    }

    /// Text for `lang`, falling back to `default_locale`. `None` only when
    /// neither language has an entry.
    pub fn localized(&self, key: TextKey, lang: &str) -> Option<&str> {
        let resolved = self.text(key).resolve(lang, &self.default_locale);
        if resolved.is_none() {
            debug!(key = %key, lang, default = %self.default_locale, "No localized text");
        }
        resolved
    }

    /// First category with the given identifier.
    pub fn category(&self, identifier: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.identifier == identifier)
    }

    pub fn required_categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(|c| c.is_required)
    }

    /// True when only required categories exist, so the prompt offers an
    /// acknowledgement instead of a choice.
    pub fn has_only_required_categories(&self) -> bool {
        self.categories.iter().all(|c| c.is_required)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate(self)
    }

    /// Validates and wraps the options in a cheap, read-only handle.
    pub fn freeze(self) -> Result<FrozenConsentOptions, ValidationError> {
        self.validate()?;
        debug!(
            revision = self.revision,
            categories = self.categories.len(),
            "Froze consent options"
        );
        Ok(FrozenConsentOptions(Arc::new(self)))
    }
}

/// Read-only, shareable consent options. Obtain one through
/// [`ConsentOptions::freeze`].
#[derive(Debug, Clone)]
pub struct FrozenConsentOptions(Arc<ConsentOptions>);

impl FrozenConsentOptions {
    /// Copy of the options for further editing; the frozen handle is unchanged.
    pub fn to_options(&self) -> ConsentOptions {
        ConsentOptions::clone(&self.0)
    }
}

impl Deref for FrozenConsentOptions {
    type Target = ConsentOptions;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
