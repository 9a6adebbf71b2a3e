use super::text::LocalizedText;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::time::Duration;
use ts_rs::TS;

/// Identifier of the built-in category that every consent check treats as
/// always granted. External consent logic matches on this literal.
pub const NECESSARY_CATEGORY_IDENTIFIER: &str = "necessary";

/// Root configuration consumed by the consent renderer and consent checks.
///
/// Every field is public and independently settable. Build it with
/// [`Default`], adjust what the host needs, then call
/// [`ConsentOptions::freeze`](crate::config::ConsentOptions::freeze) before the
/// first render.
#[derive(Debug, Clone, PartialEq, Deserialize, serde::Serialize, TS)]
#[ts(export)]
pub struct ConsentOptions {
    /// Policy revision the user agrees to. Any difference from the revision in
    /// a stored consent record, in either direction, invalidates that record.
    #[serde(default = "crate::config::defaults::default_revision")]
    pub revision: i32,
    /// Run the consent check as soon as the handler renders. When false the
    /// host triggers the check explicitly.
    #[serde(default = "crate::config::defaults::default_auto_show")]
    pub auto_show: bool,
    /// Locale used when the active language has no entry.
    #[serde(default = "crate::config::defaults::default_locale")]
    pub default_locale: String,
    /// Link to the site's cookie policy; renderers open it in a new tab.
    #[serde(default = "crate::config::defaults::default_policy_url")]
    pub policy_url: String,
    #[serde(default)]
    pub cookie: CookieWriteOptions,
    #[serde(default)]
    pub check: CheckOptions,
    #[serde(default)]
    pub prompt_variant: PromptVariant,
    #[serde(default = "crate::config::defaults::default_consent_title")]
    pub consent_title: LocalizedText,
    #[serde(default = "crate::config::defaults::default_consent_description")]
    pub consent_description: LocalizedText,
    #[serde(default = "crate::config::defaults::default_consent_accept_all")]
    pub consent_accept_all: LocalizedText,
    /// Shown instead of the accept/decline pair when only required
    /// categories exist.
    #[serde(default = "crate::config::defaults::default_consent_acknowledge")]
    pub consent_acknowledge: LocalizedText,
    #[serde(default = "crate::config::defaults::default_consent_necessary_only")]
    pub consent_necessary_only: LocalizedText,
    #[serde(default = "crate::config::defaults::default_open_preferences")]
    pub open_preferences: LocalizedText,
    #[serde(default = "crate::config::defaults::default_settings_title")]
    pub settings_title: LocalizedText,
    #[serde(default = "crate::config::defaults::default_settings_description")]
    pub settings_description: LocalizedText,
    #[serde(
        default = "crate::config::defaults::default_settings_continue_with_selected_preferences"
    )]
    pub settings_continue_with_selected_preferences: LocalizedText,
    #[serde(default = "crate::config::defaults::default_settings_used_services")]
    pub settings_used_services: LocalizedText,
    #[serde(default = "crate::config::defaults::default_show_policy")]
    pub show_policy: LocalizedText,
    /// Categories in presentation order.
    #[serde(default = "crate::config::defaults::default_categories")]
    pub categories: Vec<Category>,
}

impl Default for ConsentOptions {
    fn default() -> Self {
        ConsentOptions {
            revision: crate::config::defaults::default_revision(),
            auto_show: crate::config::defaults::default_auto_show(),
            default_locale: crate::config::defaults::default_locale(),
            policy_url: crate::config::defaults::default_policy_url(),
            cookie: CookieWriteOptions::default(),
            check: CheckOptions::default(),
            prompt_variant: PromptVariant::default(),
            consent_title: crate::config::defaults::default_consent_title(),
            consent_description: crate::config::defaults::default_consent_description(),
            consent_accept_all: crate::config::defaults::default_consent_accept_all(),
            consent_acknowledge: crate::config::defaults::default_consent_acknowledge(),
            consent_necessary_only: crate::config::defaults::default_consent_necessary_only(),
            open_preferences: crate::config::defaults::default_open_preferences(),
            settings_title: crate::config::defaults::default_settings_title(),
            settings_description: crate::config::defaults::default_settings_description(),
            settings_continue_with_selected_preferences:
                crate::config::defaults::default_settings_continue_with_selected_preferences(),
            settings_used_services: crate::config::defaults::default_settings_used_services(),
            show_policy: crate::config::defaults::default_show_policy(),
            categories: crate::config::defaults::default_categories(),
        }
    }
}

/// How the consent cookie is written. The writer resolves any conflict
/// between `max_age` and `expires`; validation rejects setting both.
///
/// Serialized through the same layout as the `[cookie]` file section, so JSON
/// and TOML agree: a missing `max_age` only defaults to 180 days when
/// `expires` is absent too, and `"0s"` stands for no max-age.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, serde::Serialize, TS)]
#[serde(
    from = "crate::config::tables::CookieConfig",
    into = "crate::config::tables::CookieConfig"
)]
#[ts(export)]
pub struct CookieWriteOptions {
    pub name: String,
    pub domain: Option<String>,
    pub http_only: bool,
    pub is_essential: bool,
    /// Relative lifetime, so renewal is measured from the time of writing.
    #[ts(type = "string | null")]
    pub max_age: Option<Duration>,
    #[ts(type = "string | null")]
    pub expires: Option<DateTime<Utc>>,
    pub path: String,
    pub same_site: SameSite,
    pub secure: bool,
}

impl Default for CookieWriteOptions {
    fn default() -> Self {
        CookieWriteOptions {
            name: crate::config::defaults::default_cookie_name(),
            domain: None,
            http_only: false,
            is_essential: crate::config::defaults::default_cookie_is_essential(),
            max_age: crate::config::defaults::default_cookie_max_age(),
            expires: None,
            path: crate::config::defaults::default_cookie_path(),
            same_site: SameSite::default(),
            secure: crate::config::defaults::default_cookie_secure(),
        }
    }
}

/// Copy shown when embedded content is withheld until more categories are
/// accepted. Consumers list the missing categories themselves.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, serde::Serialize, TS)]
#[ts(export)]
pub struct CheckOptions {
    #[serde(default = "crate::config::defaults::default_check_text")]
    pub text: LocalizedText,
    #[serde(default = "crate::config::defaults::default_check_accept_text")]
    pub accept_text: LocalizedText,
}

impl Default for CheckOptions {
    fn default() -> Self {
        CheckOptions {
            text: crate::config::defaults::default_check_text(),
            accept_text: crate::config::defaults::default_check_accept_text(),
        }
    }
}

/// A group of cookies behind one consent toggle.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, serde::Serialize, TS)]
#[ts(export)]
pub struct Category {
    pub identifier: String,
    /// Users cannot opt out of a required category.
    #[serde(default)]
    pub is_required: bool,
    /// Toggle starts on when the user has not chosen explicitly.
    #[serde(default)]
    pub is_preselected: bool,
    #[serde(default)]
    pub title: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<Service>,
}

impl Category {
    pub fn new(identifier: impl Into<String>) -> Self {
        Category {
            identifier: identifier.into(),
            is_required: false,
            is_preselected: false,
            title: LocalizedText::new(),
            description: LocalizedText::new(),
            services: Vec::new(),
        }
    }

    pub fn is_necessary(&self) -> bool {
        self.identifier == NECESSARY_CATEGORY_IDENTIFIER
    }

    pub fn service(&self, identifier: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.identifier == identifier)
    }
}

/// A first- or third-party component listed under a category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, serde::Serialize, TS)]
#[ts(export)]
pub struct Service {
    pub identifier: String,
    #[serde(default)]
    pub policy_url: String,
    #[serde(default)]
    pub title: LocalizedText,
    #[serde(default)]
    pub show_policy_text: LocalizedText,
}

impl Service {
    pub fn new(identifier: impl Into<String>, policy_url: impl Into<String>) -> Self {
        Service {
            identifier: identifier.into(),
            policy_url: policy_url.into(),
            title: LocalizedText::new(),
            show_policy_text: LocalizedText::new(),
        }
    }
}

/// `SameSite` attribute of the consent cookie.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, TS)]
#[ts(export)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

impl Default for SameSite {
    fn default() -> Self {
        SameSite::Lax
    }
}

impl SameSite {
    pub fn as_str(self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

impl std::fmt::Display for SameSite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which prompt the renderer shows when consent is needed.
#[derive(Debug, Clone, Deserialize, serde::Serialize, PartialEq, Eq, TS)]
#[serde(tag = "kind", rename_all = "kebab-case")]
#[ts(export)]
pub enum PromptVariant {
    /// Built-in modal.
    Modal {
        #[serde(default)]
        position: ConsentModalPosition,
        #[serde(default)]
        layout: ConsentModalLayout,
    },
    /// Host-provided prompt component, referenced by name.
    Custom { component: String },
}

impl Default for PromptVariant {
    fn default() -> Self {
        PromptVariant::Modal {
            position: ConsentModalPosition::default(),
            layout: ConsentModalLayout::default(),
        }
    }
}

/// Screen anchor of the consent modal.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum ConsentModalPosition {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Default for ConsentModalPosition {
    fn default() -> Self {
        ConsentModalPosition::BottomRight
    }
}

impl std::fmt::Display for ConsentModalPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ConsentModalPosition::TopLeft => "Top left",
            ConsentModalPosition::TopCenter => "Top center",
            ConsentModalPosition::TopRight => "Top right",
            ConsentModalPosition::BottomLeft => "Bottom left",
            ConsentModalPosition::BottomCenter => "Bottom center",
            ConsentModalPosition::BottomRight => "Bottom right",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum ConsentModalLayout {
    Bar,
    Cloud,
}

impl Default for ConsentModalLayout {
    fn default() -> Self {
        ConsentModalLayout::Cloud
    }
}

impl std::fmt::Display for ConsentModalLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ConsentModalLayout::Bar => "Bar",
            ConsentModalLayout::Cloud => "Cloud",
        };
        write!(f, "{}", label)
    }
}

/// Names every localized text field on [`ConsentOptions`] and
/// [`CheckOptions`], so renderers and tools can address them uniformly.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TextKey {
    ConsentTitle,
    ConsentDescription,
    ConsentAcceptAll,
    ConsentAcknowledge,
    ConsentNecessaryOnly,
    OpenPreferences,
    SettingsTitle,
    SettingsDescription,
    SettingsContinueWithSelectedPreferences,
    SettingsUsedServices,
    ShowPolicy,
    CheckText,
    CheckAcceptText,
}

impl TextKey {
    pub const ALL: [TextKey; 13] = [
        TextKey::ConsentTitle,
        TextKey::ConsentDescription,
        TextKey::ConsentAcceptAll,
        TextKey::ConsentAcknowledge,
        TextKey::ConsentNecessaryOnly,
        TextKey::OpenPreferences,
        TextKey::SettingsTitle,
        TextKey::SettingsDescription,
        TextKey::SettingsContinueWithSelectedPreferences,
        TextKey::SettingsUsedServices,
        TextKey::ShowPolicy,
        TextKey::CheckText,
        TextKey::CheckAcceptText,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TextKey::ConsentTitle => "consent_title",
            TextKey::ConsentDescription => "consent_description",
            TextKey::ConsentAcceptAll => "consent_accept_all",
            TextKey::ConsentAcknowledge => "consent_acknowledge",
            TextKey::ConsentNecessaryOnly => "consent_necessary_only",
            TextKey::OpenPreferences => "open_preferences",
            TextKey::SettingsTitle => "settings_title",
            TextKey::SettingsDescription => "settings_description",
            TextKey::SettingsContinueWithSelectedPreferences => {
                "settings_continue_with_selected_preferences"
            }
            TextKey::SettingsUsedServices => "settings_used_services",
            TextKey::ShowPolicy => "show_policy",
            TextKey::CheckText => "check_text",
            TextKey::CheckAcceptText => "check_accept_text",
        }
    }
}

impl std::fmt::Display for TextKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TextKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        TextKey::ALL
            .into_iter()
            .find(|key| key.as_str() == wanted)
            .ok_or_else(|| format!("unknown text key: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cookie_matches_documented_values() {
        let cookie = CookieWriteOptions::default();
        assert_eq!(cookie.name, ".AspNet.CookieConsent");
        assert_eq!(cookie.domain, None);
        assert!(!cookie.http_only);
        assert!(cookie.is_essential);
        assert_eq!(cookie.max_age, Some(Duration::from_secs(180 * 24 * 60 * 60)));
        assert_eq!(cookie.expires, None);
        assert_eq!(cookie.path, "/");
        assert_eq!(cookie.same_site, SameSite::Lax);
        assert!(cookie.secure);
    }

    #[test]
    fn max_age_serializes_as_human_readable_duration() {
        let json = serde_json::to_value(CookieWriteOptions::default()).expect("serialize cookie");
        assert_eq!(json["max_age"], "180days");
        assert_eq!(json["same_site"], "Lax");

        let mut cookie = CookieWriteOptions::default();
        cookie.max_age = None;
        let json = serde_json::to_value(&cookie).expect("serialize cookie");
        assert_eq!(json["max_age"], "0s");
        let decoded: CookieWriteOptions = serde_json::from_value(json).expect("decode cookie");
        assert_eq!(decoded.max_age, None);
    }

    #[test]
    fn json_cookie_with_only_expires_has_no_max_age() {
        let cookie: CookieWriteOptions =
            serde_json::from_str(r#"{"expires":"2030-01-01T00:00:00Z"}"#).expect("decode cookie");
        assert_eq!(cookie.max_age, None);
        assert!(cookie.expires.is_some());
        assert_eq!(cookie.name, ".AspNet.CookieConsent");

        let defaulted: CookieWriteOptions = serde_json::from_str("{}").expect("decode cookie");
        assert_eq!(defaulted, CookieWriteOptions::default());
    }

    #[test]
    fn prompt_variant_is_tagged_by_kind() {
        let json = serde_json::to_value(PromptVariant::default()).expect("serialize prompt");
        assert_eq!(json["kind"], "modal");
        assert_eq!(json["position"], "bottom-right");
        assert_eq!(json["layout"], "cloud");

        let custom: PromptVariant =
            serde_json::from_str(r#"{"kind":"custom","component":"Banner"}"#).expect("decode");
        assert_eq!(
            custom,
            PromptVariant::Custom {
                component: "Banner".to_string()
            }
        );
    }

    #[test]
    fn modal_options_display_as_labels() {
        assert_eq!(ConsentModalPosition::default().to_string(), "Bottom right");
        assert_eq!(ConsentModalPosition::TopCenter.to_string(), "Top center");
        assert_eq!(ConsentModalLayout::default().to_string(), "Cloud");
        assert_eq!(SameSite::None.to_string(), "None");
    }

    #[test]
    fn text_key_parses_snake_and_kebab_case() {
        assert_eq!("consent_title".parse::<TextKey>(), Ok(TextKey::ConsentTitle));
        assert_eq!("Check-Accept-Text".parse::<TextKey>(), Ok(TextKey::CheckAcceptText));
        assert!("title".parse::<TextKey>().is_err());
        for key in TextKey::ALL {
            assert_eq!(key.as_str().parse::<TextKey>(), Ok(key));
        }
    }

    #[test]
    fn necessary_category_is_recognized_by_identifier() {
        assert!(Category::new(NECESSARY_CATEGORY_IDENTIFIER).is_necessary());
        assert!(!Category::new("analytics").is_necessary());
    }
}
