use super::defaults;
use super::models::{Category, CheckOptions, ConsentOptions, CookieWriteOptions, PromptVariant, SameSite};
use super::text::LocalizedText;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::time::Duration;

/// On-disk layout: the flat [`ConsentOptions`] split into TOML sections.
#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    general: GeneralConfig,
    #[serde(default)]
    cookie: CookieConfig,
    #[serde(default)]
    check: CheckOptions,
    #[serde(default)]
    prompt: PromptVariant,
    #[serde(default)]
    text: TextConfig,
    #[serde(default = "defaults::default_categories")]
    categories: Vec<Category>,
}

impl From<ConfigTables> for ConsentOptions {
    fn from(tables: ConfigTables) -> Self {
        ConsentOptions {
            revision: tables.general.revision,
            auto_show: tables.general.auto_show,
            default_locale: tables.general.default_locale,
            policy_url: tables.general.policy_url,
            cookie: tables.cookie.into(),
            check: tables.check,
            prompt_variant: tables.prompt,
            consent_title: tables.text.consent_title,
            consent_description: tables.text.consent_description,
            consent_accept_all: tables.text.consent_accept_all,
            consent_acknowledge: tables.text.consent_acknowledge,
            consent_necessary_only: tables.text.consent_necessary_only,
            open_preferences: tables.text.open_preferences,
            settings_title: tables.text.settings_title,
            settings_description: tables.text.settings_description,
            settings_continue_with_selected_preferences: tables
                .text
                .settings_continue_with_selected_preferences,
            settings_used_services: tables.text.settings_used_services,
            show_policy: tables.text.show_policy,
            categories: tables.categories,
        }
    }
}

impl From<&ConsentOptions> for ConfigTables {
    fn from(options: &ConsentOptions) -> Self {
        ConfigTables {
            general: GeneralConfig {
                revision: options.revision,
                auto_show: options.auto_show,
                default_locale: options.default_locale.clone(),
                policy_url: options.policy_url.clone(),
            },
            cookie: CookieConfig::from(&options.cookie),
            check: options.check.clone(),
            prompt: options.prompt_variant.clone(),
            text: TextConfig {
                consent_title: options.consent_title.clone(),
                consent_description: options.consent_description.clone(),
                consent_accept_all: options.consent_accept_all.clone(),
                consent_acknowledge: options.consent_acknowledge.clone(),
                consent_necessary_only: options.consent_necessary_only.clone(),
                open_preferences: options.open_preferences.clone(),
                settings_title: options.settings_title.clone(),
                settings_description: options.settings_description.clone(),
                settings_continue_with_selected_preferences: options
                    .settings_continue_with_selected_preferences
                    .clone(),
                settings_used_services: options.settings_used_services.clone(),
                show_policy: options.show_policy.clone(),
            },
            categories: options.categories.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct GeneralConfig {
    #[serde(default = "defaults::default_revision")]
    revision: i32,
    #[serde(default = "defaults::default_auto_show")]
    auto_show: bool,
    #[serde(default = "defaults::default_locale")]
    default_locale: String,
    #[serde(default = "defaults::default_policy_url")]
    policy_url: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            revision: defaults::default_revision(),
            auto_show: defaults::default_auto_show(),
            default_locale: defaults::default_locale(),
            policy_url: defaults::default_policy_url(),
        }
    }
}

/// Cookie section, also the serde form of [`CookieWriteOptions`]. `max_age`
/// is read as "absent" rather than defaulted so input that only sets `expires`
/// does not inherit the default max-age. A zero `max_age` spells "no max-age"
/// explicitly.
#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub(super) struct CookieConfig {
    #[serde(default = "defaults::default_cookie_name")]
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    domain: Option<String>,
    #[serde(default)]
    http_only: bool,
    #[serde(default = "defaults::default_cookie_is_essential")]
    is_essential: bool,
    #[serde(default, with = "crate::config::duration", skip_serializing_if = "Option::is_none")]
    max_age: Option<Duration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expires: Option<DateTime<Utc>>,
    #[serde(default = "defaults::default_cookie_path")]
    path: String,
    #[serde(default)]
    same_site: SameSite,
    #[serde(default = "defaults::default_cookie_secure")]
    secure: bool,
}

impl Default for CookieConfig {
    fn default() -> Self {
        CookieConfig::from(&CookieWriteOptions::default())
    }
}

impl From<CookieConfig> for CookieWriteOptions {
    fn from(cookie: CookieConfig) -> Self {
        let max_age = match (cookie.max_age, cookie.expires) {
            (Some(age), _) if age.is_zero() => None,
            (Some(age), _) => Some(age),
            (None, Some(_)) => None,
            (None, None) => defaults::default_cookie_max_age(),
        };
        CookieWriteOptions {
            name: cookie.name,
            domain: cookie.domain,
            http_only: cookie.http_only,
            is_essential: cookie.is_essential,
            max_age,
            expires: cookie.expires,
            path: cookie.path,
            same_site: cookie.same_site,
            secure: cookie.secure,
        }
    }
}

impl From<&CookieWriteOptions> for CookieConfig {
    fn from(cookie: &CookieWriteOptions) -> Self {
        let max_age = match (cookie.max_age, cookie.expires) {
            (Some(age), _) => Some(age),
            (None, Some(_)) => None,
            (None, None) => Some(Duration::ZERO),
        };
        CookieConfig {
            name: cookie.name.clone(),
            domain: cookie.domain.clone(),
            http_only: cookie.http_only,
            is_essential: cookie.is_essential,
            max_age,
            expires: cookie.expires,
            path: cookie.path.clone(),
            same_site: cookie.same_site,
            secure: cookie.secure,
        }
    }
}

impl From<CookieWriteOptions> for CookieConfig {
    fn from(cookie: CookieWriteOptions) -> Self {
        CookieConfig::from(&cookie)
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct TextConfig {
    #[serde(default = "defaults::default_consent_title")]
    consent_title: LocalizedText,
    #[serde(default = "defaults::default_consent_description")]
    consent_description: LocalizedText,
    #[serde(default = "defaults::default_consent_accept_all")]
    consent_accept_all: LocalizedText,
    #[serde(default = "defaults::default_consent_acknowledge")]
    consent_acknowledge: LocalizedText,
    #[serde(default = "defaults::default_consent_necessary_only")]
    consent_necessary_only: LocalizedText,
    #[serde(default = "defaults::default_open_preferences")]
    open_preferences: LocalizedText,
    #[serde(default = "defaults::default_settings_title")]
    settings_title: LocalizedText,
    #[serde(default = "defaults::default_settings_description")]
    settings_description: LocalizedText,
    #[serde(default = "defaults::default_settings_continue_with_selected_preferences")]
    settings_continue_with_selected_preferences: LocalizedText,
    #[serde(default = "defaults::default_settings_used_services")]
    settings_used_services: LocalizedText,
    #[serde(default = "defaults::default_show_policy")]
    show_policy: LocalizedText,
}

impl Default for TextConfig {
    fn default() -> Self {
        TextConfig {
            consent_title: defaults::default_consent_title(),
            consent_description: defaults::default_consent_description(),
            consent_accept_all: defaults::default_consent_accept_all(),
            consent_acknowledge: defaults::default_consent_acknowledge(),
            consent_necessary_only: defaults::default_consent_necessary_only(),
            open_preferences: defaults::default_open_preferences(),
            settings_title: defaults::default_settings_title(),
            settings_description: defaults::default_settings_description(),
            settings_continue_with_selected_preferences:
                defaults::default_settings_continue_with_selected_preferences(),
            settings_used_services: defaults::default_settings_used_services(),
            show_policy: defaults::default_show_policy(),
        }
    }
}
