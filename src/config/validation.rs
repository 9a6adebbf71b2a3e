//! Fail-fast checks run before options are frozen.
//!
//! The model itself accepts anything; these checks catch configurations that
//! consumers indexing by identifier or writing the cookie cannot handle.

use super::models::{ConsentOptions, SameSite};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("category at position {index} has an empty identifier")]
    EmptyCategoryIdentifier { index: usize },

    #[error("duplicate category identifier '{identifier}'")]
    DuplicateCategory { identifier: String },

    #[error("service at position {index} in category '{category}' has an empty identifier")]
    EmptyServiceIdentifier { category: String, index: usize },

    #[error("duplicate service identifier '{service}' in category '{category}'")]
    DuplicateService { category: String, service: String },

    #[error("cookie sets both max_age and expires; keep only one")]
    ConflictingExpiry,

    #[error("cookie name cannot be empty")]
    EmptyCookieName,

    #[error("default locale cannot be empty")]
    EmptyDefaultLocale,

    #[error("SameSite=None requires the secure flag")]
    InsecureSameSiteNone,
}

pub(crate) fn validate(options: &ConsentOptions) -> Result<(), ValidationError> {
    if options.default_locale.trim().is_empty() {
        return Err(ValidationError::EmptyDefaultLocale);
    }

    let cookie = &options.cookie;
    if cookie.name.trim().is_empty() {
        return Err(ValidationError::EmptyCookieName);
    }
    if cookie.max_age.is_some() && cookie.expires.is_some() {
        return Err(ValidationError::ConflictingExpiry);
    }
    if cookie.same_site == SameSite::None && !cookie.secure {
        return Err(ValidationError::InsecureSameSiteNone);
    }

    let mut seen = HashSet::new();
    for (index, category) in options.categories.iter().enumerate() {
        if category.identifier.trim().is_empty() {
            return Err(ValidationError::EmptyCategoryIdentifier { index });
        }
        if !seen.insert(category.identifier.as_str()) {
            return Err(ValidationError::DuplicateCategory {
                identifier: category.identifier.clone(),
            });
        }

        let mut services = HashSet::new();
        for (index, service) in category.services.iter().enumerate() {
            if service.identifier.trim().is_empty() {
                return Err(ValidationError::EmptyServiceIdentifier {
                    category: category.identifier.clone(),
                    index,
                });
            }
            if !services.insert(service.identifier.as_str()) {
                return Err(ValidationError::DuplicateService {
                    category: category.identifier.clone(),
                    service: service.identifier.clone(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Category, Service};
    use chrono::{TimeZone, Utc};

    #[test]
    fn defaults_are_valid() {
        assert_eq!(validate(&ConsentOptions::default()), Ok(()));
    }

    #[test]
    fn rejects_duplicate_category_identifier() {
        let mut options = ConsentOptions::default();
        options.categories.push(Category::new("analytics"));
        options.categories.push(Category::new("analytics"));
        assert_eq!(
            validate(&options),
            Err(ValidationError::DuplicateCategory {
                identifier: "analytics".to_string()
            })
        );
    }

    #[test]
    fn rejects_blank_category_identifier() {
        let mut options = ConsentOptions::default();
        options.categories.push(Category::new("  "));
        assert_eq!(
            validate(&options),
            Err(ValidationError::EmptyCategoryIdentifier { index: 1 })
        );
    }

    #[test]
    fn rejects_duplicate_service_within_category() {
        let mut options = ConsentOptions::default();
        let mut marketing = Category::new("marketing");
        marketing
            .services
            .push(Service::new("ads", "https://ads.example/privacy"));
        marketing
            .services
            .push(Service::new("ads", "https://ads.example/privacy"));
        options.categories.push(marketing);
        assert!(matches!(
            validate(&options),
            Err(ValidationError::DuplicateService { .. })
        ));
    }

    #[test]
    fn same_service_in_two_categories_is_allowed() {
        let mut options = ConsentOptions::default();
        for id in ["analytics", "marketing"] {
            let mut category = Category::new(id);
            category
                .services
                .push(Service::new("tag-manager", "https://tags.example"));
            options.categories.push(category);
        }
        assert_eq!(validate(&options), Ok(()));
    }

    #[test]
    fn rejects_expires_alongside_max_age() {
        let mut options = ConsentOptions::default();
        options.cookie.expires = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).single();
        assert_eq!(validate(&options), Err(ValidationError::ConflictingExpiry));

        options.cookie.max_age = None;
        assert_eq!(validate(&options), Ok(()));
    }

    #[test]
    fn rejects_same_site_none_without_secure() {
        let mut options = ConsentOptions::default();
        options.cookie.same_site = SameSite::None;
        options.cookie.secure = false;
        assert_eq!(
            validate(&options),
            Err(ValidationError::InsecureSameSiteNone)
        );
    }

    #[test]
    fn rejects_empty_cookie_name_and_locale() {
        let mut options = ConsentOptions::default();
        options.cookie.name.clear();
        assert_eq!(validate(&options), Err(ValidationError::EmptyCookieName));

        let mut options = ConsentOptions::default();
        options.default_locale = String::new();
        assert_eq!(validate(&options), Err(ValidationError::EmptyDefaultLocale));
    }
}
