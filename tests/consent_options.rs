use consent_config::config::{
    BUILTIN_LANGUAGES, Category, ConsentOptions, LocalizedText, NECESSARY_CATEGORY_IDENTIFIER,
    Service, TextKey, parse_config, serialize_config,
};
use consent_config::consent::{
    CategorySelection, ConsentRecord, accept_categories, check_content, requires_prompt,
};
use serde::{Deserialize, Serialize};

fn site_options() -> ConsentOptions {
    let mut options = ConsentOptions::default();
    options.revision = 2;

    let mut analytics = Category::new("analytics");
    analytics.title = LocalizedText::from([("en", "Analytics"), ("de", "Analyse")]);
    analytics.is_preselected = true;
    let mut matomo = Service::new("matomo", "https://matomo.org/privacy-policy/");
    matomo.title = LocalizedText::new().with("en", "Matomo");
    analytics.services.push(matomo);

    let mut video = Category::new("video");
    video.title = LocalizedText::new().with("en", "Embedded video");
    video
        .services
        .push(Service::new("youtube", "https://policies.google.com/privacy"));
    video
        .services
        .push(Service::new("vimeo", "https://vimeo.com/privacy"));

    options.categories.push(analytics);
    options.categories.push(video);
    options
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct CategorySummary {
    identifier: String,
    is_required: bool,
    is_preselected: bool,
    services: Vec<String>,
}

fn summarize(options: &ConsentOptions) -> Vec<CategorySummary> {
    options
        .categories
        .iter()
        .map(|c| CategorySummary {
            identifier: c.identifier.clone(),
            is_required: c.is_required,
            is_preselected: c.is_preselected,
            services: c.services.iter().map(|s| s.identifier.clone()).collect(),
        })
        .collect()
}

#[test]
fn default_text_covers_every_builtin_language() {
    let options = ConsentOptions::default();
    for lang in BUILTIN_LANGUAGES {
        for key in TextKey::ALL {
            let text = options.localized(key, lang).unwrap_or_default();
            assert!(!text.is_empty(), "{key} empty for {lang}");
        }
        let necessary = &options.categories[0];
        assert!(necessary.title.get(lang).is_some());
        assert!(necessary.description.get(lang).is_some());
    }
}

#[test]
fn default_options_contain_a_single_required_necessary_category() {
    let options = ConsentOptions::default();
    assert_eq!(options.categories.len(), 1);
    let category = &options.categories[0];
    assert_eq!(category.identifier, NECESSARY_CATEGORY_IDENTIFIER);
    assert_eq!(category.identifier, "necessary");
    assert!(category.is_required);
    assert!(!category.is_preselected);
}

#[test]
fn italian_falls_back_to_english() {
    let options = ConsentOptions::default();
    assert_eq!(options.default_locale, "en");
    assert_eq!(
        options.localized(TextKey::ConsentAcceptAll, "it"),
        Some("Accept all")
    );
    assert_eq!(
        options.localized(TextKey::CheckAcceptText, "it"),
        Some("Accept")
    );
}

#[test]
fn category_identifiers_survive_json_roundtrip() {
    let options = site_options();
    let json = serde_json::to_string(&options).expect("serialize options");
    let decoded: ConsentOptions = serde_json::from_str(&json).expect("deserialize options");
    assert_eq!(summarize(&decoded), summarize(&options));

    let summary_json = serde_json::to_string(&summarize(&options)).expect("serialize summary");
    let summary: Vec<CategorySummary> =
        serde_json::from_str(&summary_json).expect("deserialize summary");
    assert_eq!(summary, summarize(&options));
}

#[test]
fn category_identifiers_survive_toml_roundtrip() {
    let options = site_options();
    let text = serialize_config(&options).expect("serialize config");
    let decoded = parse_config(&text).expect("parse config");
    assert_eq!(summarize(&decoded), summarize(&options));
    assert_eq!(decoded, options);
}

#[test]
fn revision_edit_resets_consent_in_both_directions() {
    let options = site_options().freeze().expect("valid options");
    let record = accept_categories(&options, None, &["analytics", "video"]);
    assert_eq!(record.revision, 2);
    assert!(!requires_prompt(&options, Some(&record)));
    assert!(check_content(&options, Some(&record), &["video"]).is_allowed());

    for revision in [3, 1, -2] {
        let mut edited = options.to_options();
        edited.revision = revision;
        assert!(requires_prompt(&edited, Some(&record)), "revision {revision}");
        assert!(!check_content(&edited, Some(&record), &["video"]).is_allowed());
    }
}

#[test]
fn required_category_toggle_is_a_no_op() {
    let options = site_options();
    let record = ConsentRecord::new(options.revision, Vec::<String>::new());
    let mut selection = CategorySelection::new(&options, Some(&record));

    assert!(selection.is_enabled(NECESSARY_CATEGORY_IDENTIFIER));
    assert!(!selection.set(NECESSARY_CATEGORY_IDENTIFIER, false));
    assert!(selection.is_enabled(NECESSARY_CATEGORY_IDENTIFIER));
    assert!(!selection.is_enabled("analytics"));

    selection.accept_all();
    selection.necessary_only();
    assert_eq!(
        selection.enabled().collect::<Vec<_>>(),
        vec![NECESSARY_CATEGORY_IDENTIFIER]
    );
}
