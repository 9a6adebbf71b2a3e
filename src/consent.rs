//! Consent decisions derived from [`ConsentOptions`].
//!
//! These helpers encode the rules every consumer of the options has to follow:
//! a stored record only counts when its revision matches exactly, required
//! categories are always granted and can never be switched off, and gated
//! content lists the categories it still needs in presentation order.
//! Encoding a [`ConsentRecord`] into a cookie is left to the host.

use crate::config::{Category, ConsentOptions};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, warn};
use ts_rs::TS;

/// What the host persisted after the user last answered the prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConsentRecord {
    pub revision: i32,
    #[serde(default)]
    pub accepted_categories: BTreeSet<String>,
}

impl ConsentRecord {
    pub fn new<I, S>(revision: i32, accepted: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ConsentRecord {
            revision,
            accepted_categories: accepted.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact equality; a lower revision is as stale as a higher one.
    pub fn matches_revision(&self, revision: i32) -> bool {
        self.revision == revision
    }

    pub fn has_accepted(&self, identifier: &str) -> bool {
        self.accepted_categories.contains(identifier)
    }
}

/// Keeps only a record whose revision matches the configured one.
fn current_record<'a>(
    options: &ConsentOptions,
    record: Option<&'a ConsentRecord>,
) -> Option<&'a ConsentRecord> {
    record.filter(|r| r.matches_revision(options.revision))
}

/// Whether the consent prompt has to be shown.
pub fn requires_prompt(options: &ConsentOptions, record: Option<&ConsentRecord>) -> bool {
    match record {
        None => true,
        Some(r) if !r.matches_revision(options.revision) => {
            debug!(
                stored = r.revision,
                configured = options.revision,
                "Stored consent revision differs; prompting again"
            );
            true
        }
        Some(_) => false,
    }
}

/// Whether cookies of a category may be used right now.
pub fn is_category_allowed(
    options: &ConsentOptions,
    record: Option<&ConsentRecord>,
    identifier: &str,
) -> bool {
    if options
        .category(identifier)
        .is_some_and(|category| category.is_required)
    {
        return true;
    }
    current_record(options, record).is_some_and(|r| r.has_accepted(identifier))
}

/// Result of checking a piece of gated content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export)]
pub enum CheckOutcome {
    Allowed,
    /// Content stays hidden until these categories are accepted. Known
    /// categories come first in presentation order, unknown identifiers after
    /// them in request order.
    Blocked { missing: Vec<String> },
}

impl CheckOutcome {
    pub fn is_allowed(&self) -> bool {
        matches!(self, CheckOutcome::Allowed)
    }
}

/// Checks whether content needing `required` categories may be shown.
pub fn check_content<S: AsRef<str>>(
    options: &ConsentOptions,
    record: Option<&ConsentRecord>,
    required: &[S],
) -> CheckOutcome {
    let mut missing: Vec<String> = options
        .categories
        .iter()
        .filter(|c| required.iter().any(|id| id.as_ref() == c.identifier))
        .filter(|c| !is_category_allowed(options, record, &c.identifier))
        .map(|c| c.identifier.clone())
        .collect();

    for id in required.iter().map(AsRef::as_ref) {
        if options.category(id).is_none() && !missing.iter().any(|m| m == id) {
            warn!(category = id, "Content requires an unconfigured category");
            missing.push(id.to_string());
        }
    }

    if missing.is_empty() {
        CheckOutcome::Allowed
    } else {
        CheckOutcome::Blocked { missing }
    }
}

/// Categories behind a blocked outcome, resolved for display.
pub fn missing_categories<'a>(options: &'a ConsentOptions, outcome: &CheckOutcome) -> Vec<&'a Category> {
    match outcome {
        CheckOutcome::Allowed => Vec::new(),
        CheckOutcome::Blocked { missing } => missing
            .iter()
            .filter_map(|id| options.category(id))
            .collect(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SelectionEntry {
    identifier: String,
    required: bool,
    enabled: bool,
}

/// Toggle state behind the preferences panel.
///
/// Seeded from a current record when one exists, otherwise from each
/// category's preselection. Required categories stay on whatever the caller
/// asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySelection {
    entries: Vec<SelectionEntry>,
}

impl CategorySelection {
    pub fn new(options: &ConsentOptions, record: Option<&ConsentRecord>) -> Self {
        let current = current_record(options, record);
        let entries = options
            .categories
            .iter()
            .map(|c| SelectionEntry {
                identifier: c.identifier.clone(),
                required: c.is_required,
                enabled: c.is_required
                    || current.map_or(c.is_preselected, |r| r.has_accepted(&c.identifier)),
            })
            .collect();
        CategorySelection { entries }
    }

    fn entry_mut(&mut self, identifier: &str) -> Option<&mut SelectionEntry> {
        self.entries.iter_mut().find(|e| e.identifier == identifier)
    }

    /// Sets a toggle. Returns `false` when nothing changed: unknown category,
    /// same value, or an attempt to disable a required category.
    pub fn set(&mut self, identifier: &str, enabled: bool) -> bool {
        let Some(entry) = self.entry_mut(identifier) else {
            debug!(category = identifier, "Ignoring toggle for unknown category");
            return false;
        };
        if entry.required && !enabled {
            debug!(category = identifier, "Required category cannot be disabled");
            return false;
        }
        let changed = entry.enabled != enabled;
        entry.enabled = enabled;
        changed
    }

    pub fn toggle(&mut self, identifier: &str) -> bool {
        let enabled = self.is_enabled(identifier);
        self.set(identifier, !enabled)
    }

    pub fn is_enabled(&self, identifier: &str) -> bool {
        self.entries
            .iter()
            .any(|e| e.identifier == identifier && e.enabled)
    }

    pub fn accept<S: AsRef<str>>(&mut self, identifiers: &[S]) {
        for id in identifiers {
            self.set(id.as_ref(), true);
        }
    }

    pub fn accept_all(&mut self) {
        for entry in &mut self.entries {
            entry.enabled = true;
        }
    }

    pub fn necessary_only(&mut self) {
        for entry in &mut self.entries {
            entry.enabled = entry.required;
        }
    }

    /// Enabled identifiers in presentation order.
    pub fn enabled(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|e| e.enabled)
            .map(|e| e.identifier.as_str())
    }

    /// Record stamped with `revision`, ready for the host to persist.
    pub fn to_record(&self, revision: i32) -> ConsentRecord {
        ConsentRecord::new(revision, self.enabled())
    }
}

/// Record produced by the accept action on blocked content: the previous
/// choices (when still current) plus the newly accepted categories. Without a
/// current record only required categories are carried over; preselection
/// belongs to the preferences panel.
pub fn accept_categories<S: AsRef<str>>(
    options: &ConsentOptions,
    record: Option<&ConsentRecord>,
    identifiers: &[S],
) -> ConsentRecord {
    let current = current_record(options, record);
    let mut selection = CategorySelection::new(options, current);
    if current.is_none() {
        selection.necessary_only();
    }
    selection.accept(identifiers);
    selection.to_record(options.revision)
}
