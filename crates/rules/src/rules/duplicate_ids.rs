use crate::core::{AuditContext, Finding, Rule};
use anyhow::Result;
use regex::Regex;
use std::collections::BTreeMap;

/// Duplicate `id` attribute check over markup and component files.
///
/// Counts `id="value"` / `id='value'` occurrences per file and reports only
/// identifiers occurring more than once. This is a sparse violation map:
/// files with no identifiers or no duplicates are omitted entirely.
pub struct DuplicateIdRule {
    extensions: Vec<&'static str>,
    id_attr: Regex,
}

impl DuplicateIdRule {
    pub fn new(extensions: &[&'static str]) -> Result<Self> {
        Ok(Self {
            extensions: extensions.to_vec(),
            id_attr: Regex::new(r#"id=["']([^"']+)["']"#)?,
        })
    }
}

impl Rule for DuplicateIdRule {
    fn id(&self) -> &'static str {
        "duplicate_ids"
    }

    fn name(&self) -> &'static str {
        "Duplicate markup identifiers"
    }

    fn check(&self, context: &AuditContext) -> Result<Finding> {
        let mut duplicates: BTreeMap<String, BTreeMap<String, usize>> = BTreeMap::new();

        for record in context.text_files(&self.extensions) {
            let mut counts: BTreeMap<String, usize> = BTreeMap::new();
            for capture in self.id_attr.captures_iter(&record.text) {
                *counts.entry(capture[1].to_string()).or_insert(0) += 1;
            }
            counts.retain(|_, count| *count > 1);
            if !counts.is_empty() {
                duplicates.insert(context.relative_display(&record.path), counts);
            }
        }

        Ok(Finding::Duplicates(duplicates))
    }

    fn fallback(&self) -> Finding {
        Finding::Duplicates(BTreeMap::new())
    }
}
