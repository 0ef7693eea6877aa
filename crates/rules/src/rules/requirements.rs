use crate::core::{AuditContext, Finding, Rule};
use anyhow::Result;
use regex::RegexBuilder;
use std::fs;

/// Declared-dependency check against a plain-text manifest (one dependency
/// per line, optional version qualifier).
///
/// A required name matches only a line starting with that exact name
/// followed by end-of-line or a non-word character, case-insensitive, so
/// requirement `numpy` accepts `numpy==1.2` but not `numpy-extra`. An
/// absent manifest is itself a finding: every requirement is missing.
pub struct RequirementsRule {
    manifest: &'static str,
    required: Vec<&'static str>,
}

impl RequirementsRule {
    pub fn new(manifest: &'static str, required: &[&'static str]) -> Self {
        Self {
            manifest,
            required: required.to_vec(),
        }
    }

    fn all_missing(&self) -> Finding {
        Finding::Partition {
            present: Vec::new(),
            missing: self.required.iter().map(|pkg| pkg.to_string()).collect(),
        }
    }
}

impl Rule for RequirementsRule {
    fn id(&self) -> &'static str {
        "requirements"
    }

    fn name(&self) -> &'static str {
        "Declared dependencies"
    }

    fn check(&self, context: &AuditContext) -> Result<Finding> {
        let Ok(text) = fs::read_to_string(context.resolve(self.manifest)) else {
            return Ok(self.all_missing());
        };

        let mut present = Vec::new();
        let mut missing = Vec::new();
        for pkg in &self.required {
            let pattern = format!(r"^{}(\W|$)", regex::escape(pkg));
            let matcher = RegexBuilder::new(&pattern)
                .multi_line(true)
                .case_insensitive(true)
                .build()?;
            if matcher.is_match(&text) {
                present.push(pkg.to_string());
            } else {
                missing.push(pkg.to_string());
            }
        }
        Ok(Finding::Partition { present, missing })
    }

    fn fallback(&self) -> Finding {
        self.all_missing()
    }
}
