//! Header presence check.
//!
//! Every recognized source/doc file must carry one of the LeeWay header
//! markers somewhere in its content (not anchored to the top). The same
//! rule serves both trees; only the extension set and marker patterns
//! differ.

use crate::core::{AuditContext, Finding, Rule};
use anyhow::Result;
use regex::RegexSet;

pub struct HeaderPresenceRule {
    extensions: Vec<&'static str>,
    markers: RegexSet,
}

impl HeaderPresenceRule {
    pub fn new(extensions: &[&'static str], markers: &[&str]) -> Result<Self> {
        Ok(Self {
            extensions: extensions.to_vec(),
            markers: RegexSet::new(markers)?,
        })
    }
}

impl Rule for HeaderPresenceRule {
    fn id(&self) -> &'static str {
        "headers_missing"
    }

    fn name(&self) -> &'static str {
        "Header presence"
    }

    fn description(&self) -> &'static str {
        "Source and doc files must contain a LeeWay header marker"
    }

    fn check(&self, context: &AuditContext) -> Result<Finding> {
        // An empty file matches no marker and is reported missing.
        let mut missing: Vec<String> = context
            .text_files(&self.extensions)
            .filter(|record| !self.markers.is_match(&record.text))
            .map(|record| context.relative_display(&record.path))
            .collect();
        missing.sort();
        Ok(Finding::Paths(missing))
    }

    fn fallback(&self) -> Finding {
        Finding::Paths(Vec::new())
    }
}
