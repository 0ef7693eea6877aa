use crate::core::{AuditContext, Finding, Rule};
use anyhow::Result;

/// Existence check for the required backend subdirectories. Pure existence,
/// no recursion, no content inspection; one boolean per declared path.
pub struct RequiredDirsRule {
    required: Vec<&'static str>,
}

impl RequiredDirsRule {
    pub fn new(required: &[&'static str]) -> Self {
        Self {
            required: required.to_vec(),
        }
    }

    fn status(&self, exists: impl Fn(&str) -> bool) -> Finding {
        Finding::Presence(
            self.required
                .iter()
                .map(|dir| (dir.to_string(), exists(dir)))
                .collect(),
        )
    }
}

impl Rule for RequiredDirsRule {
    fn id(&self) -> &'static str {
        "dirs"
    }

    fn name(&self) -> &'static str {
        "Required directories"
    }

    fn check(&self, context: &AuditContext) -> Result<Finding> {
        Ok(self.status(|dir| context.exists(dir)))
    }

    fn fallback(&self) -> Finding {
        self.status(|_| false)
    }
}
