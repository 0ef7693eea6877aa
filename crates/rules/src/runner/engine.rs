use crate::core::{AuditContext, Finding, Report, Rule};
use rayon::prelude::*;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Run rules on the rayon pool instead of sequentially. Rules share
    /// only the read-only root, so no coordination is needed; findings are
    /// still assembled in registration order.
    pub parallel_execution: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            parallel_execution: false,
        }
    }
}

/// Runs every registered rule against a root and assembles one report.
///
/// A failing rule never aborts the run: its error is logged and its
/// fallback finding takes the slot, so the report schema stays fixed. A
/// nonexistent root is likewise not fatal; rules simply report everything
/// missing.
pub struct AuditEngine {
    rules: Vec<Arc<dyn Rule>>,
    config: EngineConfig,
}

impl AuditEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            rules: Vec::new(),
            config,
        }
    }

    pub fn add_rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    pub fn with_rules(mut self, rules: Vec<Arc<dyn Rule>>) -> Self {
        self.rules.extend(rules);
        self
    }

    pub fn rules(&self) -> &[Arc<dyn Rule>] {
        &self.rules
    }

    pub fn run(&self, root: &Path) -> Report {
        let context = AuditContext::new(root);

        let check = |rule: &Arc<dyn Rule>| -> (String, Finding) {
            let finding = match rule.check(&context) {
                Ok(finding) => finding,
                Err(error) => {
                    tracing::warn!(rule = rule.id(), %error, "rule failed, using fallback");
                    rule.fallback()
                }
            };
            (rule.id().to_string(), finding)
        };

        let sections: Vec<(String, Finding)> = if self.config.parallel_execution {
            self.rules.par_iter().map(check).collect()
        } else {
            self.rules.iter().map(check).collect()
        };

        let mut report = Report::new(root.display().to_string());
        for (key, finding) in sections {
            report.push(key, finding);
        }
        report
    }
}
