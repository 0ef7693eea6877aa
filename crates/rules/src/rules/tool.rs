use crate::core::{AuditContext, Finding, Rule, ToolProbe};
use anyhow::Result;
use std::sync::Arc;

/// External tool availability probe.
///
/// A transient failure is indistinguishable from permanent absence; that is
/// an accepted limitation of a point-in-time snapshot, not something to
/// retry around.
pub struct ToolAvailabilityRule {
    key: &'static str,
    tool: &'static str,
    probe_flag: &'static str,
    probe: Arc<dyn ToolProbe>,
}

impl ToolAvailabilityRule {
    pub fn new(
        key: &'static str,
        tool: &'static str,
        probe_flag: &'static str,
        probe: Arc<dyn ToolProbe>,
    ) -> Self {
        Self {
            key,
            tool,
            probe_flag,
            probe,
        }
    }
}

impl Rule for ToolAvailabilityRule {
    fn id(&self) -> &'static str {
        self.key
    }

    fn name(&self) -> &'static str {
        "External tool availability"
    }

    fn check(&self, _context: &AuditContext) -> Result<Finding> {
        Ok(Finding::Flag(self.probe.invoke(self.tool, self.probe_flag)))
    }

    fn fallback(&self) -> Finding {
        Finding::Flag(false)
    }
}
