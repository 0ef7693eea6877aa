use crate::core::{AuditContext, Finding, Rule};
use anyhow::Result;

/// Inventory of the model directory plus fuzzy presence flags.
///
/// Flags are a documented best-effort heuristic: a flag is true iff at
/// least one name directly under the model directory contains its token,
/// case-insensitive and non-recursive. Naming conventions vary, so zero
/// and multiple matches are treated identically, and a name matching two
/// tokens sets both flags.
pub struct ModelInventoryRule {
    dir: &'static str,
    flags: Vec<(&'static str, &'static str)>,
}

impl ModelInventoryRule {
    pub fn new(dir: &'static str, flags: &[(&'static str, &'static str)]) -> Self {
        Self {
            dir,
            flags: flags.to_vec(),
        }
    }

    fn inventory(&self, present: Vec<String>) -> Finding {
        let lowered: Vec<String> = present.iter().map(|name| name.to_lowercase()).collect();
        let flags = self
            .flags
            .iter()
            .map(|(flag, token)| {
                let hit = lowered.iter().any(|name| name.contains(token));
                (flag.to_string(), hit)
            })
            .collect();
        Finding::Inventory { present, flags }
    }
}

impl Rule for ModelInventoryRule {
    fn id(&self) -> &'static str {
        "models"
    }

    fn name(&self) -> &'static str {
        "Model inventory"
    }

    fn description(&self) -> &'static str {
        "Lists the model directory and derives fuzzy per-model flags"
    }

    fn check(&self, context: &AuditContext) -> Result<Finding> {
        Ok(self.inventory(context.dir_names(self.dir)))
    }

    fn fallback(&self) -> Finding {
        self.inventory(Vec::new())
    }
}
