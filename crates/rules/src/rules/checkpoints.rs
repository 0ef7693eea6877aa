use crate::core::{AuditContext, Finding, Rule};
use anyhow::Result;

/// One named checkpoint group: a directory that must hold a fixed file set.
#[derive(Debug, Clone)]
pub struct CheckpointGroup {
    pub name: &'static str,
    pub dir: &'static str,
    pub files: &'static [&'static str],
}

/// Per-file existence check over the checkpoint groups. A partially
/// present group stays diagnosable file by file; results are never
/// collapsed to one boolean per group.
pub struct CheckpointGroupsRule {
    groups: Vec<CheckpointGroup>,
}

impl CheckpointGroupsRule {
    pub fn new(groups: Vec<CheckpointGroup>) -> Self {
        Self { groups }
    }

    fn status(&self, exists: impl Fn(&str) -> bool) -> Finding {
        Finding::Groups(
            self.groups
                .iter()
                .map(|group| {
                    let files = group
                        .files
                        .iter()
                        .map(|file| {
                            let rel = format!("{}/{}", group.dir, file);
                            (file.to_string(), exists(&rel))
                        })
                        .collect();
                    (group.name.to_string(), files)
                })
                .collect(),
        )
    }
}

impl Rule for CheckpointGroupsRule {
    fn id(&self) -> &'static str {
        "checkpoints"
    }

    fn name(&self) -> &'static str {
        "Checkpoint groups"
    }

    fn check(&self, context: &AuditContext) -> Result<Finding> {
        Ok(self.status(|rel| context.exists(rel)))
    }

    fn fallback(&self) -> Finding {
        self.status(|_| false)
    }
}
