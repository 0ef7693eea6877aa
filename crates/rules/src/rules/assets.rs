use crate::core::{AuditContext, Finding, Rule};
use anyhow::Result;

/// Existence check for required static assets under a base directory.
/// Keys in the finding are the declared paths relative to the base, in
/// declaration order.
pub struct RequiredAssetsRule {
    base: &'static str,
    assets: Vec<&'static str>,
}

impl RequiredAssetsRule {
    pub fn new(base: &'static str, assets: &[&'static str]) -> Self {
        Self {
            base,
            assets: assets.to_vec(),
        }
    }

    fn status(&self, exists: impl Fn(&str) -> bool) -> Finding {
        Finding::Presence(
            self.assets
                .iter()
                .map(|asset| {
                    let rel = format!("{}/{}", self.base, asset);
                    (asset.to_string(), exists(&rel))
                })
                .collect(),
        )
    }
}

impl Rule for RequiredAssetsRule {
    fn id(&self) -> &'static str {
        "required_assets"
    }

    fn name(&self) -> &'static str {
        "Required static assets"
    }

    fn check(&self, context: &AuditContext) -> Result<Finding> {
        Ok(self.status(|rel| context.exists(rel)))
    }

    fn fallback(&self) -> Finding {
        self.status(|_| false)
    }
}
