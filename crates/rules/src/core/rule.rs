//! Rule trait for pluggable compliance checks.
//!
//! Rather than a monolithic auditor, each convention is an independent rule
//! implementing a common trait. Rules share no mutable state and never read
//! each other's results, so the engine may run them in any order or in
//! parallel. A rule that cannot produce a result falls back to its
//! "nothing found / all missing" finding instead of aborting the run.

use crate::core::{AuditContext, Finding};
use anyhow::Result;

pub trait Rule: Send + Sync {
    /// Stable key under which this rule's finding appears in the report.
    fn id(&self) -> &'static str;

    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str {
        "No description provided"
    }

    fn check(&self, context: &AuditContext) -> Result<Finding>;

    /// Finding substituted when `check` fails. Must have the same shape as
    /// a successful result so the report schema stays fixed.
    fn fallback(&self) -> Finding;
}
