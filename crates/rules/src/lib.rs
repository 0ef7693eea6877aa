//! LeeWay Rules - Standards Compliance Audit Engine
//!
//! This crate provides a trait-based system for auditing a project tree
//! against the LeeWay structural conventions: required directories, file
//! headers, model and checkpoint assets, declared dependencies, duplicate
//! markup identifiers, and external tool availability.

pub mod core;
pub mod profile;
pub mod rules;
pub mod runner;
pub mod walker;

pub use core::{
    AuditContext, CommandProbe, Finding, Report, Rule, ToolProbe,
};

pub use runner::{AuditEngine, EngineConfig};

pub use profile::{backend_profile, frontend_profile, AuditProfile};

pub use rules::{
    CheckpointGroupsRule, DuplicateIdRule, HeaderPresenceRule, ModelInventoryRule,
    RequiredAssetsRule, RequiredDirsRule, RequirementsRule, ToolAvailabilityRule,
};

pub use walker::{walk_text_files, FileRecord};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
