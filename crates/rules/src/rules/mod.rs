//! The LeeWay convention checks.
//!
//! Each rule is a small configured struct implementing [`crate::Rule`];
//! which rules run, and with what tables, is decided by [`crate::profile`].

pub mod assets;
pub mod checkpoints;
pub mod duplicate_ids;
pub mod headers;
pub mod models;
pub mod requirements;
pub mod structure;
pub mod tool;

pub use assets::RequiredAssetsRule;
pub use checkpoints::CheckpointGroupsRule;
pub use duplicate_ids::DuplicateIdRule;
pub use headers::HeaderPresenceRule;
pub use models::ModelInventoryRule;
pub use requirements::RequirementsRule;
pub use structure::RequiredDirsRule;
pub use tool::ToolAvailabilityRule;
