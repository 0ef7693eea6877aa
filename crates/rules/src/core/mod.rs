//! Core abstractions for the audit engine.
//!
//! The `Rule` trait defines the interface every check implements, `Finding`
//! carries a rule's structured result, and `Report` assembles findings in a
//! stable order for the single JSON write. The context layer gives rules one
//! shared read-only view of the tree under audit, and the probe interface
//! isolates process spawning so tests can substitute a fake.

pub mod context;
pub mod finding;
pub mod probe;
pub mod report;
pub mod rule;

pub use context::AuditContext;
pub use finding::Finding;
pub use probe::{CommandProbe, ToolProbe};
pub use report::Report;
pub use rule::Rule;
