//! Rule execution engine.

pub mod engine;

pub use engine::{AuditEngine, EngineConfig};
