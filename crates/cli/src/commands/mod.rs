//! Command implementations for the leeway CLI.
//!
//! Both subcommands share one shape: build the tree's profile, run every
//! rule against the given root, write the JSON report under the tree's
//! `run/` directory, and print where it landed.

pub mod audit;
