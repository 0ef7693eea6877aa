use std::process::{Command, Stdio};

/// Capability interface for checking whether an external executable is
/// invocable. Kept behind a trait so tests never spawn real processes.
pub trait ToolProbe: Send + Sync {
    /// True iff `tool probe_flag` can be spawned and exits zero. Not found,
    /// spawn errors, and non-zero exits all collapse to false; no retry.
    fn invoke(&self, tool: &str, probe_flag: &str) -> bool;
}

/// Real probe: spawns the tool with stdio discarded.
#[derive(Debug, Default, Clone, Copy)]
pub struct CommandProbe;

impl ToolProbe for CommandProbe {
    fn invoke(&self, tool: &str, probe_flag: &str) -> bool {
        Command::new(tool)
            .arg(probe_flag)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }
}
