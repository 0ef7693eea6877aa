use crate::core::Finding;
use anyhow::{Context, Result};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Aggregate of all findings for one root, keyed by rule id in assembly
/// order. Serialized once per run; every rule's key is present even when
/// its finding is empty, so consumers can tell "checked, clean" from
/// "not checked".
#[derive(Debug, Clone)]
pub struct Report {
    root: String,
    sections: Vec<(String, Finding)>,
}

impl Report {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            sections: Vec::new(),
        }
    }

    pub fn push(&mut self, key: impl Into<String>, finding: Finding) {
        self.sections.push((key.into(), finding));
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn sections(&self) -> &[(String, Finding)] {
        &self.sections
    }

    pub fn get(&self, key: &str) -> Option<&Finding> {
        self.sections
            .iter()
            .find(|(section, _)| section == key)
            .map(|(_, finding)| finding)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report atomically: temp file in the destination directory,
    /// then rename over the previous report. Parent directories are created
    /// as needed.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create report directory {}", dir.display()))?;

        let json = self.to_json_pretty()?;
        let mut tmp = NamedTempFile::new_in(dir)
            .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
        tmp.write_all(json.as_bytes())?;
        tmp.write_all(b"\n")?;
        tmp.persist(path)
            .map_err(|persist| persist.error)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len() + 1))?;
        map.serialize_entry("root", &self.root)?;
        for (key, finding) in &self.sections {
            map.serialize_entry(key, finding)?;
        }
        map.end()
    }
}
