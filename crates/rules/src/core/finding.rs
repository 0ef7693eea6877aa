use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::BTreeMap;

/// Structured result of one rule.
///
/// Map-shaped variants keep their entries in declaration order (backed by
/// vectors of pairs), so the serialized report is stable across runs. The
/// duplicates map is the one sparse shape: clean files are omitted, and its
/// keys are sorted rather than declared.
#[derive(Debug, Clone, PartialEq)]
pub enum Finding {
    /// Single boolean probe result.
    Flag(bool),
    /// Ordered list of violating root-relative paths.
    Paths(Vec<String>),
    /// Declared item -> exists, in declaration order.
    Presence(Vec<(String, bool)>),
    /// Directory listing plus fuzzy name-fragment flags.
    Inventory {
        present: Vec<String>,
        flags: Vec<(String, bool)>,
    },
    /// Named groups of per-file booleans, never collapsed per group.
    Groups(Vec<(String, Vec<(String, bool)>)>),
    /// Present/missing partition of a required set, in declaration order.
    Partition {
        present: Vec<String>,
        missing: Vec<String>,
    },
    /// file path -> identifier -> occurrence count, duplicates only.
    Duplicates(BTreeMap<String, BTreeMap<String, usize>>),
}

impl Finding {
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Finding::Flag(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_paths(&self) -> Option<&[String]> {
        match self {
            Finding::Paths(p) => Some(p),
            _ => None,
        }
    }
}

fn serialize_pairs<S, V>(pairs: &[(String, V)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    V: Serialize,
{
    let mut map = serializer.serialize_map(Some(pairs.len()))?;
    for (key, value) in pairs {
        map.serialize_entry(key, value)?;
    }
    map.end()
}

struct PairMap<'a, V>(&'a [(String, V)]);

impl<V: Serialize> Serialize for PairMap<'_, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_pairs(self.0, serializer)
    }
}

impl Serialize for Finding {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Finding::Flag(value) => serializer.serialize_bool(*value),
            Finding::Paths(paths) => paths.serialize(serializer),
            Finding::Presence(entries) => serialize_pairs(entries, serializer),
            Finding::Inventory { present, flags } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("present", present)?;
                map.serialize_entry("flags", &PairMap(flags))?;
                map.end()
            }
            Finding::Groups(groups) => {
                let mut map = serializer.serialize_map(Some(groups.len()))?;
                for (group, files) in groups {
                    map.serialize_entry(group, &PairMap(files))?;
                }
                map.end()
            }
            Finding::Partition { present, missing } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("present", present)?;
                map.serialize_entry("missing", missing)?;
                map.end()
            }
            Finding::Duplicates(files) => files.serialize(serializer),
        }
    }
}
