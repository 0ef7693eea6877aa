//! Backend and frontend audit profiles.
//!
//! The two trees share one engine; everything that differs between them is
//! data in this module: extension sets, marker patterns, required paths,
//! required assets, and the report location under the root.

use crate::core::{Rule, ToolProbe};
use crate::rules::checkpoints::CheckpointGroup;
use crate::rules::{
    CheckpointGroupsRule, DuplicateIdRule, HeaderPresenceRule, ModelInventoryRule,
    RequiredAssetsRule, RequiredDirsRule, RequirementsRule, ToolAvailabilityRule,
};
use crate::runner::{AuditEngine, EngineConfig};
use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const BACKEND_HEADER_EXTENSIONS: &[&str] = &["py", "ps1", "psm1", "mjs", "js", "ts", "md", "surql"];
const BACKEND_HEADER_MARKERS: &[&str] = &["LEEWAY HEADER — DO NOT REMOVE", "LEEWAY MICRO:"];

const REQUIRED_DIRS: &[&str] = &[
    "agentlee_mcp_hub/mcp",
    "checkpoints/converter",
    "checkpoints/base_speakers/EN",
    "checkpoints/base_speakers/ZH",
    "models",
    "routes",
    "scripts",
    "tools",
    "webrtc",
    "run",
];

const MODEL_FLAGS: &[(&str, &str)] = &[
    ("azr", "absolute_zero_reasoner"),
    ("phi3", "phi3"),
    ("gemma", "gemma"),
    ("llama", "llama"),
    ("voice", "voice"),
];

const CHECKPOINT_GROUPS: &[CheckpointGroup] = &[
    CheckpointGroup {
        name: "converter",
        dir: "checkpoints/converter",
        files: &["checkpoint.pth", "config.json"],
    },
    CheckpointGroup {
        name: "EN",
        dir: "checkpoints/base_speakers/EN",
        files: &[
            "checkpoint.pth",
            "config.json",
            "en_default_se.pth",
            "en_style_se.pth",
        ],
    },
    CheckpointGroup {
        name: "ZH",
        dir: "checkpoints/base_speakers/ZH",
        files: &["checkpoint.pth", "config.json", "zh_default_se.pth"],
    },
];

const REQUIRED_PY_PKGS: &[&str] = &[
    "fastapi",
    "uvicorn",
    "structlog",
    "pydantic",
    "pydantic-settings",
    "websockets",
    "soundfile",
    "scipy",
    "numpy",
    "ffmpeg-python",
    "jieba",
];

const FRONTEND_HEADER_EXTENSIONS: &[&str] =
    &["tsx", "ts", "jsx", "js", "mjs", "html", "css", "md"];
const FRONTEND_HEADER_MARKERS: &[&str] = &["LEEWAY HEADER", "LEEWAY MICRO:"];
const FRONTEND_MARKUP_EXTENSIONS: &[&str] = &["html", "tsx", "jsx"];

const REQUIRED_IMAGES: &[&str] = &["image/macmillionmic.png", "image/macmillionmic2.png"];

/// One auditor instance: a label, a set of rules, and where the report
/// lands relative to the root.
pub struct AuditProfile {
    pub label: &'static str,
    pub report_file: &'static str,
    rules: Vec<Arc<dyn Rule>>,
}

impl AuditProfile {
    pub fn report_path(&self, root: &Path) -> PathBuf {
        root.join("run").join(self.report_file)
    }

    pub fn engine(self, config: EngineConfig) -> AuditEngine {
        AuditEngine::new(config).with_rules(self.rules)
    }
}

pub fn backend_profile(probe: Arc<dyn ToolProbe>) -> Result<AuditProfile> {
    Ok(AuditProfile {
        label: "backend",
        report_file: "leeway_audit_report.json",
        rules: vec![
            Arc::new(RequiredDirsRule::new(REQUIRED_DIRS)),
            Arc::new(HeaderPresenceRule::new(
                BACKEND_HEADER_EXTENSIONS,
                BACKEND_HEADER_MARKERS,
            )?),
            Arc::new(ModelInventoryRule::new("models", MODEL_FLAGS)),
            Arc::new(CheckpointGroupsRule::new(CHECKPOINT_GROUPS.to_vec())),
            Arc::new(RequirementsRule::new("requirements.txt", REQUIRED_PY_PKGS)),
            Arc::new(ToolAvailabilityRule::new(
                "ffmpeg_available",
                "ffmpeg",
                "-version",
                probe,
            )),
        ],
    })
}

pub fn frontend_profile() -> Result<AuditProfile> {
    Ok(AuditProfile {
        label: "frontend",
        report_file: "leeway_frontend_audit_report.json",
        rules: vec![
            Arc::new(HeaderPresenceRule::new(
                FRONTEND_HEADER_EXTENSIONS,
                FRONTEND_HEADER_MARKERS,
            )?),
            Arc::new(DuplicateIdRule::new(FRONTEND_MARKUP_EXTENSIONS)?),
            Arc::new(RequiredAssetsRule::new("public", REQUIRED_IMAGES)),
        ],
    })
}
