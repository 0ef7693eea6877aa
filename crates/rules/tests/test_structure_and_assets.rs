/// Structure, model inventory, checkpoint, and asset rules.
use anyhow::Result;
use leeway_rules::core::AuditContext;
use leeway_rules::rules::checkpoints::CheckpointGroup;
use leeway_rules::{
    CheckpointGroupsRule, Finding, ModelInventoryRule, RequiredAssetsRule, RequiredDirsRule, Rule,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn dirs_false_on_empty_root_true_on_populated() -> Result<()> {
    let required = &["models", "routes", "run"];
    let rule = RequiredDirsRule::new(required);

    let empty = TempDir::new()?;
    let finding = rule.check(&AuditContext::new(empty.path()))?;
    assert_eq!(
        finding,
        Finding::Presence(
            required
                .iter()
                .map(|d| (d.to_string(), false))
                .collect::<Vec<_>>()
        )
    );

    let full = TempDir::new()?;
    for dir in required {
        fs::create_dir_all(full.path().join(dir))?;
    }
    let finding = rule.check(&AuditContext::new(full.path()))?;
    assert!(matches!(
        finding,
        Finding::Presence(ref entries) if entries.iter().all(|(_, present)| *present)
    ));
    Ok(())
}

#[test]
fn nested_required_dirs_resolve_by_component() -> Result<()> {
    let tree = TempDir::new()?;
    fs::create_dir_all(tree.path().join("checkpoints").join("converter"))?;

    let rule = RequiredDirsRule::new(&["checkpoints/converter", "checkpoints/base_speakers/EN"]);
    let finding = rule.check(&AuditContext::new(tree.path()))?;

    assert_eq!(
        finding,
        Finding::Presence(vec![
            ("checkpoints/converter".to_string(), true),
            ("checkpoints/base_speakers/EN".to_string(), false),
        ])
    );
    Ok(())
}

#[test]
fn model_flags_match_substrings_case_insensitively() -> Result<()> {
    let tree = TempDir::new()?;
    let models = tree.path().join("models");
    fs::create_dir_all(models.join("Phi3-mini-4k"))?;
    fs::write(models.join("My_Voice_Pack.bin"), "x")?;

    let rule = ModelInventoryRule::new(
        "models",
        &[("phi3", "phi3"), ("voice", "voice"), ("llama", "llama")],
    );
    let finding = rule.check(&AuditContext::new(tree.path()))?;

    match finding {
        Finding::Inventory { present, flags } => {
            assert_eq!(present, vec!["My_Voice_Pack.bin", "Phi3-mini-4k"]);
            assert_eq!(
                flags,
                vec![
                    ("phi3".to_string(), true),
                    ("voice".to_string(), true),
                    ("llama".to_string(), false),
                ]
            );
        }
        other => panic!("expected inventory, got {other:?}"),
    }
    Ok(())
}

#[test]
fn missing_model_dir_is_an_empty_inventory() -> Result<()> {
    let tree = TempDir::new()?;
    let rule = ModelInventoryRule::new("models", &[("voice", "voice")]);
    let finding = rule.check(&AuditContext::new(tree.path()))?;

    assert_eq!(
        finding,
        Finding::Inventory {
            present: Vec::new(),
            flags: vec![("voice".to_string(), false)],
        }
    );
    Ok(())
}

#[test]
fn partial_checkpoint_group_reports_per_file() -> Result<()> {
    let tree = TempDir::new()?;
    let en = tree.path().join("checkpoints").join("base_speakers").join("EN");
    fs::create_dir_all(&en)?;
    fs::write(en.join("checkpoint.pth"), "x")?;
    fs::write(en.join("config.json"), "{}")?;

    let rule = CheckpointGroupsRule::new(vec![CheckpointGroup {
        name: "EN",
        dir: "checkpoints/base_speakers/EN",
        files: &["checkpoint.pth", "config.json", "en_default_se.pth"],
    }]);
    let finding = rule.check(&AuditContext::new(tree.path()))?;

    assert_eq!(
        finding,
        Finding::Groups(vec![(
            "EN".to_string(),
            vec![
                ("checkpoint.pth".to_string(), true),
                ("config.json".to_string(), true),
                ("en_default_se.pth".to_string(), false),
            ]
        )])
    );
    Ok(())
}

#[test]
fn required_assets_are_keyed_relative_to_base() -> Result<()> {
    let tree = TempDir::new()?;
    let image = tree.path().join("public").join("image");
    fs::create_dir_all(&image)?;
    fs::write(image.join("macmillionmic.png"), "png")?;

    let rule = RequiredAssetsRule::new(
        "public",
        &["image/macmillionmic.png", "image/macmillionmic2.png"],
    );
    let finding = rule.check(&AuditContext::new(tree.path()))?;

    assert_eq!(
        finding,
        Finding::Presence(vec![
            ("image/macmillionmic.png".to_string(), true),
            ("image/macmillionmic2.png".to_string(), false),
        ])
    );
    Ok(())
}
