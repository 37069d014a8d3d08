use metabridge_config::{BridgeConfig, ConfigError, DEFAULT_OMITTED_DATASTREAMS};
use metabridge_types::{BehaviorKind, Datastream};
use pretty_assertions::assert_eq;

fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("metabridge.toml");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

// ── Defaults ─────────────────────────────────────────────────────

#[test]
fn defaults_match_documented_values() {
    let config = BridgeConfig::default();
    assert_eq!(config.default_behavior(), BehaviorKind::ImportAsText);
    assert_eq!(config.import.omitted_datastreams, DEFAULT_OMITTED_DATASTREAMS);
    assert_eq!(
        config.omitted_datastream_ids(),
        vec!["RELS-EXT", "RELS-INT", "AUDIT"]
    );
    assert_eq!(
        config.display.excluded_image_formats,
        vec!["jp2".to_string(), "x-mrsid-image".to_string()]
    );
}

#[test]
fn empty_document_is_all_defaults() {
    assert_eq!(BridgeConfig::from_toml_str("").unwrap(), BridgeConfig::default());
    assert_eq!(
        BridgeConfig::from_toml_str("[import]\n[display]\n").unwrap(),
        BridgeConfig::default()
    );
}

// ── Parsing ──────────────────────────────────────────────────────

#[test]
fn parses_every_key() {
    let config = BridgeConfig::from_toml_str(
        r#"
        [import]
        default_behavior = "do_not_import"
        omitted_datastreams = "AUDIT, POLICY ,"

        [display]
        excluded_image_formats = ["tiff"]
        "#,
    )
    .unwrap();

    assert_eq!(config.default_behavior(), BehaviorKind::DoNotImport);
    assert_eq!(config.omitted_datastream_ids(), vec!["AUDIT", "POLICY"]);
    assert_eq!(config.display.excluded_image_formats, vec!["tiff".to_string()]);
}

#[test]
fn partial_section_keeps_other_defaults() {
    let config = BridgeConfig::from_toml_str("[import]\ndefault_behavior = \"import_as_link\"\n")
        .unwrap();
    assert_eq!(config.default_behavior(), BehaviorKind::ImportAsLink);
    assert_eq!(config.import.omitted_datastreams, DEFAULT_OMITTED_DATASTREAMS);
}

#[test]
fn strict_parse_rejects_bad_input() {
    assert!(matches!(
        BridgeConfig::from_toml_str("this is not valid toml {{{{"),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        BridgeConfig::from_toml_str("[import]\ndefault_behavior = \"shout\"\n"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn strict_read_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = BridgeConfig::read_from(dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

// ── Fallback loading ─────────────────────────────────────────────

#[test]
fn load_from_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = BridgeConfig::load_from(dir.path().join("nonexistent.toml"));
    assert_eq!(config, BridgeConfig::default());
}

#[test]
fn load_from_malformed_file_uses_defaults() {
    let (_dir, path) = write_config("[import\ndefault_behavior = ");
    assert_eq!(BridgeConfig::load_from(path), BridgeConfig::default());
}

#[test]
fn load_from_reads_valid_file() {
    let (_dir, path) = write_config("[display]\nexcluded_image_formats = []\n");
    let config = BridgeConfig::load_from(path);
    assert!(config.display.excluded_image_formats.is_empty());
    assert!(config.can_display_image("image/jp2"));
}

#[test]
fn save_then_load_preserves_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved.toml");
    let mut config = BridgeConfig::default();
    config.import.default_behavior = BehaviorKind::ImportAsLink;
    config.import.omitted_datastreams = "AUDIT".into();

    config.save_to(&path).unwrap();
    assert_eq!(BridgeConfig::read_from(&path).unwrap(), config);
}

// ── Datastream filtering ─────────────────────────────────────────

#[test]
fn omitted_datastreams_are_not_selectable() {
    let config = BridgeConfig::default();
    let streams = vec![
        Datastream::metadata("demo:29", "DC"),
        Datastream::content("demo:29", "RELS-EXT", "application/rdf+xml"),
        Datastream::metadata("demo:29", "MODS"),
        Datastream::content("demo:29", "AUDIT", "text/xml"),
    ];

    let dsids: Vec<_> = config
        .selectable_datastreams(&streams)
        .into_iter()
        .map(|ds| ds.dsid.as_str())
        .collect();
    assert_eq!(dsids, vec!["DC", "MODS"]);
    assert!(config.is_datastream_omitted("RELS-INT"));
    assert!(!config.is_datastream_omitted("rels-int"));
}

// ── Image display ────────────────────────────────────────────────

#[test]
fn displays_browser_images_only() {
    let config = BridgeConfig::default();
    assert!(config.can_display_image("image/jpeg"));
    assert!(config.can_display_image("image/png"));
    assert!(config.can_display_image("IMAGE/GIF"));
    assert!(config.can_display_image("image/tiff; charset=binary"));

    assert!(!config.can_display_image("image/jp2"));
    assert!(!config.can_display_image("image/x-mrsid-image"));
    assert!(!config.can_display_image("image/jp2k"));
    assert!(!config.can_display_image("image/JP2"));
    assert!(!config.can_display_image("text/xml"));
    assert!(!config.can_display_image("image/"));
    assert!(!config.can_display_image("image"));
}

#[test]
fn excluded_formats_match_as_prefixes() {
    let config = BridgeConfig::from_toml_str(
        "[display]\nexcluded_image_formats = [\"tif\", \"\"]\n",
    )
    .unwrap();
    assert!(!config.can_display_image("image/tiff"));
    assert!(!config.can_display_image("image/tif"));
    assert!(config.can_display_image("image/png"));
    assert!(config.can_display_image("image/jp2"));
}
