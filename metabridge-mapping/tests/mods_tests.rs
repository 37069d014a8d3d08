mod common;

use common::{MODS_DEFAULT_NS, MODS_RECORD};
use metabridge_mapping::{extract, extract_all, Importer, SourceDocument};
use metabridge_types::DcField;
use pretty_assertions::assert_eq;

fn values(xml: &str, field: &str) -> Vec<String> {
    let importer = Importer::mods().unwrap();
    let doc = SourceDocument::parse("http://repo.example.edu/fedora/objects/demo:1/datastreams/MODS/content", xml).unwrap();
    extract(&doc, importer.queries_for(field))
}

// ── Field mappings ────────────────────────────────────────────────

#[test]
fn title_from_title_info() {
    assert_eq!(values(MODS_RECORD, "Title"), vec!["Letter from Thomas Jefferson"]);
}

#[test]
fn creator_only_from_names_with_creator_role() {
    assert_eq!(values(MODS_RECORD, "Creator"), vec!["Jefferson, Thomas"]);
}

#[test]
fn creator_name_parts_join_into_one_value() {
    let xml = r#"<mods xmlns="http://www.loc.gov/mods/v3">
        <name type="personal">
            <namePart type="family">Smith</namePart>
            <namePart type="given">Jane</namePart>
            <role><roleTerm type="text">creator</roleTerm></role>
        </name>
        <name type="personal">
            <namePart type="family">Doe</namePart>
            <namePart type="given">John</namePart>
            <namePart type="date">1801-1870</namePart>
            <role><roleTerm type="text">creator</roleTerm></role>
        </name>
    </mods>"#;
    assert_eq!(values(xml, "Creator"), vec!["Smith, Jane", "Doe, John, 1801-1870"]);
}

#[test]
fn subject_topics_repeat() {
    assert_eq!(values(MODS_RECORD, "Subject"), vec!["Presidents", "Inaugurations"]);
}

#[test]
fn description_falls_back_to_notes_when_no_abstract() {
    assert_eq!(
        values(MODS_RECORD, "Description"),
        vec!["Written at Washington.", "Docketed by Madison."]
    );
}

#[test]
fn description_prefers_abstract_over_note_and_toc() {
    assert_eq!(values(MODS_DEFAULT_NS, "Description"), vec!["Survey of Albemarle County."]);
}

#[test]
fn date_skips_missing_date_issued() {
    assert_eq!(values(MODS_RECORD, "Date"), vec!["1801-03-04"]);
}

#[test]
fn type_prefers_type_of_resource() {
    assert_eq!(values(MODS_RECORD, "Type"), vec!["text"]);
}

#[test]
fn format_falls_through_to_extent() {
    assert_eq!(values(MODS_RECORD, "Format"), vec!["2 leaves"]);
}

#[test]
fn source_only_from_original_related_item() {
    assert_eq!(values(MODS_RECORD, "Source"), vec!["Jefferson Papers"]);
}

#[test]
fn relation_takes_titles_of_any_related_item() {
    assert_eq!(values(MODS_RECORD, "Relation"), vec!["Jefferson Papers"]);
}

#[test]
fn coverage_from_geographic_subject() {
    assert_eq!(values(MODS_RECORD, "Coverage"), vec!["Washington (D.C.)"]);
}

#[test]
fn identifier_and_language_and_publisher() {
    assert_eq!(values(MODS_RECORD, "Identifier"), vec!["MSS 38-1"]);
    assert_eq!(values(MODS_RECORD, "Language"), vec!["eng"]);
    assert_eq!(values(MODS_RECORD, "Publisher"), vec!["University of Virginia Library"]);
}

// ── Deliberately unmapped fields ──────────────────────────────────

#[test]
fn contributor_is_unmapped() {
    let importer = Importer::mods().unwrap();
    assert!(importer.queries_for("Contributor").is_empty());
    assert!(values(MODS_RECORD, "Contributor").is_empty());
}

#[test]
fn rights_is_unmapped_even_with_access_condition_present() {
    let importer = Importer::mods().unwrap();
    assert!(importer.queries_for("Rights").is_empty());
    assert!(values(MODS_RECORD, "Rights").is_empty());
}

#[test]
fn unknown_field_name_yields_empty_set() {
    let importer = Importer::mods().unwrap();
    assert!(importer.queries_for("Audience").is_empty());
    assert!(importer.queries_for("title").is_empty());
}

// ── Whole-document extraction ─────────────────────────────────────

#[test]
fn extract_all_skips_empty_fields() {
    let importer = Importer::mods().unwrap();
    let doc = SourceDocument::parse("mods.xml", MODS_DEFAULT_NS).unwrap();
    let all = extract_all(&doc, &importer);
    assert_eq!(
        all.keys().copied().collect::<Vec<_>>(),
        vec![DcField::Title, DcField::Description]
    );
    assert_eq!(all[&DcField::Title], vec!["Untitled map"]);
}

#[test]
fn mapped_fields_exclude_contributor_and_rights() {
    let importer = Importer::mods().unwrap();
    let mapped: Vec<_> = importer.catalog().mapped_fields().collect();
    assert_eq!(mapped.len(), 13);
    assert!(!mapped.contains(&DcField::Contributor));
    assert!(!mapped.contains(&DcField::Rights));
}
