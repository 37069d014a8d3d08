use metabridge_behavior::ElementDirectory;
use metabridge_types::{DcField, ElementId};

#[test]
fn dublin_core_directory_covers_every_field() {
    let dir = ElementDirectory::dublin_core();
    for field in DcField::ALL {
        assert!(dir.element_for(field).is_some(), "{field} has no element id");
    }
}

#[test]
fn title_and_creator_use_host_ids() {
    let dir = ElementDirectory::dublin_core();
    assert_eq!(dir.element_named("Title"), Some(ElementId::new(50)));
    assert_eq!(dir.element_named("Creator"), Some(ElementId::new(39)));
}

#[test]
fn reverse_lookup_by_element_id() {
    let dir = ElementDirectory::dublin_core();
    assert_eq!(dir.field_for(ElementId::new(41)), Some(DcField::Description));
    assert_eq!(dir.field_for(ElementId::new(1)), None);
}

#[test]
fn unknown_names_have_no_element() {
    let dir = ElementDirectory::dublin_core();
    assert_eq!(dir.element_named("Audience"), None);
    assert_eq!(ElementDirectory::default().element_named("Title"), None);
}
