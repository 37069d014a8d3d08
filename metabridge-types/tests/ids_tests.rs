use metabridge_types::{ElementId, ItemId, ServerId};
use std::collections::HashSet;
use std::str::FromStr;

// ── ServerId ──────────────────────────────────────────────────────

#[test]
fn server_id_new_is_unique() {
    let a = ServerId::new();
    let b = ServerId::new();
    assert_ne!(a, b);
}

#[test]
fn server_id_from_uuid_roundtrip() {
    let uuid = uuid::Uuid::now_v7();
    let id = ServerId::from_uuid(uuid);
    assert_eq!(id.as_uuid(), uuid);
}

#[test]
fn server_id_display_and_parse() {
    let id = ServerId::new();
    let parsed = ServerId::parse(&id.to_string()).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn server_id_from_str() {
    let id = ServerId::new();
    let parsed = ServerId::from_str(&id.to_string()).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn server_id_parse_invalid() {
    assert!(ServerId::parse("srvA").is_err());
    assert!(ServerId::from_str("").is_err());
}

#[test]
fn server_id_hash_and_eq() {
    let id = ServerId::new();
    let mut set = HashSet::new();
    set.insert(id);
    set.insert(id);
    assert_eq!(set.len(), 1);
}

#[test]
fn server_id_serializes_as_bare_uuid() {
    let id = ServerId::new();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, format!("\"{id}\""));
    let parsed: ServerId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, parsed);
}

// ── ItemId / ElementId ────────────────────────────────────────────

#[test]
fn item_id_wraps_integer_key() {
    let id = ItemId::new(42);
    assert_eq!(id.get(), 42);
    assert_eq!(id.to_string(), "42");
    assert_eq!(ItemId::from(42), id);
}

#[test]
fn element_id_wraps_integer_key() {
    let id = ElementId::new(50);
    assert_eq!(id.get(), 50);
    assert_eq!(id.to_string(), "50");
    assert_eq!(ElementId::from(50), id);
}

#[test]
fn integer_ids_serialize_transparently() {
    assert_eq!(serde_json::to_string(&ItemId::new(7)).unwrap(), "7");
    let el: ElementId = serde_json::from_str("39").unwrap();
    assert_eq!(el, ElementId::new(39));
}

#[test]
fn integer_ids_order_by_key() {
    let mut ids = vec![ItemId::new(3), ItemId::new(1), ItemId::new(2)];
    ids.sort();
    assert_eq!(ids, vec![ItemId::new(1), ItemId::new(2), ItemId::new(3)]);
}
