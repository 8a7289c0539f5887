//! Registry behaviour through the public API.
//!
//! These tests exercise the add/list/find/update/delete contract and the
//! ordering and uniqueness invariants without any persistence involved.

use customer_registry::domain::{is_valid_email, is_valid_name, is_valid_phone};
use customer_registry::{CustomerUpdate, Registry, RegistryError};

fn registry_with(records: &[(&str, &str, &str)]) -> Registry {
    let mut registry = Registry::new();
    for (name, email, phone) in records {
        registry.add(name, email, phone).unwrap();
    }
    registry
}

#[test]
fn test_validation_examples() {
    assert!(is_valid_phone("1234567890"));
    assert!(!is_valid_phone("12345"));
    assert!(!is_valid_phone("12345678901"));
    assert!(!is_valid_phone("12345abcde"));

    assert!(is_valid_email("a.b@example.com"));
    assert!(!is_valid_email("not-an-email"));
    assert!(!is_valid_email("a@b.c"));

    assert!(is_valid_name("Jane Doe"));
    assert!(!is_valid_name("Jane3"));
    assert!(!is_valid_name(""));
}

#[test]
fn test_add_many_then_find_each() {
    let records = [
        ("Ann Lee", "ann@example.com", "1000000001"),
        ("Ben Ray", "ben.ray@mail.example.net", "1000000002"),
        ("Cid Moe", "cid_moe@example.io", "1000000003"),
        ("Dee Fox", "dee-fox@example.org", "1000000004"),
    ];
    let registry = registry_with(&records);

    for (name, email, phone) in records {
        let found = registry.find_by_phone(phone).unwrap();
        assert_eq!(found.name.as_str(), name);
        assert_eq!(found.email.as_str(), email);
        assert_eq!(found.phone.as_str(), phone);
    }
    assert_eq!(registry.len(), records.len());
}

#[test]
fn test_duplicate_add_keeps_original_record() {
    let mut registry = registry_with(&[("Ann Lee", "ann@example.com", "1000000001")]);

    let err = registry
        .add("Impostor", "imp@example.com", "1000000001")
        .unwrap_err();
    assert_eq!(err, RegistryError::DuplicatePhone("1000000001".to_string()));

    assert_eq!(registry.len(), 1);
    let original = registry.find_by_phone("1000000001").unwrap();
    assert_eq!(original.name.as_str(), "Ann Lee");
    assert_eq!(original.email.as_str(), "ann@example.com");
}

#[test]
fn test_list_order_survives_deletes_and_adds() {
    let mut registry = registry_with(&[
        ("Ann Lee", "ann@example.com", "1000000001"),
        ("Ben Ray", "ben@example.com", "1000000002"),
        ("Cid Moe", "cid@example.com", "1000000003"),
    ]);
    registry.delete("1000000001").unwrap();
    registry
        .add("Ann Lee", "ann@example.com", "1000000001")
        .unwrap();

    let names: Vec<&str> = registry.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Ben Ray", "Cid Moe", "Ann Lee"]);
}

#[test]
fn test_rekey_moves_identity() {
    let mut registry = registry_with(&[
        ("Ann Lee", "ann@example.com", "1112223333"),
        ("Ben Ray", "ben@example.com", "9998887777"),
    ]);

    registry
        .update("1112223333", CustomerUpdate::new().phone("4445556666"))
        .unwrap();

    assert_eq!(
        registry.find_by_phone("1112223333"),
        Err(RegistryError::NotFound("1112223333".to_string()))
    );
    let moved = registry.find_by_phone("4445556666").unwrap();
    assert_eq!(moved.name.as_str(), "Ann Lee");
    assert_eq!(moved.email.as_str(), "ann@example.com");

    // Every key still matches its record's phone field.
    for customer in registry.iter() {
        assert_eq!(
            registry.find_by_phone(customer.phone.as_str()).unwrap(),
            customer
        );
    }
}

#[test]
fn test_rekey_to_taken_phone_changes_nothing() {
    let mut registry = registry_with(&[
        ("Ann Lee", "ann@example.com", "1112223333"),
        ("Ben Ray", "ben@example.com", "9998887777"),
    ]);
    let before = registry.snapshot();

    let result = registry.update(
        "1112223333",
        CustomerUpdate::new().name("Annie").phone("9998887777"),
    );
    assert_eq!(
        result,
        Err(RegistryError::DuplicatePhone("9998887777".to_string()))
    );

    assert_eq!(registry.snapshot(), before);
    assert_eq!(
        registry.find_by_phone("1112223333").unwrap().name.as_str(),
        "Ann Lee"
    );
    assert_eq!(
        registry.find_by_phone("9998887777").unwrap().name.as_str(),
        "Ben Ray"
    );
}

#[test]
fn test_delete_then_find_and_delete_again() {
    let mut registry = registry_with(&[("Ann Lee", "ann@example.com", "1000000001")]);

    let removed = registry.delete("1000000001").unwrap();
    assert_eq!(removed.name.as_str(), "Ann Lee");
    assert!(registry.is_empty());
    assert_eq!(
        registry.find_by_phone("1000000001"),
        Err(RegistryError::NotFound("1000000001".to_string()))
    );
    assert_eq!(
        registry.delete("1000000001"),
        Err(RegistryError::NotFound("1000000001".to_string()))
    );
}

#[test]
fn test_list_is_idempotent() {
    let registry = registry_with(&[
        ("Ann Lee", "ann@example.com", "1000000001"),
        ("Ben Ray", "ben@example.com", "1000000002"),
    ]);
    let first: Vec<_> = registry.list().into_iter().cloned().collect();
    let second: Vec<_> = registry.list().into_iter().cloned().collect();
    assert_eq!(first, second);
}
