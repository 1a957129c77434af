use docdir_catalog::types::{Provider, ProviderId};
use docdir_db::*;

fn smith() -> Provider {
    Provider::default()
        .with_display_name("Smith")
        .with_profession("GP")
        .with_suburb("Sandton")
        .with_telephone("011 555 0100")
}

#[test]
fn insert_assigns_ids_and_ignores_given_id() {
    let conn = open_memory().unwrap();
    let mut p = smith();
    p.id = ProviderId(999);

    let first = insert_provider(&conn, &p).unwrap();
    let second = insert_provider(&conn, &p).unwrap();
    assert_eq!(first, ProviderId(1));
    assert_eq!(second, ProviderId(2));
    assert!(get_provider(&conn, ProviderId(999)).unwrap().is_none());
}

#[test]
fn get_returns_stored_fields() {
    let conn = open_memory().unwrap();
    let id = insert_provider(&conn, &smith()).unwrap();

    let stored = get_provider(&conn, id).unwrap().unwrap();
    assert_eq!(stored.id, id);
    assert_eq!(stored.display_name(), "Smith");
    assert_eq!(stored.telephone(), "011 555 0100");
    // Absent fields stay absent.
    assert_eq!(stored.address, None);
    assert_eq!(stored.address(), "");
}

#[test]
fn update_overwrites_all_fields() {
    let conn = open_memory().unwrap();
    let id = insert_provider(&conn, &smith()).unwrap();

    let mut edited = get_provider(&conn, id).unwrap().unwrap();
    edited.suburb = Some("Rosebank".to_string());
    edited.telephone = None;
    update_provider(&conn, &edited).unwrap();

    let stored = get_provider(&conn, id).unwrap().unwrap();
    assert_eq!(stored.suburb(), "Rosebank");
    assert_eq!(stored.telephone, None);
}

#[test]
fn update_missing_provider_is_not_found() {
    let conn = open_memory().unwrap();
    let mut ghost = smith();
    ghost.id = ProviderId(42);
    let err = update_provider(&conn, &ghost).unwrap_err();
    assert!(matches!(err, OperationError::NotFound(ProviderId(42))));
}

#[test]
fn delete_removes_provider() {
    let conn = open_memory().unwrap();
    let id = insert_provider(&conn, &smith()).unwrap();
    delete_provider(&conn, id).unwrap();
    assert!(get_provider(&conn, id).unwrap().is_none());
    assert!(matches!(
        delete_provider(&conn, id),
        Err(OperationError::NotFound(_))
    ));
}

#[test]
fn deleted_ids_are_never_reused() {
    let conn = open_memory().unwrap();
    let first = insert_provider(&conn, &smith()).unwrap();
    let second = insert_provider(&conn, &smith()).unwrap();
    delete_provider(&conn, second).unwrap();
    delete_provider(&conn, first).unwrap();

    let third = insert_provider(&conn, &smith()).unwrap();
    assert!(third > second);
}

#[test]
fn bulk_insert_returns_ids_in_order() {
    let mut conn = open_memory().unwrap();
    let providers = vec![
        Provider::default().with_display_name("A"),
        Provider::default().with_display_name("B"),
        Provider::default().with_display_name("C"),
    ];
    let ids = insert_providers(&mut conn, &providers).unwrap();
    assert_eq!(ids, vec![ProviderId(1), ProviderId(2), ProviderId(3)]);
    assert_eq!(
        get_provider(&conn, ids[1]).unwrap().unwrap().display_name(),
        "B"
    );
}

#[test]
fn clear_removes_everything() {
    let mut conn = open_memory().unwrap();
    insert_providers(&mut conn, &[smith(), smith()]).unwrap();
    assert_eq!(clear_providers(&conn).unwrap(), 2);
    assert_eq!(provider_count(&conn).unwrap(), 0);
}
