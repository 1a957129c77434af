use docdir_catalog::types::{Provider, ProviderId};
use docdir_db::*;

fn setup_db(n: usize) -> rusqlite::Connection {
    let mut conn = open_memory().unwrap();
    let providers: Vec<Provider> = (1..=n)
        .map(|i| {
            Provider::default()
                .with_display_name(format!("Provider {i}"))
                .with_profession(if i % 3 == 0 { "Dentist" } else { "GP" })
                .with_suburb(if i % 2 == 0 { "Sandton" } else { " sandton" })
        })
        .collect();
    insert_providers(&mut conn, &providers).unwrap();
    conn
}

#[test]
fn fetch_page_is_ordered_by_id() {
    let conn = setup_db(10);
    let page = fetch_page(&conn, 3, 4).unwrap();
    let ids: Vec<i64> = page.iter().map(|p| p.id.0).collect();
    assert_eq!(ids, vec![4, 5, 6, 7]);
}

#[test]
fn fetch_page_past_end_is_empty() {
    let conn = setup_db(3);
    assert!(fetch_page(&conn, 3, 10).unwrap().is_empty());
}

#[test]
fn snapshot_collects_every_page() {
    let conn = setup_db(25);
    let snapshot = fetch_snapshot_paged(&conn, 10).unwrap();
    assert_eq!(snapshot.len(), 25);
    assert_eq!(snapshot.providers()[24].id, ProviderId(25));
}

#[test]
fn snapshot_of_exact_page_multiple() {
    let conn = setup_db(20);
    assert_eq!(fetch_snapshot_paged(&conn, 10).unwrap().len(), 20);
}

#[test]
fn snapshot_of_empty_table() {
    let conn = open_memory().unwrap();
    assert!(fetch_snapshot(&conn).unwrap().is_empty());
}

#[test]
fn snapshot_reflects_mutations_after_refetch() {
    let conn = setup_db(5);
    let before = fetch_snapshot(&conn).unwrap();
    delete_provider(&conn, ProviderId(2)).unwrap();
    let after = fetch_snapshot(&conn).unwrap();

    assert_eq!(before.len(), 5);
    assert_eq!(after.len(), 4);
    assert!(after.get(ProviderId(2)).is_none());
}

#[test]
fn stats_count_distinct_values() {
    let conn = setup_db(9);
    let stats = directory_stats(&conn).unwrap();
    assert_eq!(stats.providers, 9);
    assert_eq!(stats.max_id, Some(ProviderId(9)));
    assert_eq!(stats.professions, 2);
    assert_eq!(stats.suburbs, 1);
    assert!(stats.last_updated.is_some());
}

#[test]
fn stats_of_empty_table() {
    let conn = open_memory().unwrap();
    let stats = directory_stats(&conn).unwrap();
    assert_eq!(stats.providers, 0);
    assert_eq!(stats.max_id, None);
    assert!(stats.last_updated.is_none());
}

#[test]
fn stats_fold_spacing_variants_like_facets() {
    let mut conn = open_memory().unwrap();
    let providers = vec![
        Provider::default().with_display_name("A").with_suburb("Cape Town"),
        Provider::default().with_display_name("B").with_suburb("CapeTown"),
        Provider::default().with_display_name("C").with_suburb(" cape town "),
        Provider::default().with_display_name("D").with_suburb(""),
    ];
    insert_providers(&mut conn, &providers).unwrap();

    let stats = directory_stats(&conn).unwrap();
    let facets = docdir_lib::facets(fetch_snapshot(&conn).unwrap().providers());
    assert_eq!(stats.suburbs, 1);
    assert_eq!(stats.suburbs as usize, facets.suburbs.len());
    assert_eq!(stats.professions, 0);
}
