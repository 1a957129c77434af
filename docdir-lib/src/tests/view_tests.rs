use super::*;
use docdir_catalog::ProviderId;

fn snapshot(n: i64) -> Snapshot {
    let providers = (1..=n)
        .map(|i| {
            let suburb = if i % 2 == 0 { "Sandton" } else { "Cape Town" };
            Provider::new(ProviderId(i))
                .with_display_name(format!("Provider {i:03}"))
                .with_profession("GP")
                .with_suburb(suburb)
        })
        .collect();
    Snapshot::new(providers)
}

fn near_end() -> ScrollMetrics {
    ScrollMetrics::new(900.0, 100.0, 1000.0)
}

#[test]
fn starts_on_first_page_of_unfiltered_listing() {
    let view = DirectoryView::new(snapshot(75), 30);
    assert_eq!(view.total(), 75);
    assert_eq!(view.visible().len(), 30);
    assert_eq!(view.visible()[0].display_name(), "Provider 001");
    assert!(view.has_more());
}

#[test]
fn advance_reveals_next_page() {
    let mut view = DirectoryView::new(snapshot(75), 30);
    let delta: Vec<i64> = view.advance().iter().map(|p| p.id.0).collect();
    assert_eq!(delta, (31..=60).collect::<Vec<_>>());
    assert_eq!(view.visible().len(), 60);
    assert_eq!(view.advance().len(), 15);
    assert!(view.advance().is_empty());
    assert_eq!(view.visible().len(), 75);
}

#[test]
fn changing_criteria_resets_window() {
    let mut view = DirectoryView::new(snapshot(200), 30);
    view.advance();
    view.advance();
    assert_eq!(view.visible().len(), 90);

    assert!(view.set_criteria(FilterCriteria::default().with_suburb("sandton")));
    assert_eq!(view.total(), 100);
    assert_eq!(view.current_page(), 1);
    assert_eq!(view.visible().len(), 30.min(view.total()));
    assert!(view.visible().iter().all(|p| p.suburb() == "Sandton"));
}

#[test]
fn narrow_filter_shows_whole_result() {
    let mut view = DirectoryView::new(snapshot(200), 30);
    view.advance();
    view.set_criteria(FilterCriteria::default().with_search("Provider 01"));
    // Provider 010..=019
    assert_eq!(view.total(), 10);
    assert_eq!(view.visible().len(), 10);
    assert!(!view.has_more());
}

#[test]
fn identical_criteria_do_not_reset() {
    let mut view = DirectoryView::new(snapshot(100), 30);
    view.advance();
    assert!(!view.set_criteria(FilterCriteria::default()));
    assert_eq!(view.visible().len(), 60);
    assert!(!view.set_sort(SortOrder::Asc));
    assert_eq!(view.visible().len(), 60);
}

#[test]
fn sort_change_resets_and_reorders() {
    let mut view = DirectoryView::new(snapshot(50), 10);
    view.advance();
    assert!(view.set_sort(SortOrder::Desc));
    assert_eq!(view.visible().len(), 10);
    assert_eq!(view.visible()[0].display_name(), "Provider 050");
}

#[test]
fn clear_filters_restores_full_listing() {
    let mut view = DirectoryView::new(snapshot(40), 30);
    view.set_criteria(FilterCriteria::default().with_profession("Dentist"));
    assert!(view.is_empty());
    assert!(view.visible().is_empty());

    assert!(view.clear_filters());
    assert_eq!(view.total(), 40);
    assert_eq!(view.visible().len(), 30);
}

#[test]
fn stale_scroll_load_is_dropped_after_filter_change() {
    let mut view = DirectoryView::new(snapshot(200), 30);
    let ticket = view.request_load(&near_end()).unwrap();
    view.set_criteria(FilterCriteria::default().with_suburb("Cape Town"));

    assert!(view.complete_load(ticket).is_empty());
    assert_eq!(view.visible().len(), 30);
    assert!(view.visible().iter().all(|p| p.suburb() == "Cape Town"));
}

#[test]
fn scroll_load_reveals_one_page() {
    let mut view = DirectoryView::new(snapshot(100), 30);
    let ticket = view.request_load(&near_end()).unwrap();
    assert!(view.request_load(&near_end()).is_none());
    assert_eq!(view.complete_load(ticket).len(), 30);
    assert_eq!(view.visible().len(), 60);
}

#[test]
fn replacing_snapshot_resets_window() {
    let mut view = DirectoryView::new(snapshot(100), 30);
    view.advance();
    view.replace_snapshot(snapshot(5));
    assert_eq!(view.total(), 5);
    assert_eq!(view.visible().len(), 5);
}

#[test]
fn resolve_ignores_active_filters() {
    let mut view = DirectoryView::new(snapshot(10), 30);
    view.set_criteria(FilterCriteria::default().with_suburb("Sandton"));
    let resolution = view.resolve("dr-provider-001-cape-town");
    assert_eq!(resolution.provider().map(|p| p.id), Some(ProviderId(1)));
    assert_eq!(view.resolve("dr-nobody-nowhere"), Resolution::NotFound);
}

#[test]
fn facets_cover_whole_snapshot() {
    let view = DirectoryView::new(snapshot(4), 30);
    let facets = view.facets();
    assert_eq!(facets.suburbs, vec!["Cape Town", "Sandton"]);
    assert_eq!(facets.professions, vec!["GP"]);
}
