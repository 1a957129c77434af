//! End-to-end browsing over a snapshot loaded from disk.

use std::io::Write;

use docdir_catalog::{ProviderId, load_snapshot};
use docdir_lib::*;

const PROVIDERS_YAML: &str = r#"
- id: 3
  display_name: Dr Smith
  profession: GP
  region: Gauteng North
  province: Gauteng
  suburb: Sandton Central
  telephone: 011 555 0100
- id: 1
  display_name: Naidoo
  profession: Dentist
  province: KwaZulu-Natal
  suburb: " umhlanga   rocks "
- id: 2
  display_name: Abrahams
  profession: GP
  suburb: Cape Town
  address: 1 Long Street
- id: 4
  display_name: Botha
  suburb: CapeTown
  telephone: 021 555 0199
"#;

fn load() -> Snapshot {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("providers.yaml");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(PROVIDERS_YAML.as_bytes()).unwrap();
    load_snapshot(&path).unwrap()
}

#[test]
fn snapshot_is_ordered_by_id() {
    let snapshot = load();
    let ids: Vec<i64> = snapshot.providers().iter().map(|p| p.id.0).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn every_listed_provider_resolves_from_its_own_slug() {
    let view = DirectoryView::new(load(), 30);
    for provider in view.visible() {
        let slug = encode(provider);
        assert_eq!(view.resolve(&slug), Resolution::Exact(provider), "{slug}");
    }
}

#[test]
fn stale_short_slug_falls_back_to_fuzzy_match() {
    let view = DirectoryView::new(load(), 30);
    let resolution = view.resolve("dr-smith-sandton");
    assert_eq!(resolution.kind(), MatchKind::Fuzzy);
    assert_eq!(resolution.provider().map(|p| p.id), Some(ProviderId(3)));
    assert_eq!(view.resolve("dr-nobody-nowhere"), Resolution::NotFound);
}

#[test]
fn suburb_filter_treats_spacing_variants_alike() {
    let mut view = DirectoryView::new(load(), 30);
    view.set_criteria(FilterCriteria::default().with_suburb("CAPE TOWN"));
    let names: Vec<&str> = view.visible().iter().map(|p| p.display_name()).collect();
    assert_eq!(names, vec!["Abrahams", "Botha"]);
}

#[test]
fn paging_then_filtering_starts_over() {
    let mut view = DirectoryView::new(load(), 1);
    view.advance();
    view.advance();
    assert_eq!(view.visible().len(), 3);

    view.set_criteria(FilterCriteria::default().with_profession("gp"));
    assert_eq!(view.total(), 2);
    assert_eq!(view.visible().len(), 1);
}

#[test]
fn sitemap_and_report_agree() {
    let snapshot = load();
    let eligible = filter_sitemap_providers(snapshot.providers());
    let report = QualityReport::from_providers(snapshot.providers());

    // Botha has no profession, Naidoo no contact details but is complete.
    let ids: Vec<i64> = eligible.iter().map(|p| p.id.0).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(report.sitemap_eligible, eligible.len());
    assert_eq!(report.missing_specialty, 1);
}
