use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use docdir_catalog::encode;
use docdir_lib::{DirectoryView, FilterCriteria, PageWindow, SortOrder};

use crate::CliError;
use crate::cli_types::FilterArgs;

use super::{Source, name_or_placeholder, print_json, truncate_str};

pub(crate) fn criteria_from_args(filters: &FilterArgs) -> FilterCriteria {
    FilterCriteria {
        search: filters.search.clone().unwrap_or_default(),
        region: filters.region.clone().unwrap_or_default(),
        province: filters.province.clone().unwrap_or_default(),
        suburb: filters.suburb.clone().unwrap_or_default(),
        profession: filters.profession.clone().unwrap_or_default(),
    }
}

/// List providers matching the filters, revealing `pages` pages.
pub(crate) fn run_list(
    source: &Source,
    filters: &FilterArgs,
    desc: bool,
    pages: usize,
    page_size: Option<usize>,
    json: bool,
) -> Result<(), CliError> {
    let snapshot = source.load()?;
    let directory = &source.settings.directory;
    let window = PageWindow::new(page_size.unwrap_or(directory.page_size))
        .with_scroll_threshold(directory.scroll_threshold);

    let mut view = DirectoryView::with_window(snapshot, window);
    view.set_criteria(criteria_from_args(filters));
    if desc {
        view.set_sort(SortOrder::Desc);
    }
    for _ in 1..pages {
        if view.advance().is_empty() {
            break;
        }
    }

    let visible = view.visible();

    if json {
        let providers: Vec<_> = visible
            .iter()
            .map(|p| serde_json::json!({ "slug": encode(p), "provider": p }))
            .collect();
        return print_json(&serde_json::json!({
            "total": view.total(),
            "shown": visible.len(),
            "has_more": view.has_more(),
            "criteria": view.criteria(),
            "order": view.order(),
            "providers": providers,
        }));
    }

    if view.is_empty() {
        log::info!("No providers match your search.");
        if !view.criteria().is_unfiltered() {
            log::info!("Run 'docdir facets' to see the available filter values.");
        }
        return Ok(());
    }

    log::info!(
        "{} {}",
        "Providers".if_supports_color(Stdout, |t| t.bold()),
        format!("(showing {} of {})", visible.len(), view.total())
            .if_supports_color(Stdout, |t| t.dimmed()),
    );
    crate::log_blank();
    for provider in &visible {
        log::info!(
            "  {:<28} {:<20} {:<18} {}",
            truncate_str(name_or_placeholder(provider), 28),
            truncate_str(provider.profession(), 20),
            truncate_str(provider.suburb(), 18),
            encode(provider).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    if view.has_more() {
        crate::log_blank();
        log::info!(
            "{} more. Use --pages {} to see the next page.",
            view.total() - visible.len(),
            view.current_page() + 1,
        );
    }
    Ok(())
}
