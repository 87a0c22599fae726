//! Page metadata and the compact paginator bar.
//!
//! The bar always keeps pages 1 and 2, a window of [`PAGINATOR_WINDOW`] pages on each side of
//! the current page and the last two pages, with disabled ellipsis entries between the groups:
//! `1 2 ... 6 7 8 9 10 11 12 13 14 ... 19 20`. The ellipsis thresholds are
//! `current - 4 > 3` before the window and `last - 2 > current + 5` after it.

use common::{
    pagination::{AdjacentLinks, PageEntry, PageWindow},
    param_bag::ParamBag,
    search_const::PAGINATOR_WINDOW,
};

use super::query_translator::PARAM_PAGE;


pub fn compute_window(num_found: u64, num_returned: u64, offset: u64, num_per_page: u64) -> PageWindow {
    let num_per_page = num_per_page.max(1);
    let results_start_index = offset.saturating_add(1);
    let results_stop_index = results_start_index.saturating_add(num_returned).saturating_sub(1);
    let total_pages = num_found.div_ceil(num_per_page);
    let current_page = results_start_index.div_ceil(num_per_page);

    PageWindow {
        current_page,
        total_pages,
        results_start_index,
        results_stop_index,
        show_bar: total_pages > 1,
        bar_entries: Vec::new(),
    }
}

pub fn build_bar(num_pages: u64, current_page: u64, base_url: &str, fixed_params: &ParamBag) -> Vec<PageEntry> {
    let last = clamp_page(num_pages);
    let current = clamp_page(current_page);
    let window_start = current.saturating_sub(PAGINATOR_WINDOW);
    let window_end = current.saturating_add(PAGINATOR_WINDOW);
    let mut pages: Vec<Option<i64>> = Vec::new();

    pages.extend((1..=2).filter(|p| *p <= last).map(Some));

    if window_start > 3 {
        pages.push(None);
    }

    pages.extend((window_start..=window_end).filter(|p| *p > 2 && *p <= last).map(Some));

    if last - 2 > window_end.saturating_add(1) {
        pages.push(None);
    }

    pages.extend(
        [last - 1, last]
            .into_iter()
            .filter(|p| *p >= 1 && *p > window_end)
            .map(Some),
    );

    pages
        .into_iter()
        .map(|page| match page {
            Some(page) => {
                let page = page as u64;
                PageEntry::page(page, page_url(base_url, fixed_params, page), page == current_page)
            }
            None => PageEntry::ellipsis(),
        })
        .collect()
}

pub fn build_adjacent_links(current_page: u64, num_pages: u64, base_url: &str, fixed_params: &ParamBag) -> AdjacentLinks {
    AdjacentLinks {
        prev_url: (current_page > 1).then(|| page_url(base_url, fixed_params, current_page - 1)),
        next_url: (current_page < num_pages).then(|| page_url(base_url, fixed_params, current_page + 1)),
    }
}

/// Window, bar and adjacent links for one API response.
pub fn paginate(
    num_found: u64,
    num_returned: u64,
    offset: u64,
    num_per_page: u64,
    base_url: &str,
    fixed_params: &ParamBag,
) -> (PageWindow, AdjacentLinks) {
    let mut window = compute_window(num_found, num_returned, offset, num_per_page);
    if window.show_bar {
        window.bar_entries = build_bar(window.total_pages, window.current_page, base_url, fixed_params);
    }
    let links = build_adjacent_links(window.current_page, window.total_pages, base_url, fixed_params);
    (window, links)
}

// Header-derived page numbers beyond i64 are pinned to i64::MAX.
fn clamp_page(page: u64) -> i64 {
    i64::try_from(page).unwrap_or(i64::MAX)
}

fn page_url(base_url: &str, fixed_params: &ParamBag, page: u64) -> String {
    fixed_params.with_value(PARAM_PAGE, page.to_string()).to_url(base_url)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn labels(entries: &[PageEntry]) -> Vec<String> {
        entries.iter().map(|e| e.display_label.clone()).collect()
    }

    fn malaria() -> ParamBag {
        [("q", "malaria")].into_iter().collect()
    }

    #[test]
    fn empty_result_has_no_bar() {
        let window = compute_window(0, 0, 0, 25);
        assert_eq!(window.total_pages, 0);
        assert!(!window.show_bar);
        assert!(window.bar_entries.is_empty());

        let (window, links) = paginate(0, 0, 0, 25, "/search/", &ParamBag::new());
        assert!(window.bar_entries.is_empty());
        assert_eq!(links, AdjacentLinks::default());
    }

    #[test]
    fn first_page_of_four() {
        let window = compute_window(100, 25, 0, 25);
        assert_eq!(window.current_page, 1);
        assert_eq!(window.total_pages, 4);
        assert_eq!(window.results_start_index, 1);
        assert_eq!(window.results_stop_index, 25);
        assert!(window.show_bar);
    }

    #[test]
    fn second_page_of_partial_results() {
        let window = compute_window(35, 10, 10, 10);
        assert_eq!(window.current_page, 2);
        assert_eq!(window.total_pages, 4);
        assert_eq!(window.results_start_index, 11);
        assert_eq!(window.results_stop_index, 20);
    }

    #[test]
    fn single_page_hides_bar() {
        let window = compute_window(7, 7, 0, 25);
        assert_eq!(window.total_pages, 1);
        assert!(!window.show_bar);
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let window = compute_window(3, 0, 2, 0);
        assert_eq!(window.total_pages, 3);
        assert_eq!(window.current_page, 3);
        assert_eq!(window.results_stop_index, 2);
    }

    #[test]
    fn bar_compresses_long_result_sets() {
        let entries = build_bar(20, 10, "/search/", &malaria());
        assert_eq!(
            labels(&entries),
            vec!["1", "2", "...", "6", "7", "8", "9", "10", "11", "12", "13", "14", "...", "19", "20"]
        );

        let ellipses = entries.iter().filter(|e| e.is_ellipsis()).collect::<Vec<_>>();
        assert_eq!(ellipses.len(), 2);
        assert!(ellipses.iter().all(|e| e.is_disabled && e.url.is_none()));

        let current = entries.iter().filter(|e| e.is_current).collect::<Vec<_>>();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].target_page, Some(10));

        let last = entries.last().unwrap();
        assert_eq!(last.url.as_deref(), Some("/search/?q=malaria&page=20"));
        assert_eq!(entries[0].url.as_deref(), Some("/search/?q=malaria&page=1"));
    }

    #[test]
    fn bar_for_small_page_counts_lists_every_page() {
        assert_eq!(labels(&build_bar(4, 1, "/s/", &ParamBag::new())), vec!["1", "2", "3", "4"]);
        assert_eq!(labels(&build_bar(2, 2, "/s/", &ParamBag::new())), vec!["1", "2"]);
        assert!(build_bar(0, 1, "/s/", &ParamBag::new()).is_empty());
    }

    #[test]
    fn bar_near_the_edges() {
        assert_eq!(labels(&build_bar(20, 1, "/s/", &ParamBag::new())), vec!["1", "2", "3", "4", "5", "...", "19", "20"]);
        assert_eq!(
            labels(&build_bar(20, 20, "/s/", &ParamBag::new())),
            vec!["1", "2", "...", "16", "17", "18", "19", "20"]
        );
        // no leading ellipsis while current - 4 <= 3
        assert_eq!(labels(&build_bar(20, 7, "/s/", &ParamBag::new()))[..4], ["1", "2", "3", "4"]);
    }

    #[test]
    fn trailing_threshold_is_reproduced_as_is() {
        // 17 pages at page 10: no trailing ellipsis although page 15 is skipped
        assert_eq!(
            labels(&build_bar(17, 10, "/s/", &ParamBag::new())),
            vec!["1", "2", "...", "6", "7", "8", "9", "10", "11", "12", "13", "14", "16", "17"]
        );
    }

    #[test]
    fn adjacent_links_keep_fixed_params() {
        let params: ParamBag = [("q", "malaria"), ("page", "3"), ("limit", "10")].into_iter().collect();
        let links = build_adjacent_links(3, 5, "/concepts/", &params);
        assert_eq!(links.prev_url.as_deref(), Some("/concepts/?q=malaria&page=2&limit=10"));
        assert_eq!(links.next_url.as_deref(), Some("/concepts/?q=malaria&page=4&limit=10"));

        let first = build_adjacent_links(1, 5, "/concepts/", &params);
        assert_eq!(first.prev_url, None);
        let last = build_adjacent_links(5, 5, "/concepts/", &params);
        assert_eq!(last.next_url, None);
    }

    #[test]
    fn page_past_the_end_keeps_bar_without_current_entry() {
        let params: ParamBag = [("q", "malaria"), ("page", "5")].into_iter().collect();
        let (window, links) = paginate(30, 0, 100, 25, "/search/", &params);
        assert_eq!(window.current_page, 5);
        assert_eq!(window.total_pages, 2);
        assert_eq!(window.results_start_index, 101);
        assert_eq!(window.results_stop_index, 100);
        assert!(window.show_bar);
        assert_eq!(labels(&window.bar_entries), vec!["1", "2"]);
        assert!(window.bar_entries.iter().all(|e| !e.is_current));
        assert_eq!(links.prev_url.as_deref(), Some("/search/?q=malaria&page=4"));
        assert_eq!(links.next_url, None);
    }

    #[test]
    fn extreme_header_values_saturate() {
        let window = compute_window(10, 5, u64::MAX, 25);
        assert_eq!(window.results_start_index, u64::MAX);
        assert_eq!(window.total_pages, 1);
        assert!(window.current_page > window.total_pages);

        let (window, links) = paginate(u64::MAX / 2 + 10, 1, i64::MAX as u64 - 1, 1, "/s/", &ParamBag::new());
        assert_eq!(window.current_page, i64::MAX as u64);
        let bar = labels(&window.bar_entries);
        assert_eq!(bar[..3], ["1", "2", "..."]);
        assert_eq!(bar.last().map(String::as_str), Some(i64::MAX.to_string().as_str()));
        assert!(window.bar_entries.last().unwrap().is_current);
        assert!(links.prev_url.is_some());
        assert!(links.next_url.is_some());

        let (window, _) = paginate(u64::MAX, 1, 0, 1, "/s/", &ParamBag::new());
        assert!(window.show_bar);
        let bar = labels(&window.bar_entries);
        assert_eq!(bar[..6], ["1", "2", "3", "4", "5", "..."]);
        assert_eq!(bar.len(), 8);
        assert_eq!(bar[7], i64::MAX.to_string());
    }
}
