use super::*;
use PageItem::{Gap, Page};

#[test]
fn total_pages_rounds_up_and_is_at_least_one() {
    assert_eq!(Pagination::new(1, 12, 0).total_pages(), 1);
    assert_eq!(Pagination::new(1, 12, 12).total_pages(), 1);
    assert_eq!(Pagination::new(1, 12, 13).total_pages(), 2);
    assert_eq!(Pagination::new(1, 12, 40).total_pages(), 4);
}

#[test]
fn new_clamps_page_and_per_page() {
    let p = Pagination::new(99, 0, 5);
    assert_eq!(p.per_page, 1);
    assert_eq!(p.page, 5);
    assert_eq!(Pagination::new(0, 10, 50).page, 1);
}

#[test]
fn prev_next_flags() {
    let first = Pagination::new(1, 10, 30);
    assert!(!first.has_prev());
    assert!(first.has_next());
    let last = Pagination::new(3, 10, 30);
    assert!(last.has_prev());
    assert!(!last.has_next());
    let only = Pagination::new(1, 10, 0);
    assert!(!only.has_prev() && !only.has_next());
}

#[test]
fn offset_and_range_label() {
    let p = Pagination::new(2, 12, 40);
    assert_eq!(p.offset(), 12);
    assert_eq!(p.range_label(), "13-24 of 40");
    assert_eq!(Pagination::new(4, 12, 40).range_label(), "37-40 of 40");
    assert_eq!(Pagination::new(1, 12, 0).range_label(), "No results");
}

#[test]
fn window_lists_every_page_when_few() {
    assert_eq!(Pagination::new(1, 10, 0).window(7), vec![Page(1)]);
    assert_eq!(
        Pagination::new(3, 10, 70).window(7),
        (1..=7).map(Page).collect::<Vec<_>>()
    );
}

#[test]
fn window_at_start() {
    assert_eq!(
        Pagination::new(1, 10, 100).window(7),
        vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Gap, Page(10)]
    );
}

#[test]
fn window_in_middle_has_gaps_on_both_sides() {
    assert_eq!(
        Pagination::new(6, 10, 100).window(7),
        vec![Page(1), Gap, Page(4), Page(5), Page(6), Page(7), Page(8), Page(9), Page(10)]
    );
}

#[test]
fn window_fills_single_page_gap() {
    // Page 2 would be the only hidden page, so it is shown.
    assert_eq!(
        Pagination::new(5, 10, 100).window(7),
        vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Page(7), Gap, Page(10)]
    );
}

#[test]
fn window_at_end() {
    let expected = vec![Page(1), Gap, Page(5), Page(6), Page(7), Page(8), Page(9), Page(10)];
    assert_eq!(Pagination::new(10, 10, 100).window(7), expected);
    assert_eq!(Pagination::new(9, 10, 100).window(7), expected);
}

#[test]
fn window_always_contains_current_first_and_last() {
    for page in 1..=20 {
        let items = Pagination::new(page, 5, 100).window(7);
        assert!(items.contains(&Page(1)));
        assert!(items.contains(&Page(20)));
        assert!(items.contains(&Page(page)), "page {page} missing from {items:?}");
        assert!(!items.windows(2).any(|w| w == [Gap, Gap]));
    }
}
