use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

use cardfill_core::{query_fn, ConfigError, PageStep, PagedListController, RecordSource};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(cardfill_logging::initialize_for_tests);
}

fn numbers(n: usize) -> Rc<RefCell<Vec<usize>>> {
    Rc::new(RefCell::new((1..=n).collect()))
}

fn controller_over(
    data: &Rc<RefCell<Vec<usize>>>,
    page_size: usize,
) -> PagedListController<impl RecordSource<Record = usize, Error = String>> {
    let data = Rc::clone(data);
    PagedListController::new(
        query_fn(move |_keyword: &str, _filter: Option<&str>| {
            Ok::<_, String>(data.borrow().clone())
        }),
        page_size,
    )
    .expect("valid page size")
}

#[test]
fn zero_page_size_is_rejected_at_construction() {
    init_logging();
    let result = PagedListController::new(
        query_fn(|_: &str, _: Option<&str>| Ok::<Vec<u8>, String>(Vec::new())),
        0,
    );
    assert_eq!(result.err(), Some(ConfigError::ZeroPageSize));
}

#[test]
fn thirty_seven_records_in_pages_of_fifteen() {
    init_logging();
    let data = numbers(37);
    let mut list = controller_over(&data, 15);

    let view = list.refresh().unwrap();
    assert_eq!(view.state.total_pages, 3);
    assert_eq!(view.state.total_records, 37);
    assert_eq!(view.items.len(), 15);
    assert_eq!(view.items.first(), Some(&1));

    let view = list.change_page(PageStep::Next).unwrap();
    assert_eq!(view.state.current_page, 2);
    assert_eq!(view.items.len(), 15);
    assert_eq!(view.items.first(), Some(&16));

    let view = list.change_page(PageStep::Next).unwrap();
    assert_eq!(view.state.current_page, 3);
    assert_eq!(view.items, (31..=37).collect::<Vec<_>>());
}

#[test]
fn empty_result_has_one_empty_page() {
    init_logging();
    let data = numbers(0);
    let mut list = controller_over(&data, 15);

    let view = list.refresh().unwrap();
    assert_eq!(view.state.total_pages, 1);
    assert_eq!(view.state.current_page, 1);
    assert_eq!(view.state.total_records, 0);
    assert!(view.items.is_empty());
    assert_eq!(view.state.page_label(), "Page 1 of 1");
}

#[test]
fn total_pages_matches_ceiling_for_many_sizes() {
    init_logging();
    for page_size in 1..=7 {
        for n in 0..=30 {
            let data = numbers(n);
            let mut list = controller_over(&data, page_size);
            let state = list.refresh().unwrap().state;
            let expected = if n == 0 { 1 } else { (n + page_size - 1) / page_size };
            assert_eq!(state.total_pages, expected, "n={n} page_size={page_size}");
        }
    }
}

#[test]
fn every_page_holds_the_expected_number_of_items() {
    init_logging();
    let data = numbers(23);
    let mut list = controller_over(&data, 5);
    list.refresh().unwrap();

    let mut seen = Vec::new();
    loop {
        let state = list.page_state();
        let expected = 5.min(23 - (state.current_page - 1) * 5);
        assert_eq!(list.items().len(), expected);
        seen.extend_from_slice(list.items());
        if !state.has_next() {
            break;
        }
        list.change_page(PageStep::Next).unwrap();
    }
    assert_eq!(seen, (1..=23).collect::<Vec<_>>());
}

#[test]
fn next_on_last_page_does_not_overflow() {
    init_logging();
    let data = numbers(20);
    let mut list = controller_over(&data, 10);
    list.refresh().unwrap();
    list.change_page(PageStep::Next).unwrap();
    assert_eq!(list.page_state().current_page, 2);

    let view = list.change_page(PageStep::Next).unwrap();
    assert_eq!(view.state.current_page, 2);
    assert_eq!(view.items.len(), 10);
}

#[test]
fn previous_on_first_page_does_not_underflow() {
    init_logging();
    let data = numbers(20);
    let mut list = controller_over(&data, 10);
    list.refresh().unwrap();

    let view = list.change_page(PageStep::Previous).unwrap();
    assert_eq!(view.state.current_page, 1);
    assert!(!view.state.has_previous());
    assert!(view.state.has_next());
}

#[test]
fn refresh_is_idempotent() {
    init_logging();
    let data = numbers(42);
    let mut list = controller_over(&data, 15);
    list.refresh().unwrap();
    list.change_page(PageStep::Next).unwrap();

    let first = list.refresh().unwrap().clone();
    let second = list.refresh().unwrap().clone();
    assert_eq!(first, second);
}

#[test]
fn shrinking_result_clamps_current_page() {
    init_logging();
    let data = numbers(45);
    let mut list = controller_over(&data, 15);
    list.refresh().unwrap();
    list.change_page(PageStep::Next).unwrap();
    list.change_page(PageStep::Next).unwrap();
    assert_eq!(list.page_state().current_page, 3);

    data.borrow_mut().truncate(16);
    let view = list.refresh().unwrap();
    assert_eq!(view.state.total_pages, 2);
    assert_eq!(view.state.current_page, 2);
    assert_eq!(view.items, vec![16]);

    data.borrow_mut().clear();
    let view = list.refresh().unwrap();
    assert_eq!(view.state.current_page, 1);
    assert!(view.items.is_empty());
}

#[test]
fn page_size_change_keeps_page_within_range() {
    init_logging();
    let data = numbers(30);
    let mut list = controller_over(&data, 5);
    list.refresh().unwrap();
    for _ in 0..5 {
        list.change_page(PageStep::Next).unwrap();
    }
    assert_eq!(list.page_state().current_page, 6);

    let view = list.set_page_size(10).unwrap();
    assert_eq!(view.state.page_size, 10);
    assert_eq!(view.state.total_pages, 3);
    assert_eq!(view.state.current_page, 3);
    assert_eq!(view.items, (21..=30).collect::<Vec<_>>());

    assert!(list.set_page_size(0).is_err());
    assert_eq!(list.page_size(), 10);
}
