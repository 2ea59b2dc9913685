use std::sync::Once;

use cardfill_core::{apply, query_fn, ConfigError, ListError, ListMsg, PagedListController};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(cardfill_logging::initialize_for_tests);
}

fn words() -> Vec<String> {
    (1..=25).map(|n| format!("word{n:02}")).collect()
}

#[test]
fn messages_drive_the_controller() {
    init_logging();
    let mut list = PagedListController::new(
        query_fn(|keyword: &str, _: Option<&str>| {
            Ok::<_, String>(
                words()
                    .into_iter()
                    .filter(|w| w.contains(keyword))
                    .collect::<Vec<_>>(),
            )
        }),
        10,
    )
    .unwrap();

    let view = apply(&mut list, ListMsg::Refresh).unwrap();
    assert_eq!(view.state.total_pages, 3);

    let view = apply(&mut list, ListMsg::NextPage).unwrap();
    assert_eq!(view.state.current_page, 2);
    assert_eq!(view.items.first().map(String::as_str), Some("word11"));

    let view = apply(&mut list, ListMsg::PreviousPage).unwrap();
    assert_eq!(view.state.current_page, 1);

    apply(&mut list, ListMsg::NextPage).unwrap();
    let view = apply(&mut list, ListMsg::KeywordChanged("word2".to_string())).unwrap();
    assert_eq!(view.state.current_page, 1);
    assert_eq!(view.state.total_records, 6);

    let view = apply(&mut list, ListMsg::PageSizeChanged(4)).unwrap();
    assert_eq!(view.state.total_pages, 2);

    let view = apply(
        &mut list,
        ListMsg::SearchSubmitted {
            keyword: String::new(),
            filter: None,
        },
    )
    .unwrap();
    assert_eq!(view.state.total_records, 25);
    assert_eq!(view.state.total_pages, 7);
}

#[test]
fn invalid_page_size_message_is_a_config_error() {
    init_logging();
    let mut list = PagedListController::new(
        query_fn(|_: &str, _: Option<&str>| Ok::<_, String>(words())),
        10,
    )
    .unwrap();

    match apply(&mut list, ListMsg::PageSizeChanged(0)) {
        Err(ListError::Config(ConfigError::ZeroPageSize)) => {}
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn query_errors_are_passed_through() {
    init_logging();
    let mut list = PagedListController::new(
        query_fn(|_: &str, _: Option<&str>| Err::<Vec<String>, _>("offline".to_string())),
        10,
    )
    .unwrap();

    match apply(
        &mut list,
        ListMsg::FilterChanged(Some("pending".to_string())),
    ) {
        Err(ListError::Query(message)) => assert_eq!(message, "offline"),
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(list.filter().category_or_status(), None);
}
