use cardfill_admin::{parse, Command, CommandError, ScreenKind};
use pretty_assertions::assert_eq;

#[test]
fn blank_lines_are_ignored() {
    assert_eq!(parse(""), Ok(None));
    assert_eq!(parse("   \t"), Ok(None));
}

#[test]
fn screen_names_are_case_insensitive() {
    assert_eq!(
        parse("screen Requests"),
        Ok(Some(Command::Screen(ScreenKind::Requests)))
    );
    assert_eq!(
        parse("s audit"),
        Ok(Some(Command::Screen(ScreenKind::Audit)))
    );
    assert_eq!(
        parse("screen orders"),
        Err(CommandError::UnknownScreen("orders".to_string()))
    );
    assert_eq!(
        parse("screen"),
        Err(CommandError::MissingArgument("screen"))
    );
}

#[test]
fn search_keeps_the_rest_of_the_line() {
    assert_eq!(
        parse("search 已删除 名片"),
        Ok(Some(Command::Search("已删除 名片".to_string())))
    );
    assert_eq!(
        parse("/ alice"),
        Ok(Some(Command::Search("alice".to_string())))
    );
    assert_eq!(parse("search"), Ok(Some(Command::Search(String::new()))));
}

#[test]
fn filter_all_clears_the_filter() {
    assert_eq!(
        parse("filter pending"),
        Ok(Some(Command::Filter(Some("pending".to_string()))))
    );
    assert_eq!(parse("f ALL"), Ok(Some(Command::Filter(None))));
    assert_eq!(
        parse("filter"),
        Err(CommandError::MissingArgument("filter"))
    );
}

#[test]
fn navigation_aliases() {
    assert_eq!(parse("next"), Ok(Some(Command::Next)));
    assert_eq!(parse("N"), Ok(Some(Command::Next)));
    assert_eq!(parse("prev"), Ok(Some(Command::Previous)));
    assert_eq!(parse("previous"), Ok(Some(Command::Previous)));
    assert_eq!(parse("p"), Ok(Some(Command::Previous)));
    assert_eq!(parse("r"), Ok(Some(Command::Refresh)));
    assert_eq!(parse("?"), Ok(Some(Command::Help)));
    assert_eq!(parse("exit"), Ok(Some(Command::Quit)));
}

#[test]
fn page_size_must_be_positive() {
    assert_eq!(parse("size 25"), Ok(Some(Command::PageSize(25))));
    assert_eq!(
        parse("size 0"),
        Err(CommandError::InvalidPageSize("0".to_string()))
    );
    assert_eq!(
        parse("size ten"),
        Err(CommandError::InvalidPageSize("ten".to_string()))
    );
    assert_eq!(parse("size"), Err(CommandError::MissingArgument("size")));
}

#[test]
fn unknown_words_are_reported() {
    assert_eq!(
        parse("delete 5"),
        Err(CommandError::Unknown("delete".to_string()))
    );
}
