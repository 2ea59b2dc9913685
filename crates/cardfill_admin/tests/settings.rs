use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use cardfill_admin::{
    build_screens, load_settings, AdminSettings, LogDestination, PageSizes, ScreenKind,
    SettingsError, SettingsOverrides,
};
use cardfill_core::ConfigError;
use cardfill_store::{demo_snapshot, Database};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn missing_file_gives_defaults() {
    let temp = TempDir::new().unwrap();
    let settings = load_settings(&temp.path().join("absent.ron")).unwrap();
    assert_eq!(settings, AdminSettings::default());
    assert_eq!(settings.page_size_for(ScreenKind::Users), 15);
    assert_eq!(settings.page_size_for(ScreenKind::Audit), 20);
    assert_eq!(settings.page_size_for(ScreenKind::Fills), 20);
}

#[test]
fn partial_file_overrides_only_given_fields() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("settings.ron");
    fs::write(
        &path,
        r#"(
    data_file: Some("admin.json"),
    start_screen: requests,
    page_size: 10,
    page_sizes: { audit: 50 },
)"#,
    )
    .unwrap();

    let settings = load_settings(&path).unwrap();
    assert_eq!(settings.data_file.as_deref(), Some(Path::new("admin.json")));
    assert_eq!(settings.start_screen, ScreenKind::Requests);
    assert_eq!(settings.log, LogDestination::File);
    assert_eq!(settings.page_size_for(ScreenKind::Audit), 50);
    assert_eq!(settings.page_size_for(ScreenKind::Fills), 10);
    assert_eq!(settings.page_size_for(ScreenKind::Cards), 10);
}

#[test]
fn malformed_file_is_a_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("settings.ron");
    fs::write(&path, "(page_size: ").unwrap();

    match load_settings(&path) {
        Err(SettingsError::Parse { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn command_line_values_win_over_the_file() {
    let mut settings = AdminSettings {
        data_file: Some(PathBuf::from("from_file.json")),
        start_screen: ScreenKind::Cards,
        ..AdminSettings::default()
    };
    settings.apply_overrides(SettingsOverrides {
        data_file: Some(PathBuf::from("from_flag.json")),
        start_screen: Some(ScreenKind::Links),
        page_size: None,
        log: Some(LogDestination::Both),
    });

    assert_eq!(settings.data_file, Some(PathBuf::from("from_flag.json")));
    assert_eq!(settings.start_screen, ScreenKind::Links);
    assert_eq!(settings.log, LogDestination::Both);
    assert_eq!(settings.page_size_for(ScreenKind::Audit), 20);
}

#[test]
fn no_overrides_leave_settings_unchanged() {
    let mut settings = AdminSettings::default();
    settings.apply_overrides(SettingsOverrides::default());
    assert_eq!(settings, AdminSettings::default());
}

#[test]
fn global_page_size_replaces_per_screen_sizes() {
    let mut settings = AdminSettings::default();
    settings.apply_overrides(SettingsOverrides {
        page_size: Some(7),
        ..SettingsOverrides::default()
    });

    assert!(settings.page_sizes.is_empty());
    for kind in ScreenKind::ALL {
        assert_eq!(settings.page_size_for(kind), 7);
    }
}

#[test]
fn zero_page_size_is_rejected_when_screens_are_built() {
    let mut settings = AdminSettings::default();
    settings.apply_overrides(SettingsOverrides {
        page_size: Some(0),
        ..SettingsOverrides::default()
    });

    let db = Rc::new(Database::in_memory(demo_snapshot()));
    match build_screens(&db, &settings) {
        Err(err) => assert_eq!(err, ConfigError::ZeroPageSize),
        Ok(_) => panic!("a zero page size must not build"),
    }
}
