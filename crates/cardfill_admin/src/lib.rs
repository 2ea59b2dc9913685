//! Cardfill admin console: the list screens over the store, driven from a terminal.
pub mod console;

pub use console::app::{run, Console, Flow};
pub use console::logging::LogDestination;
pub use console::settings::{
    load_settings, AdminSettings, SettingsError, SettingsOverrides, SETTINGS_FILENAME,
};
pub use console::ui::commands::{parse, Command, CommandError};
pub use console::ui::render::{render, TableView};
pub use console::ui::screens::{build_screen, build_screens, PageSizes, Screen, ScreenKind};
