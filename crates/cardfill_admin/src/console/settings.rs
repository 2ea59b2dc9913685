use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use cardfill_logging::admin_info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::logging::LogDestination;
use super::ui::screens::{PageSizes, ScreenKind};

pub const SETTINGS_FILENAME: &str = ".cardfill_admin.ron";
pub const DEFAULT_PAGE_SIZE: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminSettings {
    /// JSON snapshot the store reads from.
    pub data_file: Option<PathBuf>,
    pub log: LogDestination,
    pub start_screen: ScreenKind,
    pub page_size: usize,
    /// Per-screen overrides of `page_size`.
    pub page_sizes: BTreeMap<ScreenKind, usize>,
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self {
            data_file: None,
            log: LogDestination::default(),
            start_screen: ScreenKind::Users,
            page_size: DEFAULT_PAGE_SIZE,
            page_sizes: BTreeMap::from([(ScreenKind::Audit, 20), (ScreenKind::Fills, 20)]),
        }
    }
}

/// Values given on the command line; each one set wins over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub data_file: Option<PathBuf>,
    pub start_screen: Option<ScreenKind>,
    /// Applies to every screen, replacing the per-screen sizes.
    pub page_size: Option<usize>,
    pub log: Option<LogDestination>,
}

impl AdminSettings {
    pub fn apply_overrides(&mut self, overrides: SettingsOverrides) {
        if let Some(data_file) = overrides.data_file {
            self.data_file = Some(data_file);
        }
        if let Some(screen) = overrides.start_screen {
            self.start_screen = screen;
        }
        if let Some(page_size) = overrides.page_size {
            self.page_size = page_size;
            self.page_sizes.clear();
        }
        if let Some(log) = overrides.log {
            self.log = log;
        }
    }
}

impl PageSizes for AdminSettings {
    fn page_size_for(&self, kind: ScreenKind) -> usize {
        self.page_sizes
            .get(&kind)
            .copied()
            .unwrap_or(self.page_size)
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not read settings from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not parse settings in {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Loads settings from a RON file; a missing file means defaults.
pub fn load_settings(path: &Path) -> Result<AdminSettings, SettingsError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(AdminSettings::default());
        }
        Err(source) => {
            return Err(SettingsError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let settings: AdminSettings = ron::from_str(&content).map_err(|err| SettingsError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    admin_info!("Loaded settings from {:?}", path);
    Ok(settings)
}
